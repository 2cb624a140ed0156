//! eSpeak Engine - 调用本地 espeak-ng 进程
//!
//! 实现 SpeechEnginePort trait
//!
//! - 音色列表: `espeak-ng --voices`
//! - 合成: `espeak-ng -v <voice> -s <rate> -w <file> --stdin`，文本经 stdin 传入

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{EngineVoice, SpeechEnginePort, TtsError};

/// eSpeak 引擎配置
#[derive(Debug, Clone)]
pub struct EspeakEngineConfig {
    /// 可执行文件路径
    pub program: PathBuf,
    /// 语速（词/分钟）
    pub rate: u32,
}

impl Default for EspeakEngineConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("espeak-ng"),
            rate: 150,
        }
    }
}

/// eSpeak 引擎
pub struct EspeakEngine {
    config: EspeakEngineConfig,
    /// 当前音色，`None` 使用 espeak-ng 默认音色
    voice: Option<String>,
}

impl EspeakEngine {
    pub fn new(config: EspeakEngineConfig) -> Self {
        tracing::info!(
            program = %config.program.display(),
            rate = config.rate,
            "EspeakEngine initialized"
        );
        Self {
            config,
            voice: None,
        }
    }

    /// 合成命令参数（不含程序名）
    fn synth_args(&self, output: &Path) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(voice) = &self.voice {
            args.push("-v".to_string());
            args.push(voice.clone());
        }
        args.push("-s".to_string());
        args.push(self.config.rate.to_string());
        args.push("-w".to_string());
        args.push(output.to_string_lossy().to_string());
        args.push("--stdin".to_string());
        args
    }
}

/// 解析 `espeak-ng --voices` 输出
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  af              --/M      Afrikaans          gmw/af
/// ```
///
/// 语言列作为引擎标识，VoiceName 列作为展示名称
pub fn parse_voice_list(output: &str) -> Vec<EngineVoice> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            let _priority = columns.next()?;
            let language = columns.next()?;
            let _age_gender = columns.next()?;
            let name = columns.next()?;
            Some(EngineVoice::new(language, name.replace('_', " ")))
        })
        .collect()
}

#[async_trait]
impl SpeechEnginePort for EspeakEngine {
    async fn voices(&self) -> Result<Vec<EngineVoice>, TtsError> {
        let output = Command::new(&self.config.program)
            .arg("--voices")
            .output()
            .await
            .map_err(|e| TtsError::ProcessError(format!("Cannot run {}: {}", self.config.program.display(), e)))?;

        if !output.status.success() {
            return Err(TtsError::ProcessError(format!(
                "--voices exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let voices = parse_voice_list(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(count = voices.len(), "espeak-ng voices listed");
        Ok(voices)
    }

    fn select_voice(&mut self, voice_id: Option<&str>) {
        self.voice = voice_id.map(str::to_string);
    }

    async fn synthesize_to_file(&mut self, text: &str, output: &Path) -> Result<(), TtsError> {
        let mut child = Command::new(&self.config.program)
            .args(self.synth_args(output))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| TtsError::ProcessError(format!("Cannot spawn {}: {}", self.config.program.display(), e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TtsError::ProcessError("stdin not captured".to_string()))?;
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| TtsError::IoError(e.to_string()))?;
        drop(stdin);

        let result = child
            .wait_with_output()
            .await
            .map_err(|e| TtsError::ProcessError(e.to_string()))?;

        if !result.status.success() {
            return Err(TtsError::ProcessError(format!(
                "synthesis exited with {}: {}",
                result.status,
                String::from_utf8_lossy(&result.stderr)
            )));
        }

        tracing::debug!(
            voice = ?self.voice,
            text_len = text.len(),
            output = %output.display(),
            "espeak-ng synthesis completed"
        );

        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "wav"
    }

    async fn health_check(&self) -> bool {
        Command::new(&self.config.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}
