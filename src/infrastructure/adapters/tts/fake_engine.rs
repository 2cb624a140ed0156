//! Fake Speech Engine - 用于测试的合成引擎
//!
//! 不调用真实引擎，输出带 WAV 头的占位音频，载荷中记录合成时使用的音色

use async_trait::async_trait;
use std::path::Path;

use crate::application::ports::{EngineVoice, SpeechEnginePort, TtsError};

/// Fake 引擎配置
#[derive(Debug, Clone)]
pub struct FakeSpeechEngineConfig {
    /// 报告的音色列表
    pub voices: Vec<EngineVoice>,
    /// 模拟合成耗时（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeSpeechEngineConfig {
    fn default() -> Self {
        Self {
            voices: vec![
                EngineVoice::new("en", "English"),
                EngineVoice::new("pt-br", "Portuguese (Brazil)"),
                EngineVoice::new("es", "Spanish"),
            ],
            latency_ms: 50,
        }
    }
}

/// Fake Speech Engine
pub struct FakeSpeechEngine {
    config: FakeSpeechEngineConfig,
    voice: Option<String>,
}

impl FakeSpeechEngine {
    pub fn new(config: FakeSpeechEngineConfig) -> Self {
        tracing::info!(
            voices = config.voices.len(),
            latency_ms = config.latency_ms,
            "FakeSpeechEngine initialized"
        );
        Self {
            config,
            voice: None,
        }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeSpeechEngineConfig::default())
    }
}

/// 16-bit 单声道 22050Hz 的 WAV 文件
fn wav_bytes(payload: &[u8]) -> Vec<u8> {
    const SAMPLE_RATE: u32 = 22050;
    let data_len = payload.len() as u32;

    let mut out = Vec::with_capacity(44 + payload.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    out.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(payload);
    out
}

#[async_trait]
impl SpeechEnginePort for FakeSpeechEngine {
    async fn voices(&self) -> Result<Vec<EngineVoice>, TtsError> {
        Ok(self.config.voices.clone())
    }

    fn select_voice(&mut self, voice_id: Option<&str>) {
        self.voice = voice_id.map(str::to_string);
    }

    async fn synthesize_to_file(&mut self, text: &str, output: &Path) -> Result<(), TtsError> {
        // 模拟合成延迟；音色在延迟之后读取
        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        let voice = self.voice.as_deref().unwrap_or("default");
        let payload = format!("voice={};text={}", voice, text);

        tokio::fs::write(output, wav_bytes(payload.as_bytes()))
            .await
            .map_err(|e| TtsError::IoError(e.to_string()))?;

        tracing::debug!(voice = %voice, output = %output.display(), "FakeSpeechEngine: wrote audio");

        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "wav"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_writes_wav_with_selected_voice() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.wav");

        let mut engine = FakeSpeechEngine::new(FakeSpeechEngineConfig {
            latency_ms: 0,
            ..Default::default()
        });
        engine.select_voice(Some("es"));
        engine.synthesize_to_file("hola", &path).await.unwrap();

        let bytes = tokio::fs::read(&path).await.unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert!(String::from_utf8_lossy(&bytes[44..]).starts_with("voice=es;text=hola"));
    }

    #[tokio::test]
    async fn test_reports_configured_voices() {
        let engine = FakeSpeechEngine::with_defaults();
        let voices = engine.voices().await.unwrap();
        assert_eq!(voices.len(), 3);
        assert_eq!(voices[0].id, "en");
        assert!(engine.health_check().await);
    }
}
