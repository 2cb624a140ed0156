//! HTTP TTS Client - 调用外部 TTS HTTP 服务
//!
//! 实现 SpeechEnginePort trait，通过 HTTP 调用外部 TTS 服务
//!
//! 外部 TTS API:
//! GET  {base_url}/api/voices      Response: [{"id": "...", "name": "..."}]
//! POST {base_url}/api/tts/infer   Request: {"text": "...", "voice": "..."} (JSON)
//!                                 Response: audio/wav binary

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::application::ports::{EngineVoice, SpeechEnginePort, TtsError};

/// TTS 推理请求体 (JSON)
#[derive(Debug, Serialize)]
struct TtsHttpRequest<'a> {
    /// 要合成的文本
    text: &'a str,
    /// 音色标识，缺省时由服务使用默认音色
    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<&'a str>,
}

/// 音色列表条目
#[derive(Debug, Deserialize)]
struct TtsHttpVoice {
    id: String,
    name: String,
}

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP TTS 客户端
///
/// 通过 HTTP 调用外部 TTS 服务；当前音色保存在客户端本地，随每次请求发送
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
    voice: Option<String>,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            voice: None,
        })
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// 获取推理 URL
    fn infer_url(&self) -> String {
        format!("{}/api/tts/infer", self.base())
    }

    /// 获取音色列表 URL
    fn voices_url(&self) -> String {
        format!("{}/api/voices", self.base())
    }

    /// 获取健康检查 URL
    fn health_url(&self) -> String {
        format!("{}/health", self.base())
    }
}

fn map_send_error(e: reqwest::Error) -> TtsError {
    if e.is_timeout() {
        TtsError::Timeout
    } else if e.is_connect() {
        TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
    } else {
        TtsError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl SpeechEnginePort for HttpTtsClient {
    async fn voices(&self) -> Result<Vec<EngineVoice>, TtsError> {
        let response = self
            .client
            .get(self.voices_url())
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let voices: Vec<TtsHttpVoice> = response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to parse voices: {}", e)))?;

        Ok(voices
            .into_iter()
            .map(|v| EngineVoice::new(v.id, v.name))
            .collect())
    }

    fn select_voice(&mut self, voice_id: Option<&str>) {
        self.voice = voice_id.map(str::to_string);
    }

    async fn synthesize_to_file(&mut self, text: &str, output: &Path) -> Result<(), TtsError> {
        let http_request = TtsHttpRequest {
            text,
            voice: self.voice.as_deref(),
        };

        tracing::debug!(
            url = %self.infer_url(),
            text_len = text.len(),
            voice = ?http_request.voice,
            "Sending TTS infer request"
        );

        let response = self
            .client
            .post(self.infer_url())
            .json(&http_request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // 直接获取音频字节
        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?;

        if audio_data.is_empty() {
            return Err(TtsError::InvalidResponse("Empty audio body".to_string()));
        }

        tokio::fs::write(output, &audio_data)
            .await
            .map_err(|e| TtsError::IoError(e.to_string()))?;

        tracing::info!(
            audio_size = audio_data.len(),
            output = %output.display(),
            "TTS inference completed"
        );

        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "wav"
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
