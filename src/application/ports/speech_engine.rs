//! Speech Engine Port - 语音合成引擎抽象
//!
//! 定义 TTS 合成的抽象接口，具体实现在 infrastructure/adapters 层
//!
//! 引擎持有进程级的"当前音色"状态，修改状态的方法都需要 `&mut self`，
//! 共享时必须经过 [`SharedSpeechEngine`] 的互斥锁。

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Engine process error: {0}")]
    ProcessError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 引擎报告的音色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineVoice {
    /// 引擎内部标识（用于选择音色）
    pub id: String,
    /// 展示名称
    pub name: String,
}

impl EngineVoice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Speech Engine Port
///
/// 外部语音合成引擎的抽象接口
#[async_trait]
pub trait SpeechEnginePort: Send + Sync {
    /// 引擎支持的音色列表，顺序稳定
    async fn voices(&self) -> Result<Vec<EngineVoice>, TtsError>;

    /// 设置当前音色；`None` 恢复引擎默认音色
    fn select_voice(&mut self, voice_id: Option<&str>);

    /// 使用当前音色合成文本并写入 `output`，直到文件写完才返回
    async fn synthesize_to_file(&mut self, text: &str, output: &Path) -> Result<(), TtsError>;

    /// 输出文件扩展名
    fn file_extension(&self) -> &'static str;

    /// 检查引擎是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}

/// 互斥共享的合成引擎
pub type SharedSpeechEngine = Arc<Mutex<Box<dyn SpeechEnginePort>>>;

/// 将引擎包装为可跨请求共享的形式
pub fn share_engine<E>(engine: E) -> SharedSpeechEngine
where
    E: SpeechEnginePort + 'static,
{
    Arc::new(Mutex::new(Box::new(engine)))
}
