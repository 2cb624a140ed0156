//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod artifact_storage;
mod repositories;
mod speech_engine;

pub use artifact_storage::{ArtifactStorageError, ArtifactStoragePort, StoredArtifact};
pub use repositories::{RepositoryError, TokenStorePort};
pub use speech_engine::{
    share_engine, EngineVoice, SharedSpeechEngine, SpeechEnginePort, TtsError,
};
