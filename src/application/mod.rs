//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TokenStore、SpeechEngine、ArtifactStorage）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{IssueTokenHandler, SynthesizeHandler, SynthesizeResponse},
    IssueToken, Synthesize,
};

pub use error::ApplicationError;

pub use ports::{
    share_engine, ArtifactStorageError, ArtifactStoragePort, EngineVoice, RepositoryError,
    SharedSpeechEngine, SpeechEnginePort, StoredArtifact, TokenStorePort, TtsError,
};

pub use queries::{
    handlers::{
        load_voice_catalog, GetArtifactHandler, ListVoicesHandler, VerifyTokenHandler,
    },
    GetArtifact, ListVoices, VerifyToken,
};
