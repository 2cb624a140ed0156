//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{ArtifactStorageError, RepositoryError, TtsError};
use crate::domain::artifact::ArtifactError;
use crate::domain::voice::VoiceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 必填字段缺失
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// 令牌未签发
    #[error("Invalid token")]
    InvalidToken,

    /// 音色索引无效
    #[error("Invalid voice id: {0}")]
    InvalidVoiceIndex(String),

    /// 产物文件不存在
    #[error("File not found: {0}")]
    NotFound(String),

    /// 文件名包含路径分隔符或相对路径段
    #[error("Invalid file name: {0}")]
    PathTraversalRejected(String),

    /// 令牌存储或产物目录不可用
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// 合成引擎失败
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),
}

impl ApplicationError {
    /// 错误类别名，用于响应体
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MissingField",
            Self::InvalidToken => "InvalidToken",
            Self::InvalidVoiceIndex(_) => "InvalidVoiceIndex",
            Self::NotFound(_) => "NotFound",
            Self::PathTraversalRejected(_) => "PathTraversalRejected",
            Self::StorageUnavailable(_) => "StorageUnavailable",
            Self::SynthesisFailed(_) => "SynthesisFailed",
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        Self::SynthesisFailed(err.to_string())
    }
}

impl From<ArtifactStorageError> for ApplicationError {
    fn from(err: ArtifactStorageError) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

impl From<VoiceError> for ApplicationError {
    fn from(err: VoiceError) -> Self {
        match err {
            VoiceError::InvalidIndex(raw) => Self::InvalidVoiceIndex(raw),
        }
    }
}

impl From<ArtifactError> for ApplicationError {
    fn from(err: ArtifactError) -> Self {
        match err {
            ArtifactError::PathTraversal(raw) => Self::PathTraversalRejected(raw),
        }
    }
}
