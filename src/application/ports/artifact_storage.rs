//! Artifact Storage Port - 出站端口
//!
//! 定义合成音频文件存放位置的抽象接口

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::artifact::ArtifactName;

/// 产物存储错误
#[derive(Debug, Error)]
pub enum ArtifactStorageError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// 已存在的产物文件
#[derive(Debug, Clone)]
pub struct StoredArtifact {
    pub name: ArtifactName,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Artifact Storage Port - 出站端口
///
/// 所有产物都是同一目录下的直接子文件
#[async_trait]
pub trait ArtifactStoragePort: Send + Sync {
    /// 产物的目标路径（不检查是否存在）
    fn path_for(&self, name: &ArtifactName) -> PathBuf;

    /// 查找产物，不存在时返回 `None`
    async fn locate(&self, name: &ArtifactName) -> Result<Option<StoredArtifact>, ArtifactStorageError>;

    /// 删除未完成的产物（合成失败时调用），文件不存在不算错误
    async fn discard(&self, name: &ArtifactName) -> Result<(), ArtifactStorageError>;
}
