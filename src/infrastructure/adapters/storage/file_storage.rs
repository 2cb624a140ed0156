//! File Storage - 文件系统产物存储实现
//!
//! 实现 ArtifactStoragePort trait

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{ArtifactStorageError, ArtifactStoragePort, StoredArtifact};
use crate::domain::artifact::ArtifactName;

/// 文件系统产物存储
pub struct FileArtifactStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileArtifactStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, ArtifactStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| ArtifactStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl ArtifactStoragePort for FileArtifactStorage {
    fn path_for(&self, name: &ArtifactName) -> PathBuf {
        name.resolve_in(&self.base_dir)
    }

    async fn locate(&self, name: &ArtifactName) -> Result<Option<StoredArtifact>, ArtifactStorageError> {
        let path = self.path_for(name);

        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ArtifactStorageError::IoError(e.to_string())),
        };

        if !metadata.is_file() {
            return Ok(None);
        }

        Ok(Some(StoredArtifact {
            name: name.clone(),
            path,
            size_bytes: metadata.len(),
        }))
    }

    async fn discard(&self, name: &ArtifactName) -> Result<(), ArtifactStorageError> {
        match fs::remove_file(self.path_for(name)).await {
            Ok(()) => {
                tracing::debug!(file = %name, "Discarded artifact");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ArtifactStorageError::IoError(e.to_string())),
        }
    }
}
