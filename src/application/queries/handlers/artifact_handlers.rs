//! Artifact Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ArtifactStoragePort, StoredArtifact};
use crate::application::queries::GetArtifact;
use crate::domain::artifact::ArtifactName;

/// GetArtifact Handler - 定位待下载的音频文件
pub struct GetArtifactHandler {
    storage: Arc<dyn ArtifactStoragePort>,
}

impl GetArtifactHandler {
    pub fn new(storage: Arc<dyn ArtifactStoragePort>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, query: GetArtifact) -> Result<StoredArtifact, ApplicationError> {
        let name = ArtifactName::parse(&query.filename)?;

        self.storage
            .locate(&name)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(name.to_string()))
    }
}
