//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::SharedSpeechEngine;
use crate::application::queries::ListVoices;
use crate::domain::voice::{VoiceCatalog, VoiceInfo};

/// 从引擎加载音色目录（仅在启动时调用一次）
pub async fn load_voice_catalog(engine: &SharedSpeechEngine) -> Result<VoiceCatalog, ApplicationError> {
    let voices = engine.lock().await.voices().await?;
    let catalog = VoiceCatalog::new(voices.into_iter().map(|v| (v.id, v.name)));

    tracing::info!(count = catalog.len(), "Voice catalog loaded");

    Ok(catalog)
}

/// ListVoices Handler
pub struct ListVoicesHandler {
    catalog: Arc<VoiceCatalog>,
}

impl ListVoicesHandler {
    pub fn new(catalog: Arc<VoiceCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListVoices) -> Result<Vec<VoiceInfo>, ApplicationError> {
        Ok(self.catalog.list().to_vec())
    }
}
