//! Speech Command Handlers

use std::sync::Arc;

use crate::application::commands::Synthesize;
use crate::application::error::ApplicationError;
use crate::application::ports::{ArtifactStoragePort, SharedSpeechEngine, TokenStorePort};
use crate::application::queries::handlers::VerifyTokenHandler;
use crate::application::queries::VerifyToken;
use crate::domain::artifact::ArtifactName;
use crate::domain::voice::VoiceCatalog;

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizeResponse {
    pub artifact: ArtifactName,
    pub download_link: String,
}

/// Synthesize Handler
///
/// 校验顺序：必填字段 -> 令牌 -> 音色索引。
/// 选择音色与写文件在同一次引擎加锁内完成，并发请求互不影响音色设置。
pub struct SynthesizeHandler {
    verify_token: VerifyTokenHandler,
    catalog: Arc<VoiceCatalog>,
    engine: SharedSpeechEngine,
    storage: Arc<dyn ArtifactStoragePort>,
    download_base_url: String,
}

impl SynthesizeHandler {
    pub fn new(
        token_store: Arc<dyn TokenStorePort>,
        catalog: Arc<VoiceCatalog>,
        engine: SharedSpeechEngine,
        storage: Arc<dyn ArtifactStoragePort>,
        download_base_url: impl Into<String>,
    ) -> Self {
        Self {
            verify_token: VerifyTokenHandler::new(token_store),
            catalog,
            engine,
            storage,
            download_base_url: download_base_url.into(),
        }
    }

    pub async fn handle(&self, command: Synthesize) -> Result<SynthesizeResponse, ApplicationError> {
        let text = command
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApplicationError::MissingField("text"))?;
        let token = command.token.ok_or(ApplicationError::MissingField("token"))?;

        let token = self.verify_token.handle(VerifyToken { token }).await?;

        let voice = command
            .voice
            .as_deref()
            .map(|raw| self.catalog.resolve(raw))
            .transpose()?;

        let (artifact, synthesized) = {
            let mut engine = self.engine.lock().await;
            engine.select_voice(voice.map(|v| v.engine_id.as_str()));

            let artifact = ArtifactName::generate(engine.file_extension());
            let path = self.storage.path_for(&artifact);
            let synthesized = engine.synthesize_to_file(&text, &path).await;
            (artifact, synthesized)
        };

        if let Err(e) = synthesized {
            self.discard(&artifact).await;
            return Err(e.into());
        }

        let stored = match self.storage.locate(&artifact).await? {
            Some(stored) if stored.size_bytes > 0 => stored,
            _ => {
                self.discard(&artifact).await;
                return Err(ApplicationError::SynthesisFailed(format!(
                    "engine produced no audio for {}",
                    artifact
                )));
            }
        };

        let download_link = format!(
            "{}/download/{}",
            self.download_base_url.trim_end_matches('/'),
            artifact
        );

        tracing::info!(
            token = %token.redacted(),
            file = %artifact,
            voice = ?voice.map(|v| v.index),
            text_len = text.len(),
            size_bytes = stored.size_bytes,
            "Speech synthesized"
        );

        Ok(SynthesizeResponse {
            artifact,
            download_link,
        })
    }

    async fn discard(&self, artifact: &ArtifactName) {
        if let Err(e) = self.storage.discard(artifact).await {
            tracing::warn!(file = %artifact, error = %e, "Failed to remove incomplete artifact");
        }
    }
}
