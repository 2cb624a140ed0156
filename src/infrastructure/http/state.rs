//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    IssueTokenHandler, SynthesizeHandler,
    // Query handlers
    GetArtifactHandler, ListVoicesHandler, VerifyTokenHandler,
    // Ports
    ArtifactStoragePort, SharedSpeechEngine, TokenStorePort,
};
use crate::domain::voice::VoiceCatalog;

/// 应用状态
pub struct AppState {
    /// 启动时加载的音色目录
    pub catalog: Arc<VoiceCatalog>,

    // ========== Command Handlers ==========
    pub issue_token_handler: IssueTokenHandler,
    pub synthesize_handler: SynthesizeHandler,

    // ========== Query Handlers ==========
    pub verify_token_handler: VerifyTokenHandler,
    pub list_voices_handler: ListVoicesHandler,
    pub get_artifact_handler: GetArtifactHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// `download_base_url` 用于拼接下载链接：`{download_base_url}/download/{filename}`
    pub fn new(
        token_store: Arc<dyn TokenStorePort>,
        engine: SharedSpeechEngine,
        storage: Arc<dyn ArtifactStoragePort>,
        catalog: VoiceCatalog,
        download_base_url: impl Into<String>,
    ) -> Self {
        let catalog = Arc::new(catalog);

        Self {
            catalog: catalog.clone(),

            // Command handlers
            issue_token_handler: IssueTokenHandler::new(token_store.clone()),
            synthesize_handler: SynthesizeHandler::new(
                token_store.clone(),
                catalog.clone(),
                engine,
                storage.clone(),
                download_base_url,
            ),

            // Query handlers
            verify_token_handler: VerifyTokenHandler::new(token_store),
            list_voices_handler: ListVoicesHandler::new(catalog),
            get_artifact_handler: GetArtifactHandler::new(storage),
        }
    }
}
