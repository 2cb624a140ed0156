//! Voxgate - 令牌门控的文本转语音服务

use std::sync::Arc;

use voxgate::application::{load_voice_catalog, share_engine, SharedSpeechEngine};
use voxgate::config::{load_config, print_config, EngineKind, TtsConfig};
use voxgate::infrastructure::adapters::{
    EspeakEngine, EspeakEngineConfig, FakeSpeechEngine, FileArtifactStorage, HttpTtsClient,
    HttpTtsClientConfig,
};
use voxgate::infrastructure::http::{AppState, HttpServer, ServerConfig};
use voxgate::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteTokenStore,
};

/// 按配置创建合成引擎
fn build_engine(config: &TtsConfig) -> anyhow::Result<SharedSpeechEngine> {
    let engine = match config.engine {
        EngineKind::Espeak => share_engine(EspeakEngine::new(EspeakEngineConfig {
            program: config.espeak_path.clone(),
            rate: config.rate,
        })),
        EngineKind::Http => {
            let client_config =
                HttpTtsClientConfig::new(&config.url).with_timeout(config.timeout_secs);
            share_engine(HttpTtsClient::new(client_config)?)
        }
        EngineKind::Fake => share_engine(FakeSpeechEngine::with_defaults()),
    };

    Ok(engine)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},voxgate={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Voxgate - text-to-speech service");
    print_config(&config);

    // 确保数据目录存在
    tokio::fs::create_dir_all(&config.storage.audio_dir).await?;
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let token_store = Arc::new(SqliteTokenStore::new(pool.clone()));
    let storage = Arc::new(FileArtifactStorage::new(&config.storage.audio_dir).await?);

    // 创建合成引擎并加载音色目录（进程内只加载一次）
    let engine = build_engine(&config.tts)?;
    if !engine.lock().await.health_check().await {
        tracing::warn!(engine = %config.tts.engine, "Speech engine health check failed");
    }
    let catalog = load_voice_catalog(&engine).await?;

    let state = AppState::new(
        token_store,
        engine,
        storage,
        catalog,
        config.server.public_base_url(),
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
