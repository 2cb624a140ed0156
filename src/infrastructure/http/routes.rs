//! HTTP Routes
//!
//! API Endpoints:
//! - /generate-token        POST  签发令牌
//! - /text-to-speech        POST  合成语音（令牌在 body 中）
//! - /voices                GET   列出音色（需令牌）
//! - /download/{filename}   GET   下载音频（需令牌）
//! - /ping                  GET   健康检查

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::require_token;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/generate-token", post(handlers::generate_token))
        .route("/text-to-speech", post(handlers::text_to_speech))
        .merge(gated_routes(state))
}

/// 需要令牌的路由
fn gated_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/voices", get(handlers::list_voices))
        // 通配捕获：多段路径同样经过门控与文件名校验
        .route("/download/*filename", get(handlers::download))
        .route_layer(middleware::from_fn_with_state(state, require_token))
}
