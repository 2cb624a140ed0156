//! Speech HTTP Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::Synthesize;
use crate::infrastructure::http::dto::{SynthesizeRequest, SynthesizeResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 文本转语音
///
/// 令牌在请求体中携带，由命令处理器校验（该路由不经过令牌中间件）
pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> Result<Json<SynthesizeResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::malformed_body(e.body_text()))?;

    let command = Synthesize {
        voice: req.voice_text(),
        text: req.text,
        token: req.token,
    };

    let result = state.synthesize_handler.handle(command).await?;

    Ok(Json(SynthesizeResponse {
        download_link: result.download_link,
    }))
}
