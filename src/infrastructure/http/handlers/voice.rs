//! Voice HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListVoices;
use crate::infrastructure::http::dto::VoiceResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取音色列表
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VoiceResponse>>, ApiError> {
    let voices = state.list_voices_handler.handle(ListVoices).await?;

    Ok(Json(voices.into_iter().map(VoiceResponse::from).collect()))
}
