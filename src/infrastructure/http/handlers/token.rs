//! Token HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::IssueToken;
use crate::infrastructure::http::dto::TokenResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 签发令牌
pub async fn generate_token(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let token = state.issue_token_handler.handle(IssueToken).await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: token.into_string(),
        }),
    ))
}
