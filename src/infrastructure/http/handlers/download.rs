//! Download HTTP Handlers

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Extension,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::application::GetArtifact;
use crate::domain::token::Token;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 按扩展名推断 Content-Type
fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension.map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        _ => "application/octet-stream",
    }
}

/// 下载合成的音频文件（附件形式）
pub async fn download(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<Token>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let artifact = state
        .get_artifact_handler
        .handle(GetArtifact { filename })
        .await?;

    let file = tokio::fs::File::open(&artifact.path)
        .await
        .map_err(|e| ApiError::Internal("StorageUnavailable", format!("Failed to open audio file: {}", e)))?;

    tracing::info!(
        token = %token.redacted(),
        file = %artifact.name,
        size_bytes = artifact.size_bytes,
        "Serving audio download"
    );

    // 流式返回文件内容
    let stream = ReaderStream::new(file);
    let body = Body::from_stream(stream);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(artifact.name.extension()))
        .header(header::CONTENT_LENGTH, artifact.size_bytes)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.name),
        )
        .body(body)
        .map_err(|e| ApiError::Internal("Internal", e.to_string()))
}
