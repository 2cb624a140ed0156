//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// 与 HTTP 状态码一致
    pub errno: u16,
    pub kind: &'static str,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, kind: &'static str, error: impl Into<String>) -> Self {
        Self {
            errno: status.as_u16(),
            kind,
            error: error.into(),
        }
    }
}

/// API 错误
///
/// 第一个字段为错误类别名（如 `MissingField`），第二个为说明
#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str, String),
    Forbidden(&'static str, String),
    NotFound(&'static str, String),
    Internal(&'static str, String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(..) => StatusCode::FORBIDDEN,
            ApiError::NotFound(..) => StatusCode::NOT_FOUND,
            ApiError::Internal(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 请求体无法解析
    pub fn malformed_body(msg: impl Into<String>) -> Self {
        ApiError::BadRequest("BadRequest", msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (kind, msg) = match self {
            ApiError::BadRequest(kind, msg)
            | ApiError::Forbidden(kind, msg)
            | ApiError::NotFound(kind, msg) => {
                tracing::warn!(errno = status.as_u16(), kind = kind, error = %msg, "Request rejected");
                (kind, msg)
            }
            ApiError::Internal(kind, msg) => {
                tracing::error!(errno = status.as_u16(), kind = kind, error = %msg, "Internal server error");
                (kind, msg)
            }
        };

        (status, Json(ErrorResponse::new(status, kind, msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        let kind = e.kind();
        let msg = e.to_string();
        match e {
            ApplicationError::MissingField(_)
            | ApplicationError::InvalidVoiceIndex(_)
            | ApplicationError::PathTraversalRejected(_) => ApiError::BadRequest(kind, msg),
            ApplicationError::InvalidToken => ApiError::Forbidden(kind, msg),
            ApplicationError::NotFound(_) => ApiError::NotFound(kind, msg),
            ApplicationError::StorageUnavailable(_) | ApplicationError::SynthesisFailed(_) => {
                ApiError::Internal(kind, msg)
            }
        }
    }
}
