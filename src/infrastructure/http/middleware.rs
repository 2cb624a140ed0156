//! HTTP Middleware
//!
//! - HTTP 状态码错误日志中间件
//! - 令牌门控中间件

use axum::{
    body::{to_bytes, Body},
    extract::{Query, Request, State},
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::dto::TokenParam;
use super::error::ApiError;
use super::state::AppState;
use crate::application::{ApplicationError, VerifyToken};
use crate::domain::token::redact;

/// 门控中间件读取 JSON body 的上限
const MAX_GATED_BODY_BYTES: usize = 64 * 1024;

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// 从请求中提取令牌
///
/// 优先级：
/// 1. `Authorization: Bearer <token>`
/// 2. 查询参数 `?token=<token>`
/// 3. JSON body 中的 `token` 字段
///
/// 读取 body 后会用相同字节重建请求
async fn extract_token(request: Request) -> Result<(Request, Option<String>), ApiError> {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string());
    if bearer.is_some() {
        tracing::debug!("Token extracted from Authorization header");
        return Ok((request, bearer));
    }

    if let Ok(Query(param)) = Query::<TokenParam>::try_from_uri(request.uri()) {
        if param.token.is_some() {
            tracing::debug!("Token extracted from query parameter");
            return Ok((request, param.token));
        }
    }

    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);
    if !is_json {
        return Ok((request, None));
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_GATED_BODY_BYTES)
        .await
        .map_err(|e| ApiError::malformed_body(format!("Failed to read request body: {}", e)))?;
    let token = serde_json::from_slice::<TokenParam>(&bytes)
        .ok()
        .and_then(|param| param.token);
    if token.is_some() {
        tracing::debug!("Token extracted from JSON body");
    }

    Ok((Request::from_parts(parts, Body::from(bytes)), token))
}

/// 令牌门控中间件
///
/// 缺少令牌返回 400，令牌未签发返回 403；
/// 校验通过后把 [`crate::domain::token::Token`] 放入请求扩展
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path().to_string();
    let (mut request, token) = extract_token(request).await?;

    let token = token.ok_or_else(|| {
        tracing::warn!(path = %path, "Request without token rejected");
        ApiError::from(ApplicationError::MissingField("token"))
    })?;

    let prefix = redact(&token).to_string();
    let token = state
        .verify_token_handler
        .handle(VerifyToken { token })
        .await
        .map_err(|e| {
            tracing::warn!(path = %path, token = %prefix, error = %e, "Token rejected");
            ApiError::from(e)
        })?;

    request.extensions_mut().insert(token);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn not_found_handler() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/not-found", get(not_found_handler))
            .route("/error", get(error_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    #[tokio::test]
    async fn test_error_logging_passes_responses_through() {
        for (uri, status) in [
            ("/ok", StatusCode::OK),
            ("/not-found", StatusCode::NOT_FOUND),
            ("/error", StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
            let response = create_test_router().oneshot(request).await.unwrap();
            assert_eq!(response.status(), status);
        }
    }

    #[tokio::test]
    async fn test_extract_token_from_header() {
        let request = HttpRequest::builder()
            .uri("/voices?token=from-query")
            .header(AUTHORIZATION, "Bearer from-header")
            .body(Body::empty())
            .unwrap();

        let (_, token) = extract_token(request).await.unwrap();
        assert_eq!(token.as_deref(), Some("from-header"));
    }

    #[tokio::test]
    async fn test_extract_token_from_query() {
        let request = HttpRequest::builder()
            .uri("/voices?token=from-query")
            .body(Body::empty())
            .unwrap();

        let (_, token) = extract_token(request).await.unwrap();
        assert_eq!(token.as_deref(), Some("from-query"));
    }

    #[tokio::test]
    async fn test_extract_token_from_json_body_keeps_body() {
        let request = HttpRequest::builder()
            .uri("/voices")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"token":"from-body","other":1}"#))
            .unwrap();

        let (request, token) = extract_token(request).await.unwrap();
        assert_eq!(token.as_deref(), Some("from-body"));

        let bytes = to_bytes(request.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"token":"from-body","other":1}"#);
    }

    #[tokio::test]
    async fn test_extract_token_absent() {
        let request = HttpRequest::builder()
            .uri("/voices")
            .header(AUTHORIZATION, "Basic abc")
            .body(Body::empty())
            .unwrap();

        let (_, token) = extract_token(request).await.unwrap();
        assert!(token.is_none());
    }
}
