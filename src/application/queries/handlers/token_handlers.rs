//! Token Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::TokenStorePort;
use crate::application::queries::VerifyToken;
use crate::domain::token::{redact, Token};

/// VerifyToken Handler
///
/// 令牌门控的唯一判定点：HTTP 中间件与合成命令都经由这里
pub struct VerifyTokenHandler {
    token_store: Arc<dyn TokenStorePort>,
}

impl VerifyTokenHandler {
    pub fn new(token_store: Arc<dyn TokenStorePort>) -> Self {
        Self { token_store }
    }

    pub async fn handle(&self, query: VerifyToken) -> Result<Token, ApplicationError> {
        if !self.token_store.exists(&query.token).await? {
            tracing::debug!(token = %redact(&query.token), "Unknown token rejected");
            return Err(ApplicationError::InvalidToken);
        }

        Ok(Token::from_string(query.token))
    }
}
