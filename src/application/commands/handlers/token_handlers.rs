//! Token Command Handlers

use std::sync::Arc;

use crate::application::commands::IssueToken;
use crate::application::error::ApplicationError;
use crate::application::ports::TokenStorePort;
use crate::domain::token::Token;

/// IssueToken Handler
pub struct IssueTokenHandler {
    token_store: Arc<dyn TokenStorePort>,
}

impl IssueTokenHandler {
    pub fn new(token_store: Arc<dyn TokenStorePort>) -> Self {
        Self { token_store }
    }

    pub async fn handle(&self, _command: IssueToken) -> Result<Token, ApplicationError> {
        let token = self.token_store.issue().await?;

        tracing::info!(token = %token.redacted(), "Token issued");

        Ok(token)
    }
}
