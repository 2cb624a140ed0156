//! In-Memory Token Store Implementation

use async_trait::async_trait;
use dashmap::DashSet;

use crate::application::ports::{RepositoryError, TokenStorePort};
use crate::domain::token::Token;

/// 内存令牌存储
pub struct InMemoryTokenStore {
    tokens: DashSet<String>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self {
            tokens: DashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for InMemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStorePort for InMemoryTokenStore {
    async fn issue(&self) -> Result<Token, RepositoryError> {
        let token = Token::generate();
        if !self.tokens.insert(token.as_str().to_string()) {
            return Err(RepositoryError::Duplicate(token.redacted().to_string()));
        }
        Ok(token)
    }

    async fn exists(&self, token: &str) -> Result<bool, RepositoryError> {
        Ok(self.tokens.contains(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_issue_and_exists() {
        let store = InMemoryTokenStore::new();
        assert!(store.is_empty());

        let a = store.issue().await.unwrap();
        let b = store.issue().await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);

        assert!(store.exists(a.as_str()).await.unwrap());
        assert!(store.exists(b.as_str()).await.unwrap());
        assert!(!store.exists("").await.unwrap());
        assert!(!store.exists("not-a-uuid").await.unwrap());
    }
}
