//! SQLite Token Store

use async_trait::async_trait;
use chrono::Utc;

use super::DbPool;
use crate::application::ports::{RepositoryError, TokenStorePort};
use crate::domain::token::Token;

/// SQLite Token Store
pub struct SqliteTokenStore {
    pool: DbPool,
}

impl SqliteTokenStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_db_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::Duplicate(db.message().to_string())
        }
        _ => RepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl TokenStorePort for SqliteTokenStore {
    async fn issue(&self) -> Result<Token, RepositoryError> {
        let token = Token::generate();

        sqlx::query("INSERT INTO tokens (token, issued_at) VALUES (?, ?)")
            .bind(token.as_str())
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(token)
    }

    async fn exists(&self, token: &str) -> Result<bool, RepositoryError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM tokens WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};
    use tempfile::tempdir;

    async fn store() -> SqliteTokenStore {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteTokenStore::new(pool)
    }

    #[tokio::test]
    async fn test_issue_twice_yields_distinct_tokens() {
        let store = store().await;

        let a = store.issue().await.unwrap();
        let b = store.issue().await.unwrap();
        assert_ne!(a, b);

        assert!(store.exists(a.as_str()).await.unwrap());
        assert!(store.exists(b.as_str()).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_false_for_unissued_values() {
        let store = store().await;
        store.issue().await.unwrap();

        for value in [
            "",
            "not-a-uuid",
            "00000000-0000-0000-0000-000000000000",
            "' OR '1'='1",
            "3fa85f64-5717-4562-b3fc",
        ] {
            assert!(!store.exists(value).await.unwrap(), "{:?}", value);
        }
    }

    #[tokio::test]
    async fn test_tokens_survive_reopen() {
        let dir = tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("tokens.db"));

        let token = {
            let pool = create_pool(&config).await.unwrap();
            run_migrations(&pool).await.unwrap();
            let token = SqliteTokenStore::new(pool.clone()).issue().await.unwrap();
            pool.close().await;
            token
        };

        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let store = SqliteTokenStore::new(pool);
        assert!(store.exists(token.as_str()).await.unwrap());
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        // 未执行迁移，表不存在
        let store = SqliteTokenStore::new(pool);
        assert!(matches!(
            store.issue().await,
            Err(RepositoryError::DatabaseError(_))
        ));
    }
}
