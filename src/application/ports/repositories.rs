//! Repository Ports - 出站端口
//!
//! 定义令牌持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::token::Token;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Token Store Port
///
/// 只追加的令牌集合，以令牌值本身为主键；不提供更新或删除
#[async_trait]
pub trait TokenStorePort: Send + Sync {
    /// 生成并持久化一个新令牌
    async fn issue(&self) -> Result<Token, RepositoryError>;

    /// 令牌是否曾被签发
    ///
    /// 任意输入（空串、格式错误）都只会返回 `false`，不会因格式报错
    async fn exists(&self, token: &str) -> Result<bool, RepositoryError>;
}
