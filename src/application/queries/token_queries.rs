//! Token Queries

/// 校验令牌查询
#[derive(Debug, Clone)]
pub struct VerifyToken {
    pub token: String,
}
