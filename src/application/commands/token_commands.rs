//! Token Commands

/// 签发令牌命令
#[derive(Debug, Clone)]
pub struct IssueToken;
