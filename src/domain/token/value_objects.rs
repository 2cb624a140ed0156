//! Token Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 日志中保留的令牌前缀长度
const LOG_PREFIX_LEN: usize = 8;

/// 访问令牌
///
/// 不变量:
/// - 新生成的令牌值为 UUID v4 文本，全局唯一
/// - 令牌没有除自身值以外的属性
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// 生成新令牌
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 包装已有的令牌值（不做格式校验）
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// 用于日志的脱敏前缀
    pub fn redacted(&self) -> &str {
        redact(&self.0)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 截取令牌前缀，避免完整令牌出现在日志中
pub fn redact(value: &str) -> &str {
    match value.char_indices().nth(LOG_PREFIX_LEN) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
