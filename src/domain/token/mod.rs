//! Token Context - 访问令牌限界上下文
//!
//! 职责:
//! - 令牌生成
//! - 令牌值的展示与日志脱敏

mod value_objects;

pub use value_objects::{redact, Token};
