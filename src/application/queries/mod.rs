//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：令牌校验、音色列表、产物下载

mod artifact_queries;
mod token_queries;
mod voice_queries;

pub mod handlers;

pub use artifact_queries::*;
pub use token_queries::*;
pub use voice_queries::*;
