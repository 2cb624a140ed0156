//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod artifact_handlers;
mod token_handlers;
mod voice_handlers;

pub use artifact_handlers::*;
pub use token_handlers::*;
pub use voice_handlers::*;
