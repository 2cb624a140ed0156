//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod speech_handlers;
mod token_handlers;

pub use speech_handlers::*;
pub use token_handlers::*;
