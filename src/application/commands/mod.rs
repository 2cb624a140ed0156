//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：签发令牌、合成语音

mod speech_commands;
mod token_commands;

pub mod handlers;

pub use speech_commands::*;
pub use token_commands::*;
