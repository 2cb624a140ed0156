//! Voice Context - 音色目录限界上下文
//!
//! 职责:
//! - 启动时从合成引擎枚举的音色目录
//! - 按位置索引解析请求中的音色

mod catalog;
mod errors;

pub use catalog::{VoiceCatalog, VoiceInfo};
pub use errors::VoiceError;
