//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Token Context: 访问令牌
//! - Voice Context: 音色目录
//! - Artifact Context: 合成音频产物

pub mod artifact;
pub mod token;
pub mod voice;
