//! Artifact Context - 音频产物限界上下文
//!
//! 职责:
//! - 为合成结果生成唯一文件名
//! - 校验下载请求中的文件名，拒绝路径穿越

mod errors;
mod value_objects;

pub use errors::ArtifactError;
pub use value_objects::ArtifactName;
