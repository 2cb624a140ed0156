//! Voxgate - 令牌门控的文本转语音服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Token Context: 访问令牌
//! - Voice Context: 音色目录
//! - Artifact Context: 合成音频文件名
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TokenStore, SpeechEngine, ArtifactStorage）
//! - Commands: 签发令牌、合成语音
//! - Queries: 令牌校验、音色列表、产物下载
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 令牌门控中间件
//! - Persistence: SQLite 令牌表
//! - Memory: 内存令牌存储
//! - Adapters: espeak-ng / HTTP / Fake 合成引擎, 文件系统产物存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
