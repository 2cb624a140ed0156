//! Memory Layer - In-Memory State Management
//!
//! 不落盘的令牌存储，供测试和临时运行使用

mod token_store;

pub use token_store::InMemoryTokenStore;
