//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod token_repo;

pub use database::*;
pub use token_repo::*;
