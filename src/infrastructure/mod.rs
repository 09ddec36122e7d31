//! Infrastructure layer - storage backends

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig, DatabaseStorage};
pub use storage::{InMemoryStorage, DEFAULT_MEMORY_LIMIT};
