//! In-process storage backend

mod memory;

pub use memory::{InMemoryStorage, DEFAULT_MEMORY_LIMIT};
