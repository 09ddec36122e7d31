//! # Bag Tagging Service
//!
//! Binds RFID/NFC tags to luxury bags and attaches third-party
//! authentication results so a scanned tag resolves to the bag and its
//! authentication record.
//!
//! ## Architecture
//!
//! - **domain**: bags, tags, authentication records and the storage port
//! - **application**: use cases over the storage port
//! - **infrastructure**: relational (SeaORM) and bounded in-memory storage
//! - **interfaces**: REST API with Swagger documentation
//! - **support**: errors and shutdown plumbing

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, DatabaseStorage, InMemoryStorage};

pub use interfaces::http::create_api_router;
