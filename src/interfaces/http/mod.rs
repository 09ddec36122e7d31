//! HTTP REST API interfaces
//!
//! - `common`: error body, domain error mapping, validated JSON extractor
//! - `dto`: response bodies
//! - `modules`: request handlers grouped by resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod dto;
pub mod modules;
pub mod router;

pub use router::{create_api_router, AppState};
