//! Admin module: bag registration and Entrupy authentication upserts

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
