//! Health module: liveness endpoints

pub mod handlers;

pub use handlers::*;
