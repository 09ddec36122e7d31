//! Tags module: public tag lookup

pub mod handlers;

pub use handlers::*;
