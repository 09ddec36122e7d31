//! Response DTOs shared across endpoints

pub mod bag;
pub mod entrupy;
pub mod tag;

pub use bag::*;
pub use entrupy::*;
pub use tag::*;
