//! Authentication aggregate
//!
//! Third-party (Entrupy) authenticity results, at most one per bag.

pub mod model;

pub use model::{AuthenticationRecord, AuthenticationUpdate};
