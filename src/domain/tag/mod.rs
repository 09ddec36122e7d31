//! Tag aggregate
//!
//! Physical RFID/NFC codes and their binding to bags.

pub mod model;

pub use model::{Tag, TagLookup, TagStatus};
