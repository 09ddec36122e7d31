//! Bag aggregate
//!
//! A physical inventory item. Bags are only created through tag binding.

pub mod model;

pub use model::{Bag, BagBinding, NewBag};
