//! Database entities module

pub mod bag;
pub mod entrupy_item;
pub mod tag;
