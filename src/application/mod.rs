//! Application layer - use cases over the storage port

pub mod services;

pub use services::{AuthenticationService, BindingService, LookupService};
