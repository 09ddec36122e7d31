pub mod authentication;
pub mod bag;
pub mod repositories;
pub mod tag;

// Re-export commonly used types
pub use authentication::{AuthenticationRecord, AuthenticationUpdate};
pub use bag::{Bag, BagBinding, NewBag};
pub use repositories::{DomainResult, Storage};
pub use tag::{Tag, TagLookup, TagStatus};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
