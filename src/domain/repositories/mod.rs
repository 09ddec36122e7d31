//! Storage port for the domain layer
//!
//! One capability set, implemented by the relational store and by the
//! bounded in-memory store. The backend is chosen once at startup and
//! injected into the services as `Arc<dyn Storage>`.

use async_trait::async_trait;

use super::authentication::{AuthenticationRecord, AuthenticationUpdate};
use super::bag::{BagBinding, NewBag};
use super::tag::TagLookup;
pub use crate::support::errors::DomainResult;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Insert a bag and bind `tag_code` to it, creating the tag on first
    /// use and rebinding it otherwise. All or nothing.
    async fn create_bag_with_tag(&self, bag: NewBag, tag_code: &str) -> DomainResult<BagBinding>;

    /// Create the bag's authentication record or fully replace it.
    /// Fails with `NotFound` when the bag does not exist.
    async fn upsert_authentication(
        &self,
        bag_id: i64,
        update: AuthenticationUpdate,
    ) -> DomainResult<AuthenticationRecord>;

    /// Resolve a tag code to the tag, its bound bag and that bag's
    /// authentication record. Fails with `NotFound` for unknown codes.
    async fn lookup_tag(&self, tag_code: &str) -> DomainResult<TagLookup>;
}
