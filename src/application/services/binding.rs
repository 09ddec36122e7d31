//! Bag registration and tag binding

use std::sync::Arc;

use tracing::info;

use crate::domain::{BagBinding, DomainResult, NewBag, Storage};

/// Creates bags and binds their physical tags
pub struct BindingService {
    storage: Arc<dyn Storage>,
}

impl BindingService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Register a bag and bind `tag_code` to it, creating the tag on first
    /// use and moving it over from any previous bag otherwise.
    pub async fn create_bag_with_tag(&self, bag: NewBag, tag_code: &str) -> DomainResult<BagBinding> {
        let binding = self.storage.create_bag_with_tag(bag, tag_code).await?;

        info!(
            "Bag registered: {} ({}) bound to tag '{}'",
            binding.bag.id, binding.bag.display_name, binding.tag.tag_code
        );

        Ok(binding)
    }
}
