//! Tag code resolution

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainResult, Storage, TagLookup};

pub struct LookupService {
    storage: Arc<dyn Storage>,
}

impl LookupService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn lookup_tag(&self, tag_code: &str) -> DomainResult<TagLookup> {
        debug!("Looking up tag '{}'", tag_code);
        self.storage.lookup_tag(tag_code).await
    }
}
