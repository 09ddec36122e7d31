//! Entrupy authentication upserts

use std::sync::Arc;

use tracing::info;

use crate::domain::{AuthenticationRecord, AuthenticationUpdate, DomainResult, Storage};

/// Service for a bag's authentication record
pub struct AuthenticationService {
    storage: Arc<dyn Storage>,
}

impl AuthenticationService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn upsert(
        &self,
        bag_id: i64,
        update: AuthenticationUpdate,
    ) -> DomainResult<AuthenticationRecord> {
        let record = self.storage.upsert_authentication(bag_id, update).await?;

        info!(
            "Authentication record {} upserted for bag {} (status: {})",
            record.id,
            bag_id,
            record.authentication_status.as_deref().unwrap_or("-")
        );

        Ok(record)
    }
}
