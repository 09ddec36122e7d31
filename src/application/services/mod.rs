//! Application services
//!
//! Thin entry points over the storage port, shared by the HTTP layer.

pub mod authentication;
pub mod binding;
pub mod lookup;

pub use authentication::AuthenticationService;
pub use binding::BindingService;
pub use lookup::LookupService;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{AuthenticationUpdate, NewBag, Storage};
    use crate::infrastructure::InMemoryStorage;

    #[tokio::test]
    async fn services_share_one_backend() {
        let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
        let binding = BindingService::new(storage.clone());
        let authentication = AuthenticationService::new(storage.clone());
        let lookup = LookupService::new(storage);

        let created = binding
            .create_bag_with_tag(NewBag::new("Kelly 28", "Hermes"), "nfc-1")
            .await
            .unwrap();
        authentication
            .upsert(created.bag.id, AuthenticationUpdate::new("cust-1"))
            .await
            .unwrap();

        let found = lookup.lookup_tag("nfc-1").await.unwrap();
        assert_eq!(found.bag, Some(created.bag));
        assert_eq!(
            found.authentication.map(|r| r.customer_item_id),
            Some("cust-1".to_string())
        );
    }

    #[tokio::test]
    async fn not_found_passes_through() {
        let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
        let lookup = LookupService::new(storage.clone());
        let authentication = AuthenticationService::new(storage);

        assert!(lookup.lookup_tag("ghost").await.unwrap_err().is_not_found());
        assert!(authentication
            .upsert(1, AuthenticationUpdate::new("c"))
            .await
            .unwrap_err()
            .is_not_found());
    }
}
