//! Database storage implementation using SeaORM

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use tracing::debug;

use super::entities::{bag, entrupy_item, tag};
use crate::domain::{
    AuthenticationRecord, AuthenticationUpdate, Bag, BagBinding, DomainError, DomainResult,
    NewBag, Storage, Tag, TagLookup, TagStatus,
};

/// Database storage implementation
pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get database connection reference
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

// Helper functions for domain <-> entity conversion

fn bag_model_to_domain(b: bag::Model) -> Bag {
    Bag {
        id: b.id,
        external_bag_id: b.external_bag_id,
        display_name: b.display_name,
        brand: b.brand,
        model: b.model,
        style: b.style,
        color: b.color,
        material: b.material,
        created_at: b.created_at,
        updated_at: b.updated_at,
    }
}

fn tag_status_to_domain(status: tag::TagStatus) -> TagStatus {
    match status {
        tag::TagStatus::Unassigned => TagStatus::Unassigned,
        tag::TagStatus::Assigned => TagStatus::Assigned,
    }
}

fn tag_model_to_domain(t: tag::Model) -> Tag {
    Tag {
        id: t.id,
        tag_code: t.tag_code,
        bag_id: t.bag_id,
        status: tag_status_to_domain(t.status),
        created_at: t.created_at,
        updated_at: t.updated_at,
    }
}

fn entrupy_model_to_domain(e: entrupy_item::Model) -> AuthenticationRecord {
    AuthenticationRecord {
        id: e.id,
        bag_id: e.bag_id,
        customer_item_id: e.customer_item_id,
        entrupy_item_id: e.entrupy_item_id,
        authentication_status: e.authentication_status,
        certificate_url: e.certificate_url,
        brand: e.brand,
        model: e.model,
        style: e.style,
        color: e.color,
        material: e.material,
        dimensions: e.dimensions,
        condition_grade: e.condition_grade,
        catalog_raw: e.catalog_raw,
        created_at: e.created_at,
        updated_at: e.updated_at,
    }
}

/// Copy every payload field onto the active model. Absent optionals become NULL.
fn apply_authentication_update(active: &mut entrupy_item::ActiveModel, update: AuthenticationUpdate) {
    active.customer_item_id = Set(update.customer_item_id);
    active.entrupy_item_id = Set(update.entrupy_item_id);
    active.authentication_status = Set(update.authentication_status);
    active.certificate_url = Set(update.certificate_url);
    active.brand = Set(update.brand);
    active.model = Set(update.model);
    active.style = Set(update.style);
    active.color = Set(update.color);
    active.material = Set(update.material);
    active.dimensions = Set(update.dimensions);
    active.condition_grade = Set(update.condition_grade);
    active.catalog_raw = Set(update.catalog_raw);
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn create_bag_with_tag(&self, new_bag: NewBag, tag_code: &str) -> DomainResult<BagBinding> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let bag = bag::ActiveModel {
            id: NotSet,
            external_bag_id: Set(new_bag.external_bag_id),
            display_name: Set(new_bag.display_name),
            brand: Set(new_bag.brand),
            model: Set(new_bag.model),
            style: Set(new_bag.style),
            color: Set(new_bag.color),
            material: Set(new_bag.material),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let existing = tag::Entity::find()
            .filter(tag::Column::TagCode.eq(tag_code))
            .one(&txn)
            .await?;

        let tag = match existing {
            Some(t) => {
                debug!("Rebinding existing tag '{}' (id {})", t.tag_code, t.id);
                let mut active: tag::ActiveModel = t.into();
                active.bag_id = Set(Some(bag.id));
                active.status = Set(tag::TagStatus::Assigned);
                active.updated_at = Set(now);
                active.update(&txn).await?
            }
            None => {
                tag::ActiveModel {
                    id: NotSet,
                    tag_code: Set(tag_code.to_string()),
                    bag_id: Set(Some(bag.id)),
                    status: Set(tag::TagStatus::Assigned),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&txn)
                .await?
            }
        };

        txn.commit().await?;

        Ok(BagBinding {
            bag: bag_model_to_domain(bag),
            tag: tag_model_to_domain(tag),
        })
    }

    async fn upsert_authentication(
        &self,
        bag_id: i64,
        update: AuthenticationUpdate,
    ) -> DomainResult<AuthenticationRecord> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        if bag::Entity::find_by_id(bag_id).one(&txn).await?.is_none() {
            return Err(DomainError::bag_not_found(bag_id));
        }

        let existing = entrupy_item::Entity::find()
            .filter(entrupy_item::Column::BagId.eq(bag_id))
            .one(&txn)
            .await?;

        let record = match existing {
            Some(e) => {
                let mut active: entrupy_item::ActiveModel = e.into();
                apply_authentication_update(&mut active, update);
                active.updated_at = Set(now);
                active.update(&txn).await?
            }
            None => {
                let mut active = entrupy_item::ActiveModel {
                    id: NotSet,
                    bag_id: Set(bag_id),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                apply_authentication_update(&mut active, update);
                active.insert(&txn).await?
            }
        };

        txn.commit().await?;

        Ok(entrupy_model_to_domain(record))
    }

    async fn lookup_tag(&self, tag_code: &str) -> DomainResult<TagLookup> {
        let tag = tag::Entity::find()
            .filter(tag::Column::TagCode.eq(tag_code))
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::tag_not_found(tag_code))?;

        let bag = match tag.bag_id {
            Some(bag_id) => bag::Entity::find_by_id(bag_id).one(&self.db).await?,
            None => None,
        };

        let authentication = match &bag {
            Some(b) => {
                entrupy_item::Entity::find()
                    .filter(entrupy_item::Column::BagId.eq(b.id))
                    .one(&self.db)
                    .await?
            }
            None => None,
        };

        Ok(TagLookup {
            tag: tag_model_to_domain(tag),
            bag: bag.map(bag_model_to_domain),
            authentication: authentication.map(entrupy_model_to_domain),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, ModelTrait};
    use sea_orm_migration::MigratorTrait;
    use serde_json::json;

    async fn storage() -> DatabaseStorage {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        DatabaseStorage::new(db)
    }

    fn bag(name: &str) -> NewBag {
        NewBag::new(name, "Chanel")
    }

    fn full_update() -> AuthenticationUpdate {
        AuthenticationUpdate {
            customer_item_id: "X".into(),
            entrupy_item_id: Some("ent-9".into()),
            authentication_status: Some("authentic".into()),
            certificate_url: Some("https://cert.example/9".into()),
            brand: Some("Chanel".into()),
            model: Some("Classic Flap".into()),
            style: Some("Medium".into()),
            color: Some("Black".into()),
            material: Some("Caviar".into()),
            dimensions: Some(json!({"width": 25.5, "unit": "cm"})),
            condition_grade: Some("B+".into()),
            catalog_raw: Some(json!({"sku": "A01112", "tags": ["flap"]})),
        }
    }

    #[tokio::test]
    async fn creates_bag_and_new_assigned_tag() {
        let store = storage().await;

        let binding = store.create_bag_with_tag(bag("A"), "t1").await.unwrap();

        assert_eq!(binding.bag.display_name, "A");
        assert_eq!(binding.tag.tag_code, "t1");
        assert_eq!(binding.tag.bag_id, Some(binding.bag.id));
        assert_eq!(binding.tag.status, TagStatus::Assigned);
    }

    #[tokio::test]
    async fn reuses_unassigned_tag_row() {
        let store = storage().await;
        let now = Utc::now();
        let preexisting = tag::ActiveModel {
            id: NotSet,
            tag_code: Set("X".into()),
            bag_id: Set(None),
            status: Set(tag::TagStatus::Unassigned),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(store.connection())
        .await
        .unwrap();

        let binding = store.create_bag_with_tag(bag("A"), "X").await.unwrap();

        assert_eq!(binding.tag.id, preexisting.id);
        assert_eq!(binding.tag.status, TagStatus::Assigned);
        assert_eq!(binding.tag.bag_id, Some(binding.bag.id));
    }

    #[tokio::test]
    async fn same_tag_code_rebinds_to_second_bag() {
        let store = storage().await;

        let first = store.create_bag_with_tag(bag("A"), "X").await.unwrap();
        let second = store.create_bag_with_tag(bag("B"), "X").await.unwrap();

        assert_eq!(first.tag.id, second.tag.id);
        let lookup = store.lookup_tag("X").await.unwrap();
        assert_eq!(lookup.bag.map(|b| b.id), Some(second.bag.id));
        assert!(bag::Entity::find_by_id(first.bag.id)
            .one(store.connection())
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn duplicate_external_id_rolls_back() {
        let store = storage().await;
        let mut with_external = bag("A");
        with_external.external_bag_id = Some("EXT-1".into());
        store
            .create_bag_with_tag(with_external.clone(), "t1")
            .await
            .unwrap();

        let err = store
            .create_bag_with_tag(with_external, "t2")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Constraint(_)));
        assert!(store.lookup_tag("t2").await.unwrap_err().is_not_found());
        let bags = bag::Entity::find().all(store.connection()).await.unwrap();
        assert_eq!(bags.len(), 1);
    }

    #[tokio::test]
    async fn failed_tag_write_rolls_back_inserted_bag() {
        let store = storage().await;
        store
            .connection()
            .execute_unprepared(
                "CREATE TRIGGER reject_tag BEFORE INSERT ON tags \
                 WHEN NEW.tag_code = 'rejected' \
                 BEGIN SELECT RAISE(ABORT, 'tag rejected'); END;",
            )
            .await
            .unwrap();

        let err = store
            .create_bag_with_tag(bag("A"), "rejected")
            .await
            .unwrap_err();

        assert!(!err.is_not_found());
        let bags = bag::Entity::find().all(store.connection()).await.unwrap();
        assert!(bags.is_empty());
        assert!(store.lookup_tag("rejected").await.unwrap_err().is_not_found());

        // the connection is usable afterwards
        let ok = store.create_bag_with_tag(bag("B"), "t1").await.unwrap();
        assert_eq!(ok.tag.bag_id, Some(ok.bag.id));
    }

    #[tokio::test]
    async fn upsert_is_stable_on_bag_id() {
        let store = storage().await;
        let a = store.create_bag_with_tag(bag("A"), "t1").await.unwrap();

        let first = store
            .upsert_authentication(a.bag.id, full_update())
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = store
            .upsert_authentication(a.bag.id, full_update())
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
        assert!(second.updated_at > first.updated_at);
        assert_eq!(second.dimensions, Some(json!({"width": 25.5, "unit": "cm"})));
    }

    #[tokio::test]
    async fn upsert_nulls_omitted_fields() {
        let store = storage().await;
        let a = store.create_bag_with_tag(bag("A"), "t1").await.unwrap();
        store
            .upsert_authentication(a.bag.id, full_update())
            .await
            .unwrap();

        let record = store
            .upsert_authentication(a.bag.id, AuthenticationUpdate::new("Y"))
            .await
            .unwrap();

        assert_eq!(record.customer_item_id, "Y");
        assert_eq!(
            record,
            AuthenticationUpdate::new("Y").into_record(
                record.id,
                a.bag.id,
                record.created_at,
                record.updated_at
            )
        );
    }

    #[tokio::test]
    async fn upsert_for_missing_bag_is_not_found() {
        let store = storage().await;

        let err = store
            .upsert_authentication(404, AuthenticationUpdate::new("Y"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn lookup_resolves_bag_and_record() {
        let store = storage().await;
        let a = store.create_bag_with_tag(bag("A"), "t1").await.unwrap();
        store
            .upsert_authentication(a.bag.id, full_update())
            .await
            .unwrap();

        let lookup = store.lookup_tag("t1").await.unwrap();

        assert_eq!(lookup.tag.tag_code, "t1");
        assert_eq!(lookup.bag.map(|b| b.id), Some(a.bag.id));
        assert_eq!(
            lookup.authentication.and_then(|r| r.condition_grade),
            Some("B+".to_string())
        );
    }

    #[tokio::test]
    async fn lookup_unknown_code_is_not_found() {
        let store = storage().await;
        let err = store.lookup_tag("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Tag not found");
    }

    #[tokio::test]
    async fn deleting_bag_unbinds_tags_and_drops_record() {
        let store = storage().await;
        let a = store.create_bag_with_tag(bag("A"), "t1").await.unwrap();
        store
            .upsert_authentication(a.bag.id, full_update())
            .await
            .unwrap();

        let model = bag::Entity::find_by_id(a.bag.id)
            .one(store.connection())
            .await
            .unwrap()
            .unwrap();
        model.delete(store.connection()).await.unwrap();

        let lookup = store.lookup_tag("t1").await.unwrap();
        assert_eq!(lookup.tag.bag_id, None);
        assert!(lookup.bag.is_none());
        let records = entrupy_item::Entity::find()
            .all(store.connection())
            .await
            .unwrap();
        assert!(records.is_empty());
    }
}
