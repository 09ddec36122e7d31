//! Authentication record domain entity

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Entrupy authentication result for a bag
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationRecord {
    pub id: i64,
    /// Owning bag, unique across records
    pub bag_id: i64,
    pub customer_item_id: String,
    pub entrupy_item_id: Option<String>,
    pub authentication_status: Option<String>,
    pub certificate_url: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub dimensions: Option<Value>,
    pub condition_grade: Option<String>,
    /// Opaque catalog payload, stored as received
    pub catalog_raw: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement payload for a bag's authentication record.
///
/// Every `None` here overwrites whatever the stored record held.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthenticationUpdate {
    pub customer_item_id: String,
    pub entrupy_item_id: Option<String>,
    pub authentication_status: Option<String>,
    pub certificate_url: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub dimensions: Option<Value>,
    pub condition_grade: Option<String>,
    pub catalog_raw: Option<Value>,
}

impl AuthenticationUpdate {
    pub fn new(customer_item_id: impl Into<String>) -> Self {
        Self {
            customer_item_id: customer_item_id.into(),
            ..Default::default()
        }
    }

    /// Build the stored record. `created_at` comes from the previous record
    /// when one exists.
    pub fn into_record(
        self,
        id: i64,
        bag_id: i64,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AuthenticationRecord {
        AuthenticationRecord {
            id,
            bag_id,
            customer_item_id: self.customer_item_id,
            entrupy_item_id: self.entrupy_item_id,
            authentication_status: self.authentication_status,
            certificate_url: self.certificate_url,
            brand: self.brand,
            model: self.model,
            style: self.style,
            color: self.color,
            material: self.material,
            dimensions: self.dimensions,
            condition_grade: self.condition_grade,
            catalog_raw: self.catalog_raw,
            created_at,
            updated_at: now,
        }
    }
}
