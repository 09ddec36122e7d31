//! Bag domain entity

use chrono::{DateTime, Utc};

use crate::domain::tag::Tag;

/// Physical inventory item
#[derive(Debug, Clone, PartialEq)]
pub struct Bag {
    pub id: i64,
    /// Caller-supplied identifier, unique across bags when present
    pub external_bag_id: Option<String>,
    pub display_name: String,
    pub brand: String,
    pub model: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Descriptive fields for a bag that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBag {
    pub external_bag_id: Option<String>,
    pub display_name: String,
    pub brand: String,
    pub model: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
}

impl NewBag {
    pub fn new(display_name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            brand: brand.into(),
            ..Default::default()
        }
    }

    /// Materialize the bag with a storage-assigned id.
    pub fn into_bag(self, id: i64, now: DateTime<Utc>) -> Bag {
        Bag {
            id,
            external_bag_id: self.external_bag_id,
            display_name: self.display_name,
            brand: self.brand,
            model: self.model,
            style: self.style,
            color: self.color,
            material: self.material,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A freshly created bag together with the tag bound to it
#[derive(Debug, Clone, PartialEq)]
pub struct BagBinding {
    pub bag: Bag,
    pub tag: Tag,
}
