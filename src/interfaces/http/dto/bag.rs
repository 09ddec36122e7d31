//! Bag DTOs

use serde::Serialize;
use utoipa::ToSchema;

use super::TagDto;
use crate::domain::{Bag, BagBinding};

#[derive(Debug, Serialize, ToSchema)]
pub struct BagDto {
    pub id: i64,
    pub external_bag_id: Option<String>,
    pub display_name: String,
    pub brand: String,
    pub model: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Bag> for BagDto {
    fn from(b: Bag) -> Self {
        Self {
            id: b.id,
            external_bag_id: b.external_bag_id,
            display_name: b.display_name,
            brand: b.brand,
            model: b.model,
            style: b.style,
            color: b.color,
            material: b.material,
            created_at: b.created_at.to_rfc3339(),
            updated_at: b.updated_at.to_rfc3339(),
        }
    }
}

/// Response of bag registration
#[derive(Debug, Serialize, ToSchema)]
pub struct BagWithTagDto {
    pub bag: BagDto,
    pub tag: TagDto,
}

impl From<BagBinding> for BagWithTagDto {
    fn from(b: BagBinding) -> Self {
        Self {
            bag: b.bag.into(),
            tag: b.tag.into(),
        }
    }
}
