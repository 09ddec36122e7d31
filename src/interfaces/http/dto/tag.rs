//! Tag DTOs

use serde::Serialize;
use utoipa::ToSchema;

use super::{BagDto, EntrupyDto};
use crate::domain::{Tag, TagLookup};

#[derive(Debug, Serialize, ToSchema)]
pub struct TagDto {
    pub id: i64,
    pub tag_code: String,
    pub bag_id: Option<i64>,
    /// "unassigned" or "assigned"
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Tag> for TagDto {
    fn from(t: Tag) -> Self {
        Self {
            id: t.id,
            tag_code: t.tag_code,
            bag_id: t.bag_id,
            status: t.status.to_string(),
            created_at: t.created_at.to_rfc3339(),
            updated_at: t.updated_at.to_rfc3339(),
        }
    }
}

/// Tag with its bound bag and authentication record, when present
#[derive(Debug, Serialize, ToSchema)]
pub struct TagLookupDto {
    pub tag: TagDto,
    pub bag: Option<BagDto>,
    pub entrupy: Option<EntrupyDto>,
}

impl From<TagLookup> for TagLookupDto {
    fn from(l: TagLookup) -> Self {
        Self {
            tag: l.tag.into(),
            bag: l.bag.map(BagDto::from),
            entrupy: l.authentication.map(EntrupyDto::from),
        }
    }
}
