//! Tag domain entity

use chrono::{DateTime, Utc};

use crate::domain::authentication::AuthenticationRecord;
use crate::domain::bag::Bag;

/// Binding status of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStatus {
    Unassigned,
    Assigned,
}

impl TagStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unassigned => "unassigned",
            Self::Assigned => "assigned",
        }
    }
}

impl std::fmt::Display for TagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical tracking code
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i64,
    /// RFID/NFC code, globally unique
    pub tag_code: String,
    /// Bound bag, `None` while unassigned
    pub bag_id: Option<i64>,
    pub status: TagStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    /// A tag created on first use, already bound to `bag_id`.
    pub fn bound(id: i64, tag_code: impl Into<String>, bag_id: i64, now: DateTime<Utc>) -> Self {
        Self {
            id,
            tag_code: tag_code.into(),
            bag_id: Some(bag_id),
            status: TagStatus::Assigned,
            created_at: now,
            updated_at: now,
        }
    }

    /// Point this tag at `bag_id` and mark it assigned.
    pub fn bind_to(&mut self, bag_id: i64, now: DateTime<Utc>) {
        self.bag_id = Some(bag_id);
        self.status = TagStatus::Assigned;
        self.updated_at = now;
    }
}

/// Result of resolving a tag code
#[derive(Debug, Clone, PartialEq)]
pub struct TagLookup {
    pub tag: Tag,
    pub bag: Option<Bag>,
    pub authentication: Option<AuthenticationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_renders_lowercase() {
        assert_eq!(TagStatus::Assigned.to_string(), "assigned");
        assert_eq!(TagStatus::Unassigned.as_str(), "unassigned");
    }

    #[test]
    fn bind_to_assigns_and_refreshes_timestamp() {
        let created = Utc::now() - chrono::Duration::seconds(10);
        let mut tag = Tag {
            id: 1,
            tag_code: "X".into(),
            bag_id: None,
            status: TagStatus::Unassigned,
            created_at: created,
            updated_at: created,
        };

        let now = Utc::now();
        tag.bind_to(42, now);

        assert_eq!(tag.bag_id, Some(42));
        assert_eq!(tag.status, TagStatus::Assigned);
        assert_eq!(tag.created_at, created);
        assert_eq!(tag.updated_at, now);
    }
}
