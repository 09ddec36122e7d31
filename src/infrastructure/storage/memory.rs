//! In-memory storage implementation
//!
//! Bounded store for environments without a database. Holds at most
//! `limit` bags; every bag creation that overflows the limit evicts the
//! oldest bag together with its tags and authentication record.
//!
//! Compound operations are not atomic across maps. Intended for a single
//! process in development and testing.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::{debug, info};

use crate::domain::{
    AuthenticationRecord, AuthenticationUpdate, Bag, BagBinding, DomainError, DomainResult,
    NewBag, Storage, Tag, TagLookup,
};

/// Number of bags kept when no limit is configured
pub const DEFAULT_MEMORY_LIMIT: usize = 2;

pub struct InMemoryStorage {
    limit: usize,
    bags: DashMap<i64, Bag>,
    tags: DashMap<i64, Tag>,
    /// Keyed by bag id
    authentications: DashMap<i64, AuthenticationRecord>,
    tag_codes: DashMap<String, i64>,
    bag_counter: AtomicI64,
    tag_counter: AtomicI64,
    authentication_counter: AtomicI64,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MEMORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            bags: DashMap::new(),
            tags: DashMap::new(),
            authentications: DashMap::new(),
            tag_codes: DashMap::new(),
            bag_counter: AtomicI64::new(1),
            tag_counter: AtomicI64::new(1),
            authentication_counter: AtomicI64::new(1),
        }
    }

    pub fn bag_count(&self) -> usize {
        self.bags.len()
    }

    fn next_id(counter: &AtomicI64) -> i64 {
        counter.fetch_add(1, Ordering::SeqCst)
    }

    fn external_id_taken(&self, external_bag_id: &str) -> bool {
        self.bags
            .iter()
            .any(|b| b.external_bag_id.as_deref() == Some(external_bag_id))
    }

    /// Rebind an already known tag code, returning the updated tag.
    fn rebind_existing(&self, tag_code: &str, bag_id: i64, now: DateTime<Utc>) -> Option<Tag> {
        let tag_id = self.tag_codes.get(tag_code).map(|id| *id)?;
        let mut tag = self.tags.get_mut(&tag_id)?;
        tag.bind_to(bag_id, now);
        Some(tag.clone())
    }

    fn enforce_capacity(&self) {
        if self.bags.len() <= self.limit {
            return;
        }
        let oldest = self.bags.iter().map(|entry| *entry.key()).min();
        if let Some(bag_id) = oldest {
            info!(
                "Memory store over capacity ({} > {}), evicting bag {}",
                self.bags.len(),
                self.limit,
                bag_id
            );
            self.remove_bag(bag_id);
        }
    }

    /// Drop a bag, every tag bound to it (code mapping included) and its
    /// authentication record.
    fn remove_bag(&self, bag_id: i64) {
        self.bags.remove(&bag_id);

        let tag_ids: Vec<i64> = self
            .tags
            .iter()
            .filter(|t| t.bag_id == Some(bag_id))
            .map(|t| *t.key())
            .collect();
        for tag_id in tag_ids {
            if let Some((_, tag)) = self.tags.remove(&tag_id) {
                self.tag_codes.remove(&tag.tag_code);
            }
        }

        self.authentications.remove(&bag_id);
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_bag_with_tag(&self, new_bag: NewBag, tag_code: &str) -> DomainResult<BagBinding> {
        if let Some(external_id) = new_bag.external_bag_id.as_deref() {
            if self.external_id_taken(external_id) {
                return Err(DomainError::Constraint(format!(
                    "external_bag_id '{}' already exists",
                    external_id
                )));
            }
        }

        let now = Utc::now();
        let bag = new_bag.into_bag(Self::next_id(&self.bag_counter), now);
        self.bags.insert(bag.id, bag.clone());

        let tag = match self.rebind_existing(tag_code, bag.id, now) {
            Some(tag) => tag,
            None => {
                let tag = Tag::bound(Self::next_id(&self.tag_counter), tag_code, bag.id, now);
                self.tags.insert(tag.id, tag.clone());
                self.tag_codes.insert(tag.tag_code.clone(), tag.id);
                tag
            }
        };
        debug!("Bound tag '{}' (id {}) to bag {}", tag.tag_code, tag.id, bag.id);

        self.enforce_capacity();

        Ok(BagBinding { bag, tag })
    }

    async fn upsert_authentication(
        &self,
        bag_id: i64,
        update: AuthenticationUpdate,
    ) -> DomainResult<AuthenticationRecord> {
        if !self.bags.contains_key(&bag_id) {
            return Err(DomainError::bag_not_found(bag_id));
        }

        let now = Utc::now();
        let previous = self
            .authentications
            .get(&bag_id)
            .map(|r| (r.id, r.created_at));
        let (id, created_at) =
            previous.unwrap_or_else(|| (Self::next_id(&self.authentication_counter), now));

        let record = update.into_record(id, bag_id, created_at, now);
        self.authentications.insert(bag_id, record.clone());
        Ok(record)
    }

    async fn lookup_tag(&self, tag_code: &str) -> DomainResult<TagLookup> {
        let tag = self
            .tag_codes
            .get(tag_code)
            .map(|id| *id)
            .and_then(|id| self.tags.get(&id).map(|t| t.clone()))
            .ok_or_else(|| DomainError::tag_not_found(tag_code))?;

        let bag = tag
            .bag_id
            .and_then(|id| self.bags.get(&id).map(|b| b.clone()));
        let authentication = bag
            .as_ref()
            .and_then(|b| self.authentications.get(&b.id).map(|r| r.clone()));

        Ok(TagLookup {
            tag,
            bag,
            authentication,
        })
    }
}
