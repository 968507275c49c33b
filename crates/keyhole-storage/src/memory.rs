use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use keyhole_core::{Claim, MappingStore, ShortCode, StoreError, UrlMapping};

/// In-memory implementation of the [`MappingStore`] trait using DashMap.
///
/// Two maps hold the two directions of the mapping: `by_code` backs decode
/// lookups, `by_url` backs the reverse lookup that makes encode idempotent.
/// DashMap's sharded locks let lookups run concurrently while claims for
/// the same key serialize on their shard.
///
/// `claim` takes the `by_url` entry lock first and only then touches
/// `by_code`; no other operation locks both maps, so the lock order is
/// acyclic. Two concurrent claims for the same URL serialize on the
/// `by_url` entry: the first inserts, the second observes the winner's
/// mapping and reports it as [`Claim::Existing`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    by_code: DashMap<String, String>,
    by_url: DashMap<String, ShortCode>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            by_code: DashMap::new(),
            by_url: DashMap::new(),
        }
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_code: DashMap::with_capacity(capacity),
            by_url: DashMap::with_capacity(capacity),
        }
    }

    /// Number of live mappings.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[async_trait]
impl MappingStore for InMemoryStore {
    async fn claim(&self, code: &ShortCode, original_url: &str) -> Result<Claim, StoreError> {
        match self.by_url.entry(original_url.to_owned()) {
            Entry::Occupied(existing) => Ok(Claim::Existing(UrlMapping {
                code: existing.get().clone(),
                original_url: original_url.to_owned(),
            })),
            Entry::Vacant(url_slot) => match self.by_code.entry(code.as_str().to_owned()) {
                Entry::Occupied(_) => Err(StoreError::CodeTaken(code.to_string())),
                Entry::Vacant(code_slot) => {
                    code_slot.insert(original_url.to_owned());
                    url_slot.insert(code.clone());
                    Ok(Claim::Inserted)
                }
            },
        }
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.by_code.get(code.as_str()).map(|url| UrlMapping {
            code: code.clone(),
            original_url: url.value().clone(),
        }))
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.by_url.get(original_url).map(|code| UrlMapping {
            code: code.value().clone(),
            original_url: original_url.to_owned(),
        }))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool, StoreError> {
        Ok(self.by_code.contains_key(code.as_str()))
    }
}
