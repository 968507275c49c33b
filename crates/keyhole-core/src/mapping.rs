use crate::error::StoreError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A stored mapping between a short code and its original URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// The short code bound to the URL.
    pub code: ShortCode,
    /// The original URL that was shortened.
    pub original_url: String,
}

/// Outcome of a [`MappingStore::claim`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claim {
    /// The code was bound to the URL.
    Inserted,
    /// The URL was already mapped; the existing mapping is returned untouched.
    Existing(UrlMapping),
}

/// The bidirectional table of short-code mappings.
///
/// The table is the single shared mutable resource of the engine; all
/// mutation goes through [`MappingStore::claim`]. Implementations must make
/// `claim` atomic with respect to concurrent claims and lookups so that two
/// concurrent encodes can neither bind the same code twice nor observe a
/// partially inserted mapping.
#[async_trait]
pub trait MappingStore: Send + Sync + 'static {
    /// Binds `code` to `original_url`.
    ///
    /// Returns [`Claim::Existing`] when the URL is already mapped (the claim
    /// is a no-op and the previously issued mapping is returned), and
    /// `Err(StoreError::CodeTaken)` when the code is already bound to a
    /// different URL.
    async fn claim(&self, code: &ShortCode, original_url: &str) -> Result<Claim, StoreError>;

    /// Retrieves the mapping for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlMapping>, StoreError>;

    /// Retrieves the mapping for a given original URL, if one was issued.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Checks whether a short code is already bound.
    async fn exists(&self, code: &ShortCode) -> Result<bool, StoreError>;
}
