use crate::generator::Generator;
use async_trait::async_trait;
use keyhole_core::{Claim, EngineError, MappingStore, ShortCode, Shortener, StoreError};
use std::sync::Arc;
use tracing::{debug, trace};
use url::Url;

/// Claim attempts before encode gives up with `GenerationExhausted`.
///
/// With a 62^6 code space the loop terminates on the first attempt for any
/// practical table size; the budget exists so a misbehaving generator fails
/// loudly instead of spinning.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// A concrete implementation of the [`Shortener`] trait.
///
/// The service owns the mapping store and a code [`Generator`] and handles:
/// - URL validation on encode
/// - idempotent encoding (the same URL keeps its previously issued code)
/// - candidate claiming with collision retry
/// - code extraction and lookup on decode
#[derive(Debug, Clone)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    max_attempts: u32,
}

impl<S: MappingStore, G: Generator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService` over the given store and generator.
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the claim-attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates that the URL parses and has an http(s) scheme and a host.
    ///
    /// Reachability is not checked; the original string is stored verbatim.
    fn validate_url(original_url: &str) -> Result<(), EngineError> {
        let parsed = Url::parse(original_url)
            .map_err(|e| EngineError::InvalidUrl(format!("{}: {}", original_url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(EngineError::InvalidUrl(format!(
                "scheme must be http or https: {}",
                parsed.scheme()
            )));
        }

        if !parsed.has_host() {
            return Err(EngineError::InvalidUrl(format!(
                "url has no host: {}",
                original_url
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<S: MappingStore, G: Generator> Shortener for ShortenerService<S, G> {
    async fn encode(&self, original_url: &str) -> Result<ShortCode, EngineError> {
        Self::validate_url(original_url)?;

        // Fast path: the URL was shortened before.
        if let Some(mapping) = self.store.find_by_url(original_url).await? {
            debug!(code = %mapping.code, "url already mapped");
            return Ok(mapping.code);
        }

        for _ in 0..self.max_attempts {
            let candidate = self.generator.generate();
            match self.store.claim(&candidate, original_url).await {
                Ok(Claim::Inserted) => {
                    debug!(code = %candidate, "issued short code");
                    return Ok(candidate);
                }
                // Lost the race against a concurrent encode of the same
                // URL; hand back the winner's code.
                Ok(Claim::Existing(mapping)) => {
                    debug!(code = %mapping.code, "url mapped concurrently");
                    return Ok(mapping.code);
                }
                Err(StoreError::CodeTaken(code)) => {
                    trace!(%code, "candidate collided, retrying");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(EngineError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    async fn decode(&self, input: &str) -> Result<String, EngineError> {
        let code = ShortCode::from_lookup(input)?;

        match self.store.get(&code).await? {
            Some(mapping) => {
                trace!(%code, url = %mapping.original_url, "resolved short code");
                Ok(mapping.original_url)
            }
            None => Err(EngineError::NotFound(code.to_string())),
        }
    }
}
