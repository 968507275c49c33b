use crate::error::EngineError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, EngineError>;

/// The shortener engine's public face: the two operations the HTTP layer
/// passes through to.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens a URL, returning the short code bound to it.
    ///
    /// Encoding is idempotent per URL: shortening the same URL again
    /// returns the previously issued code.
    async fn encode(&self, original_url: &str) -> Result<ShortCode>;

    /// Resolves a short code — or a full short URL containing one — back
    /// to the original URL.
    async fn decode(&self, input: &str) -> Result<String>;
}
