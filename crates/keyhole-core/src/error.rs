use thiserror::Error;

/// Errors surfaced by the mapping store.
///
/// `CodeTaken` is the collision signal the engine's retry loop consumes;
/// it never reaches a caller of the engine directly.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("short code already taken: {0}")]
    CodeTaken(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// Errors surfaced by the shortener engine.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("no mapping for short code: {0}")]
    NotFound(String),
    #[error("gave up generating a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
    #[error("store error: {0}")]
    Store(String),
}

impl From<StoreError> for EngineError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::CodeTaken(code) => Self::Store(format!("short code already taken: {code}")),
            StoreError::Operation(message) => Self::Store(message),
        }
    }
}
