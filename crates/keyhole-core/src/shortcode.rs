use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The 62-symbol code alphabet: digits, then lowercase, then uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 32;

/// A validated short code identifier for a shortened URL.
///
/// Short codes are 3-32 characters drawn from [`ALPHABET`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self, EngineError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (the engine's generators, which only emit alphabet characters).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Extracts a short code from a lookup input, which may be either a
    /// bare code or a full short URL containing one.
    ///
    /// The code portion is the last path segment; trailing slashes are
    /// ignored. The extracted code is validated like [`ShortCode::new`].
    pub fn from_lookup(input: &str) -> Result<Self, EngineError> {
        let trimmed = input.trim().trim_end_matches('/');
        let code = match trimmed.rsplit_once('/') {
            Some((_, tail)) => tail,
            None => trimmed,
        };
        Self::new(code)
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), EngineError> {
        if code.len() < MIN_LENGTH || code.len() > MAX_LENGTH {
            return Err(EngineError::InvalidShortCode(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                code.len()
            )));
        }

        if !code.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(EngineError::InvalidShortCode(format!(
                "must contain only alphanumeric characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
