use crate::generator::{Generator, DEFAULT_CODE_LENGTH};
use keyhole_core::shortcode::ALPHABET;
use keyhole_core::ShortCode;
use rand::Rng;

/// Generates fixed-length codes sampled uniformly from the base-62 alphabet.
///
/// Candidates are not guaranteed unique; the engine detects collisions by
/// claiming the candidate against the store and retries with a fresh one.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator producing codes of the given length.
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}
