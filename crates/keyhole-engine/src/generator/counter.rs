use crate::generator::{Generator, DEFAULT_CODE_LENGTH};
use keyhole_core::shortcode::ALPHABET;
use keyhole_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// A collision-free generator backed by a monotonically increasing counter.
///
/// The counter value is encoded in base 62 and zero-padded to the
/// configured width, so codes come out as "000000", "000001", ... and are
/// unique by construction within a single instance. Codes grow one symbol
/// past the configured width once the counter exceeds 62^width.
///
/// The deterministic sequence makes this the generator of choice for tests
/// that assert exact codes.
#[derive(Debug)]
pub struct CounterGenerator {
    counter: AtomicU64,
    width: usize,
}

impl Clone for CounterGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            width: self.width,
        }
    }
}

impl CounterGenerator {
    /// Creates a generator producing codes zero-padded to the given width.
    pub fn new(width: usize) -> Self {
        Self::with_offset(width, 0)
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(width: usize, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            width,
        }
    }
}

impl Default for CounterGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl Generator for CounterGenerator {
    fn generate(&self) -> ShortCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new_unchecked(encode_base62(count, self.width))
    }
}

fn encode_base62(mut n: u64, width: usize) -> String {
    let mut digits = Vec::with_capacity(width);
    while n > 0 {
        digits.push(ALPHABET[(n % 62) as usize]);
        n /= 62;
    }
    while digits.len() < width {
        digits.push(ALPHABET[0]);
    }
    digits.reverse();
    String::from_utf8(digits).expect("alphabet is ascii")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_codes() {
        let generator = CounterGenerator::new(6);

        assert_eq!(generator.generate().as_str(), "000000");
        assert_eq!(generator.generate().as_str(), "000001");
        assert_eq!(generator.generate().as_str(), "000002");
    }

    #[test]
    fn carries_into_the_next_symbol() {
        let generator = CounterGenerator::with_offset(6, 61);

        assert_eq!(generator.generate().as_str(), "00000Z");
        assert_eq!(generator.generate().as_str(), "000010");
    }

    #[test]
    fn with_offset_resumes_from_counter_value() {
        let generator = CounterGenerator::with_offset(6, 1000);

        assert_eq!(generator.generate().as_str(), encode_base62(1000, 6));
        assert_eq!(generator.generate().as_str(), encode_base62(1001, 6));
    }

    #[test]
    fn encode_base62_known_values() {
        assert_eq!(encode_base62(0, 6), "000000");
        assert_eq!(encode_base62(35, 6), "00000z");
        assert_eq!(encode_base62(61, 6), "00000Z");
        assert_eq!(encode_base62(62, 6), "000010");
        assert_eq!(encode_base62(62 * 62 - 1, 6), "0000ZZ");
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = CounterGenerator::new(6);
        generator.generate();
        generator.generate();

        let cloned = generator.clone();

        assert_eq!(generator.generate().as_str(), "000002");
        assert_eq!(cloned.generate().as_str(), "000002");
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CounterGenerator>();
    }
}
