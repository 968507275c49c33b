pub mod counter;
pub mod random;

use keyhole_core::ShortCode;

/// Length of generated short codes unless configured otherwise.
///
/// Six symbols over a 62-symbol alphabet give ~5.7e10 codes, far more than
/// any expected table occupancy for an in-memory deployment.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Trait for producing candidate short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// A generator may guarantee uniqueness by construction (see
/// [`counter::CounterGenerator`]) or produce random candidates whose
/// uniqueness the engine enforces by claiming against the store and
/// retrying on collision (see [`random::RandomGenerator`]).
pub trait Generator: Send + Sync + 'static {
    /// Generates the next candidate short code.
    fn generate(&self) -> ShortCode;
}
