//! The Keyhole shortener engine.
//!
//! This crate ties a [`keyhole_core::MappingStore`] and a [`Generator`]
//! together into the [`ShortenerService`], the concrete implementation of
//! the [`keyhole_core::Shortener`] trait: URL validation, idempotent
//! encoding with collision retry, and decode with code extraction.

pub mod generator;
pub mod service;

pub use generator::counter::CounterGenerator;
pub use generator::random::RandomGenerator;
pub use generator::{Generator, DEFAULT_CODE_LENGTH};
pub use service::ShortenerService;
