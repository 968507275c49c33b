//! Core types and traits for the Keyhole URL shortener.
//!
//! This crate provides the vocabulary shared by the engine, the storage
//! backends and the HTTP gateway: the validated [`ShortCode`] type, the
//! [`UrlMapping`] entity, the [`MappingStore`] and [`Shortener`] traits,
//! and the error taxonomy.

pub mod error;
pub mod mapping;
pub mod shortcode;
pub mod shortener;

pub use error::{EngineError, StoreError};
pub use mapping::{Claim, MappingStore, UrlMapping};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
