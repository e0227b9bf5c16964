//! Version 4 UUID values and generators.
//!
//! This crate provides a 128-bit [`Uuid`] value with its canonical textual, binary and JSON
//! forms, and a [`Generator`] that produces fresh version 4 identifiers from a seeded
//! cryptographically strong random source.
//!
//! ## Canonical UUID form
//! - Length: 36
//! - Layout: `8-4-4-4-12` lowercase hex digits separated by hyphens
//! - Example: `123e4567-e89b-12d3-a456-426614174000`
//!
//! Parsing accepts upper or lower case hex digits, but always requires the hyphens. Parsing is
//! version-agnostic: any 16 bytes are a valid [`Uuid`], and version/variant bits are not
//! checked.
//!
//! ## Generation
//! A [`Generator`] owns exactly one [`RandomSource`]. Two backends are available and are chosen
//! at construction through [`GeneratorConfig`]:
//! - [`Isaac64Source`]: ISAAC-64 with its whole state seeded from the operating system.
//! - [`ChaCha20Source`]: the ChaCha20 keystream under a key and stream id drawn from the
//!   operating system.
//!
//! Generators are not internally synchronised. Keep one per thread, or share one through
//! [`SyncGenerator`].
//!
//! ```
//! use stellar_uuid::{Generator, Uuid};
//!
//! let mut generator = Generator::new()?;
//! let id = generator.new_v4();
//! assert_eq!(Uuid::parse(&id.to_string())?, id);
//! # Ok::<(), stellar_uuid::UuidError>(())
//! ```

mod config;
mod generator;
#[cfg(feature = "serde")]
mod serde_support;
mod source;
pub mod tables;
mod value;

// Re-export public types
pub use config::{Backend, GeneratorConfig, BACKEND_ENV_VAR};
pub use generator::{apply_v4_fixup, Generator, SyncGenerator};
pub use source::{AnySource, ChaCha20Source, Isaac64Source, RandomSource};
pub use value::Uuid;

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// String or JSON input is not a canonical hyphenated UUID
    #[error("invalid UUID")]
    InvalidFormat,
    /// Binary input holds fewer than 16 bytes
    #[error("invalid length: expected at least {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// The operating system entropy source could not be read
    #[error("failed to seed random source: {0}")]
    SeedFailure(#[source] rand::Error),
    /// Unknown or malformed generator configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
