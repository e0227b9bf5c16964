//! Version 4 UUID generation.

use crate::source::{AnySource, RandomSource};
use crate::tables::BYTE_LEN;
use crate::{GeneratorConfig, Uuid, UuidResult};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::sync::{Arc, Mutex, PoisonError};

/// Set the version nibble to 4 and the variant bits to RFC 4122 (`10`).
///
/// This is the only difference between 16 random bytes and a version 4 UUID.
pub fn apply_v4_fixup(bytes: &mut [u8; BYTE_LEN]) {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
}

/// Version 4 UUID generator.
///
/// Owns exactly one [`RandomSource`]; its lifetime is the source's lifetime. Generation takes
/// `&mut self`, so a generator cannot be used from several threads without external locking.
/// Use one generator per thread, or [`SyncGenerator`].
#[derive(Debug)]
pub struct Generator<S: RandomSource = AnySource> {
    source: S,
}

impl Generator {
    /// Create a generator with the default backend, seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::SeedFailure`](crate::UuidError::SeedFailure) if the operating
    /// system entropy source cannot be read.
    pub fn new() -> UuidResult<Self> {
        Self::from_config(&GeneratorConfig::default())
    }

    /// Create a generator for the configured backend, seeded from the operating system.
    pub fn from_config(config: &GeneratorConfig) -> UuidResult<Self> {
        Self::from_config_with_entropy(config, &mut OsRng)
    }

    /// Create a generator for the configured backend, seeded from `entropy`.
    ///
    /// Callers outside tests should prefer [`Generator::from_config`].
    ///
    /// ```compile_fail
    /// use stellar_uuid::{Generator, GeneratorConfig};
    ///
    /// let mut weak = rand::rngs::mock::StepRng::new(0, 1);
    /// let _ = Generator::from_config_with_entropy(&GeneratorConfig::default(), &mut weak);
    /// ```
    pub fn from_config_with_entropy<E: RngCore + CryptoRng + ?Sized>(
        config: &GeneratorConfig,
        entropy: &mut E,
    ) -> UuidResult<Self> {
        let source = AnySource::from_backend(config.backend(), entropy)?;
        tracing::debug!(backend = %config.backend(), "seeded UUID generator");
        Ok(Self::from_source(source))
    }
}

impl<S: RandomSource> Generator<S> {
    /// Wrap an already constructed source.
    pub fn from_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a fresh version 4 UUID.
    pub fn new_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; BYTE_LEN];
        self.source.fill_bytes(&mut bytes);
        apply_v4_fixup(&mut bytes);
        Uuid::from_bytes(bytes)
    }

    /// Overwrite every element of `out` with a fresh version 4 UUID.
    pub fn fill(&mut self, out: &mut [Uuid]) {
        for slot in out {
            *slot = self.new_v4();
        }
    }
}

/// A [`Generator`] shared between threads behind a mutex.
///
/// Clones share the same generator.
pub struct SyncGenerator<S: RandomSource = AnySource> {
    inner: Arc<Mutex<Generator<S>>>,
}

impl SyncGenerator {
    /// Shared generator for the configured backend, seeded from the operating system.
    pub fn from_config(config: &GeneratorConfig) -> UuidResult<Self> {
        Generator::from_config(config).map(Self::new)
    }
}

impl<S: RandomSource> SyncGenerator<S> {
    pub fn new(generator: Generator<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    /// Returns a fresh version 4 UUID, holding the lock for a single draw.
    pub fn new_v4(&self) -> Uuid {
        // A panic cannot leave the source half-advanced, so a poisoned lock is still usable
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .new_v4()
    }
}

impl<S: RandomSource> Clone for SyncGenerator<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
