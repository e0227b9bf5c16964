//! Random sources for UUID generation.
//!
//! A [`RandomSource`] produces a stream of pseudorandom bytes. Every source is seeded or keyed
//! exactly once, at construction, from an entropy source (normally the operating system via
//! [`OsRng`]). Construction is fallible: if the entropy source cannot be read the caller gets
//! [`UuidError::SeedFailure`] and no source. There is no fallback to weaker randomness.
//!
//! [`UuidError::SeedFailure`]: crate::UuidError::SeedFailure
//!
//! Sources are mutable and are not synchronised. Each draw advances internal state, so draws
//! are never replayable.

mod chacha20;
mod isaac64;
#[cfg(test)]
pub(crate) mod testing;

pub use chacha20::ChaCha20Source;
pub use isaac64::Isaac64Source;

use crate::{Backend, UuidResult};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Produces fresh pseudorandom bytes for identifier generation.
pub trait RandomSource {
    /// Seed or key a new source from `entropy`.
    ///
    /// `entropy` must be a cryptographically secure generator; ordinary PRNGs are rejected at
    /// compile time.
    ///
    /// ```compile_fail
    /// use stellar_uuid::{Isaac64Source, RandomSource};
    ///
    /// let mut weak = rand::rngs::mock::StepRng::new(0, 1);
    /// let _ = Isaac64Source::from_entropy(&mut weak);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::SeedFailure`](crate::UuidError::SeedFailure) if `entropy` cannot
    /// supply the bytes.
    fn from_entropy<E: RngCore + CryptoRng + ?Sized>(entropy: &mut E) -> UuidResult<Self>
    where
        Self: Sized;

    /// Seed or key a new source from the operating system's secure entropy source.
    ///
    /// This may block on platforms whose entropy pool is not yet initialised.
    fn from_os() -> UuidResult<Self>
    where
        Self: Sized,
    {
        Self::from_entropy(&mut OsRng)
    }

    /// Fill `dest` with the next bytes of the stream.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// A source whose backend is chosen from configuration at construction time.
#[derive(Debug)]
pub enum AnySource {
    Isaac64(Isaac64Source),
    ChaCha20(ChaCha20Source),
}

impl AnySource {
    /// Construct the source for `backend`, seeded from `entropy`.
    pub fn from_backend<E: RngCore + CryptoRng + ?Sized>(
        backend: Backend,
        entropy: &mut E,
    ) -> UuidResult<Self> {
        Ok(match backend {
            Backend::Isaac64 => AnySource::Isaac64(Isaac64Source::from_entropy(entropy)?),
            Backend::ChaCha20 => AnySource::ChaCha20(ChaCha20Source::from_entropy(entropy)?),
        })
    }

    pub fn backend(&self) -> Backend {
        match self {
            AnySource::Isaac64(_) => Backend::Isaac64,
            AnySource::ChaCha20(_) => Backend::ChaCha20,
        }
    }
}

impl RandomSource for AnySource {
    /// Uses the default backend.
    fn from_entropy<E: RngCore + CryptoRng + ?Sized>(entropy: &mut E) -> UuidResult<Self> {
        Self::from_backend(Backend::default(), entropy)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            AnySource::Isaac64(source) => source.fill_bytes(dest),
            AnySource::ChaCha20(source) => source.fill_bytes(dest),
        }
    }
}

impl From<Isaac64Source> for AnySource {
    fn from(source: Isaac64Source) -> Self {
        AnySource::Isaac64(source)
    }
}

impl From<ChaCha20Source> for AnySource {
    fn from(source: ChaCha20Source) -> Self {
        AnySource::ChaCha20(source)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{fixed_entropy, FailingEntropy};
    use super::*;
    use crate::UuidError;

    #[test]
    fn test_from_backend_selects_backend() {
        for backend in Backend::ALL {
            let source = AnySource::from_backend(backend, &mut fixed_entropy(1)).unwrap();
            assert_eq!(source.backend(), backend);
        }
    }

    #[test]
    fn test_any_source_defaults_to_isaac64() {
        let source = AnySource::from_entropy(&mut fixed_entropy(1)).unwrap();
        assert_eq!(source.backend(), Backend::Isaac64);
    }

    #[test]
    fn test_any_source_delegates() {
        let mut direct = Isaac64Source::from_entropy(&mut fixed_entropy(9)).unwrap();
        let mut wrapped =
            AnySource::from(Isaac64Source::from_entropy(&mut fixed_entropy(9)).unwrap());

        let mut a = [0u8; 40];
        let mut b = [0u8; 40];
        direct.fill_bytes(&mut a);
        wrapped.fill_bytes(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_failure_for_every_backend() {
        for backend in Backend::ALL {
            match AnySource::from_backend(backend, &mut FailingEntropy) {
                Err(UuidError::SeedFailure(_)) => {}
                other => panic!("Expected SeedFailure for {backend}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_from_os_produces_distinct_streams() {
        let mut a = AnySource::from_os().unwrap();
        let mut b = AnySource::from_os().unwrap();

        let mut out_a = [0u8; 32];
        let mut out_b = [0u8; 32];
        a.fill_bytes(&mut out_a);
        b.fill_bytes(&mut out_b);
        assert_ne!(out_a, out_b);
    }
}
