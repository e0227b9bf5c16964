//! ISAAC-64 backed random source.

use super::RandomSource;
use crate::{UuidError, UuidResult};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_isaac::Isaac64Rng;
use std::fmt;

/// Fast seeded pseudorandom source built on ISAAC-64.
///
/// The entire 256-word seed array is drawn from the entropy source at construction, so the
/// generator state carries no fixed or low-entropy component. Each draw consumes whole 64-bit
/// outputs written in little-endian order; a partial trailing word is truncated.
pub struct Isaac64Source {
    rng: Isaac64Rng,
}

impl RandomSource for Isaac64Source {
    fn from_entropy<E: RngCore + CryptoRng + ?Sized>(entropy: &mut E) -> UuidResult<Self> {
        let rng = Isaac64Rng::from_rng(entropy).map_err(UuidError::SeedFailure)?;
        Ok(Self { rng })
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let word = self.rng.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

impl fmt::Debug for Isaac64Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Isaac64Source").finish_non_exhaustive()
    }
}
