//! ChaCha20 keystream random source.

use super::RandomSource;
use crate::{UuidError, UuidResult};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::fmt;

const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 8;
const WORD_LEN: u128 = 4;

/// Random source reading the ChaCha20 keystream.
///
/// A fresh 256-bit key and 64-bit stream id (the nonce) are drawn from the entropy source in a
/// single read at construction. Each draw returns the next unread bytes of the keystream for
/// that key/stream pair.
///
/// # Keystream length
///
/// The keystream for one key/stream pair is finite: a 64-bit block counter over 64-byte blocks
/// gives [`ChaCha20Source::KEYSTREAM_LIMIT_BYTES`] (2^70 bytes, or 2^66 identifiers). This
/// source never re-keys and assumes the limit is not reached; at one billion identifiers per
/// second exhaustion would take over two thousand years.
pub struct ChaCha20Source {
    rng: ChaCha20Rng,
}

impl ChaCha20Source {
    /// Bytes of keystream available for a single key/stream pair.
    pub const KEYSTREAM_LIMIT_BYTES: u128 = 1 << 70;

    /// Bytes of keystream consumed so far. Comparable with [`Self::KEYSTREAM_LIMIT_BYTES`].
    pub fn keystream_position(&self) -> u128 {
        self.rng.get_word_pos() * WORD_LEN
    }
}

impl RandomSource for ChaCha20Source {
    fn from_entropy<E: RngCore + CryptoRng + ?Sized>(entropy: &mut E) -> UuidResult<Self> {
        let mut seed = [0u8; KEY_LEN + NONCE_LEN];
        entropy
            .try_fill_bytes(&mut seed)
            .map_err(UuidError::SeedFailure)?;

        let (key, nonce) = seed.split_at(KEY_LEN);
        let mut key_bytes = [0u8; KEY_LEN];
        key_bytes.copy_from_slice(key);
        let mut nonce_bytes = [0u8; NONCE_LEN];
        nonce_bytes.copy_from_slice(nonce);

        let mut rng = ChaCha20Rng::from_seed(key_bytes);
        rng.set_stream(u64::from_le_bytes(nonce_bytes));

        Ok(Self { rng })
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}

impl fmt::Debug for ChaCha20Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaCha20Source")
            .field("keystream_position", &self.keystream_position())
            .finish_non_exhaustive()
    }
}
