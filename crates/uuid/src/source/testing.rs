use rand::{CryptoRng, Error, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic entropy, so tests can rebuild the same source twice.
pub(crate) fn fixed_entropy(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Entropy source that can never be read.
pub(crate) struct FailingEntropy;

impl RngCore for FailingEntropy {
    fn next_u32(&mut self) -> u32 {
        panic!("infallible read from FailingEntropy")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("infallible read from FailingEntropy")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("infallible read from FailingEntropy")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
        Err(Error::new("entropy source unavailable"))
    }
}

impl CryptoRng for FailingEntropy {}

/// Entropy source that serves `remaining` bytes of zeroes, then fails.
pub(crate) struct ShortEntropy {
    pub(crate) remaining: usize,
}

impl RngCore for ShortEntropy {
    fn next_u32(&mut self) -> u32 {
        panic!("infallible read from ShortEntropy")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("infallible read from ShortEntropy")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("infallible read from ShortEntropy")
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        if dest.len() > self.remaining {
            return Err(Error::new("entropy source exhausted"));
        }
        self.remaining -= dest.len();
        dest.fill(0);
        Ok(())
    }
}

impl CryptoRng for ShortEntropy {}

/// Entropy source that serves zeroes for its first read and fails every later one.
#[derive(Default)]
pub(crate) struct SingleReadEntropy {
    pub(crate) reads: usize,
    pub(crate) bytes: usize,
}

impl RngCore for SingleReadEntropy {
    fn next_u32(&mut self) -> u32 {
        panic!("infallible read from SingleReadEntropy")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("infallible read from SingleReadEntropy")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("infallible read from SingleReadEntropy")
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.reads += 1;
        if self.reads > 1 {
            return Err(Error::new("entropy source already read"));
        }
        self.bytes = dest.len();
        dest.fill(0);
        Ok(())
    }
}

impl CryptoRng for SingleReadEntropy {}
