//! Seeded randomness.
//!
//! There is no global generator. Callers build an [`RngHandle`] from a `u64`
//! seed and pass it down by `&mut`. Work that fans out (sibling fragments,
//! repeated generator runs) derives one child seed per index, so the result
//! never depends on scheduling.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;

/// Seed of child `index` under `parent`.
///
/// SipHash-1-3 with zero keys over `(parent, index)`; stable across platforms
/// and releases.
pub fn derive_substream_seed(parent: u64, index: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(parent);
    hasher.write_u64(index);
    hasher.finish()
}

/// `StdRng` that remembers the seed it was built from.
#[derive(Debug, Clone)]
pub struct RngHandle {
    seed: u64,
    inner: StdRng,
}

impl RngHandle {
    /// Handle seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Handle for child `index` of `parent`.
    pub fn substream(parent: u64, index: u64) -> Self {
        Self::from_seed(derive_substream_seed(parent, index))
    }

    /// Seed this handle was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Child handle `index`, independent of how far `self` has advanced.
    pub fn child(&self, index: u64) -> Self {
        Self::substream(self.seed, index)
    }

    /// Underlying generator.
    pub fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.inner
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
