//! crypto/entropy.rs
//! Pluggable seed sources for the random text generator.
//!
//! Design notes:
//! - The generator itself is always `StdRng`; only the seed varies.
//! - `ClockEntropy` is the default and is NOT suitable where uniqueness matters:
//!   two calls with the same salt inside one clock tick produce the same stream.
//! - `OsEntropy` ignores the salt and seeds from the operating system.
//! - `FixedEntropy` is fully deterministic and exists for tests and fixtures.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Produces a seeded generator for one random draw.
pub trait EntropySource {
    fn rng(&self, salt: u64) -> StdRng;
}

/// Seeds from `salt` combined with the nanosecond wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockEntropy;

impl EntropySource for ClockEntropy {
    fn rng(&self, salt: u64) -> StdRng {
        // A clock before the epoch degrades to salt-only seeding.
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        StdRng::seed_from_u64(mix_seed(nanos, salt))
    }
}

/// Seeds from the operating system RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn rng(&self, _salt: u64) -> StdRng {
        StdRng::from_entropy()
    }
}

/// Deterministic seed; same `(seed, salt)` always yields the same stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEntropy(pub u64);

impl EntropySource for FixedEntropy {
    fn rng(&self, salt: u64) -> StdRng {
        StdRng::seed_from_u64(mix_seed(self.0, salt))
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn rng(&self, salt: u64) -> StdRng {
        (**self).rng(salt)
    }
}

#[inline]
fn mix_seed(base: u64, salt: u64) -> u64 {
    base ^ salt.rotate_left(32).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
