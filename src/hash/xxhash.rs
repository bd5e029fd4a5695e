//! XXHash3 hasher (requires the `xxhash` feature).
//!
//! XXHash3 has better avalanche behaviour than FNV, which matters for filters
//! sized for very low false-positive rates. Two instances with different
//! seeds form an independent pair for one filter:
//!
//! ```
//! use dualbloom::core::BloomFilter;
//! use dualbloom::hash::XxHasher;
//!
//! let (a, b) = XxHasher::pair();
//! let mut filter = BloomFilter::from_estimate_with_hashers(10_000, 0.001, a, b)?;
//! filter.insert(b"alpha");
//! assert!(filter.contains(b"alpha"));
//! # Ok::<(), dualbloom::BloomError>(())
//! ```
//!
//! This module wraps the `xxhash-rust` crate.

use super::hasher::BloomHasher;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Seed used for the second member of [`XxHasher::pair`].
const SECOND_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded XXHash3-64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct XxHasher {
    seed: u64,
}

impl XxHasher {
    /// Hasher with seed 0 (equal to unseeded XXH3-64).
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Hasher with an explicit seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Two differently seeded hashers, ready for both filter slots.
    #[must_use]
    pub const fn pair() -> (Self, Self) {
        (Self::new(), Self::with_seed(SECOND_SEED))
    }

    /// The configured seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl BloomHasher for XxHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        xxh3_64_with_seed(bytes, self.seed)
    }

    fn name(&self) -> &'static str {
        "XXH3-64"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let hasher = XxHasher::new();
        assert_eq!(hasher.hash_bytes(b"test"), hasher.hash_bytes(b"test"));
    }

    #[test]
    fn test_matches_unseeded_xxh3() {
        let data = b"reference";
        assert_eq!(
            XxHasher::new().hash_bytes(data),
            xxhash_rust::xxh3::xxh3_64(data)
        );
    }

    #[test]
    fn test_seeds_are_independent() {
        let (a, b) = XxHasher::pair();
        assert_ne!(a.seed(), b.seed());
        for data in [&b""[..], b"a", b"hello world"] {
            assert_ne!(a.hash_bytes(data), b.hash_bytes(data));
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(XxHasher::new().name(), "XXH3-64");
    }
}
