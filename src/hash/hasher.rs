//! The hashing capability and the two default hash functions.
//!
//! A filter is configured with two independent `bytes -> u64` functions. Any
//! type implementing [`BloomHasher`] can fill either slot, including plain
//! functions and closures of type `Fn(&[u8]) -> u64`.
//!
//! The defaults are the 64-bit Fowler-Noll-Vo hashes:
//!
//! - [`Fnv1a64`]: xor the byte in, then multiply (first slot)
//! - [`Fnv1_64`]: multiply, then xor the byte in (second slot)
//!
//! Both are pure functions of their input: no accumulator state survives
//! between calls.
//!
//! # Examples
//!
//! ```
//! use dualbloom::hash::{BloomHasher, Fnv1_64, Fnv1a64};
//!
//! assert_eq!(Fnv1a64.hash_bytes(b"a"), 0xaf63_dc4c_8601_ec8c);
//! assert_eq!(Fnv1_64.hash_bytes(b"a"), 0xaf63_bd4c_8601_b7be);
//!
//! // Closures implement the capability too
//! let seeded = |bytes: &[u8]| Fnv1a64.hash_bytes(bytes).rotate_left(17);
//! assert_ne!(seeded.hash_bytes(b"a"), Fnv1a64.hash_bytes(b"a"));
//! ```

/// FNV 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic hash from an arbitrary byte sequence to a 64-bit value.
///
/// # Requirements
///
/// - **Deterministic**: the same bytes always produce the same value
/// - **Total**: never fails or panics, for any input including empty
/// - **Independent**: the two hashers given to one filter should not be
///   trivially correlated, otherwise the sizing formulas overestimate accuracy.
///   The default pair shares its lowest bit; the odd step in
///   [`DoubleHashing`](crate::hash::DoubleHashing) absorbs that
///
/// Implementations must be `Send + Sync` so filters can be shared through
/// [`SyncBloomFilter`](crate::sync::SyncBloomFilter).
pub trait BloomHasher: Send + Sync {
    /// Hash `bytes` to a 64-bit value.
    fn hash_bytes(&self, bytes: &[u8]) -> u64;

    /// Human-readable name used in `Debug` output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> BloomHasher for F
where
    F: Fn(&[u8]) -> u64 + Send + Sync,
{
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        self(bytes)
    }
}

/// 64-bit FNV-1a. Default for a filter's first hash slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fnv1a64;

impl BloomHasher for Fnv1a64 {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        bytes.iter().fold(FNV_OFFSET_BASIS, |state, &byte| {
            (state ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
    }

    fn name(&self) -> &'static str {
        "FNV-1a"
    }
}

/// 64-bit FNV-1. Default for a filter's second hash slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fnv1_64;

impl BloomHasher for Fnv1_64 {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        bytes.iter().fold(FNV_OFFSET_BASIS, |state, &byte| {
            state.wrapping_mul(FNV_PRIME) ^ u64::from(byte)
        })
    }

    fn name(&self) -> &'static str {
        "FNV-1"
    }
}
