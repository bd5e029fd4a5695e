//! Hash functions and bit-position derivation.
//!
//! # Module Organization
//!
//! - [`hasher`]: the [`BloomHasher`] capability and the FNV defaults
//! - [`strategies`]: [`DoubleHashing`], deriving k positions from two hashes
//! - `xxhash`: optional [`XxHasher`] (feature `xxhash`)
//!
//! # Separation of Concerns
//!
//! - **Hashers** map bytes to a 64-bit value and nothing else
//! - **Double hashing** turns the two values into `k` positions
//! - **Filters** compose two hashers, the position derivation and a bit array
//!
//! ```
//! use dualbloom::hash::{BloomHasher, DoubleHashing, Fnv1_64, Fnv1a64};
//!
//! let data = b"hello";
//! let h1 = Fnv1a64.hash_bytes(data);
//! let h2 = Fnv1_64.hash_bytes(data);
//! let positions: Vec<u64> = DoubleHashing::positions(h1, h2, 7, 1000).collect();
//! assert_eq!(positions.len(), 7);
//! assert!(positions.iter().all(|&p| p < 1000));
//! ```

pub mod hasher;
pub mod strategies;

#[cfg(feature = "xxhash")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash")))]
pub mod xxhash;

pub use hasher::{BloomHasher, Fnv1_64, Fnv1a64};
pub use strategies::{BitPositions, DoubleHashing};

#[cfg(feature = "xxhash")]
pub use xxhash::XxHasher;

/// Default hasher for a filter's first slot.
pub type DefaultHashA = Fnv1a64;

/// Default hasher for a filter's second slot.
pub type DefaultHashB = Fnv1_64;
