//! dualbloom: a double-hashing Bloom filter for byte-string keys.
//!
//! A Bloom filter tests whether a key is a member of a set. It can produce:
//! - **False positives**: may report a key that was never inserted
//! - **Zero false negatives**: a key that was inserted is always reported
//!
//! Each key is hashed once by each of two 64-bit hashers (FNV-1a and FNV-1 by
//! default). The `k` bit positions are derived from the two values by double
//! hashing, `(h1 + i·(h2 | 1)) mod m` for `i` in `0..k`.
//!
//! # Quick Start
//!
//! ```
//! use dualbloom::BloomFilter;
//!
//! // 10,000 keys at a 1% false positive rate
//! let mut filter = BloomFilter::from_estimate(10_000, 0.01)?;
//!
//! filter.insert(b"hello");
//! filter.insert(b"world");
//!
//! assert!(filter.contains(b"hello"));
//! assert!(!filter.contains(b"goodbye"));
//! # Ok::<(), dualbloom::BloomError>(())
//! ```
//!
//! # Two Concurrency Models
//!
//! ## 1. Single-Threaded ([`BloomFilter`])
//!
//! `insert` takes `&mut self`. Sharing a bare filter for writing does not
//! compile; wrap it in a lock or use the synchronized filter below.
//!
//! ## 2. Reader-Writer Locked ([`SyncBloomFilter`])
//!
//! ```
//! use dualbloom::SyncBloomFilter;
//! use std::sync::Arc;
//!
//! let filter = Arc::new(SyncBloomFilter::new(8192, 5)?);
//!
//! let writer = Arc::clone(&filter);
//! std::thread::spawn(move || writer.insert(b"from-thread"))
//!     .join()
//!     .unwrap();
//!
//! assert!(filter.contains(b"from-thread"));
//! # Ok::<(), dualbloom::BloomError>(())
//! ```
//!
//! # Using the Builder
//!
//! ```
//! use dualbloom::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .bits(1000)
//!     .hash_rounds(5)
//!     .build()?;
//! assert_eq!(filter.word_count(), 16);
//! # Ok::<(), dualbloom::BloomError>(())
//! ```
//!
//! # Features
//!
//! - `trace` (default): `tracing` events on construction and on the locked
//!   filter's hot path
//! - `xxhash`: seeded [`XxHasher`](hash::XxHasher) for use as either hasher

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::float_cmp)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/dualbloom/0.1.0")]

/// Filter core, bit array, sizing and traits
pub mod core;

/// Error types and result aliases
pub mod error;

/// Hash functions and position derivation
pub mod hash;

/// Thread-safe filter
pub mod sync;

/// Type-safe builder
pub mod builder;

pub use crate::error::{BloomError, Result};

pub use crate::core::{BloomFilter, FilterParams, MembershipFilter, SharedMembershipFilter};

pub use builder::BloomFilterBuilder;

pub use sync::SyncBloomFilter;

pub use hash::{BloomHasher, Fnv1_64, Fnv1a64};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use dualbloom::prelude::*;
///
/// let filter = SyncBloomFilter::from_estimate(1000, 0.01)?;
/// filter.insert_batch(["a", "b"]);
/// assert!(filter.contains_all(["a", "b"]));
/// # Ok::<(), BloomError>(())
/// ```
pub mod prelude {
    pub use crate::builder::BloomFilterBuilder;
    pub use crate::core::{BloomFilter, FilterParams, MembershipFilter, SharedMembershipFilter};
    pub use crate::error::{BloomError, Result};
    pub use crate::hash::{BloomHasher, Fnv1_64, Fnv1a64};
    pub use crate::sync::SyncBloomFilter;

    #[cfg(feature = "xxhash")]
    pub use crate::hash::XxHasher;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_reexports() {
        let mut filter = BloomFilter::new(1000, 5).unwrap();
        filter.insert(b"a");
        assert!(filter.contains(b"a"));

        let locked = SyncBloomFilter::from(filter);
        assert!(locked.contains(b"a"));
    }

    #[test]
    fn test_error_reexport() {
        let err: BloomError = BloomFilter::new(0, 1).unwrap_err();
        assert_eq!(err, BloomError::InvalidSize { size: 0 });
    }

    #[test]
    fn test_traits_accept_both_filters() {
        fn load<F: MembershipFilter>(filter: &mut F) {
            filter.insert_batch(["x", "y"]);
        }
        fn query<F: SharedMembershipFilter>(filter: &F) -> Vec<bool> {
            filter.contains_batch(["x", "y", "never"])
        }

        let mut filter = BloomFilter::from_estimate(100, 0.01).unwrap();
        load(&mut filter);
        let shared = SyncBloomFilter::from(filter);
        assert_eq!(query(&shared), vec![true, true, false]);
    }

    #[test]
    fn test_builder_and_direct_construction_agree() {
        let built = BloomFilterBuilder::new()
            .expected_items(10_000)
            .false_positive_rate(0.01)
            .build()
            .unwrap();
        let params = FilterParams::from_estimate(10_000, 0.01).unwrap();
        assert_eq!(built.params(), params);
    }

    #[test]
    fn test_prelude() {
        use crate::prelude::*;
        let filter: Result<BloomFilter> = BloomFilter::new(64, 1);
        assert!(filter.is_ok());
        assert_eq!(Fnv1a64.name(), "FNV-1a");
    }
}
