//! Error types for filter construction.
//!
//! Every failure in this crate is an input-validation failure detected while a
//! filter is being constructed. Once a filter exists, `insert` and `contains`
//! cannot fail for any input, including the empty byte string.
//!
//! # Error Propagation
//!
//! ```
//! use dualbloom::{BloomError, Result};
//! use dualbloom::core::params::FilterParams;
//!
//! fn plan(n: u64, fp: f64) -> Result<(u64, u8)> {
//!     let params = FilterParams::from_estimate(n, fp)?;
//!     Ok((params.size, params.hash_rounds))
//! }
//! # assert!(plan(1000, 0.01).is_ok());
//! # assert!(matches!(plan(0, 0.01), Err(BloomError::InvalidItemCount { count: 0 })));
//! ```

use thiserror::Error;

/// Result type alias for filter construction.
pub type Result<T> = std::result::Result<T, BloomError>;

/// Errors that can occur while constructing a Bloom filter.
///
/// Each variant carries the rejected value so callers can report or correct
/// it. `Clone` + `PartialEq` make errors easy to compare in tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BloomError {
    /// Estimate-based construction was given an expected item count of zero.
    #[error("Invalid item count: {count}. Expected items must be greater than 0.")]
    InvalidItemCount {
        /// The rejected item count.
        count: u64,
    },

    /// Estimate-based construction was given a rate outside the open interval (0, 1).
    ///
    /// NaN is rejected through this variant as well.
    #[error("False positive rate {fp_rate} is out of bounds. Must be in range (0, 1).")]
    InvalidFalsePositiveRate {
        /// The rejected false positive rate.
        fp_rate: f64,
    },

    /// Explicit construction was given zero bits, or a bit count that cannot
    /// be allocated on this platform.
    #[error("Invalid filter size: {size} bits. Must be positive and addressable.")]
    InvalidSize {
        /// The rejected size in bits.
        size: u64,
    },

    /// Explicit construction was given zero hash rounds, or estimate sizing
    /// produced more rounds than a filter supports.
    #[error("Invalid hash round count: {count}. Must be in range [1, 255].")]
    InvalidHashRoundCount {
        /// The rejected round count.
        count: u64,
    },
}

impl BloomError {
    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: u64) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create an `InvalidFalsePositiveRate` error.
    #[must_use]
    pub fn invalid_fp_rate(fp_rate: f64) -> Self {
        Self::InvalidFalsePositiveRate { fp_rate }
    }

    /// Create an `InvalidSize` error.
    #[must_use]
    pub fn invalid_size(size: u64) -> Self {
        Self::InvalidSize { size }
    }

    /// Create an `InvalidHashRoundCount` error.
    #[must_use]
    pub fn invalid_hash_round_count(count: u64) -> Self {
        Self::InvalidHashRoundCount { count }
    }
}
