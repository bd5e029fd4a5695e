//! Optimal parameter calculation for Bloom filters.
//!
//! # Mathematical Background
//!
//! Given:
//! - `n`: expected number of items
//! - `ε`: target false positive rate
//!
//! Optimal parameters:
//! - `m = ceil(-n × ln(ε) / (ln 2)²)` (bits in filter)
//! - `k = ceil((m / n) × ln 2)` (hash rounds)
//!
//! Expected false positive rate after `n` insertions:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! Both roundings go up, so the resulting filter meets or beats the target.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Kirsch & Mitzenmacher (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::core::bitvec::WORD_BITS;
use crate::error::{BloomError, Result};
use std::f64::consts::LN_2;

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// 2^64 as a float. Any computed size at or above it is not representable.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Largest supported number of hash rounds.
pub const MAX_HASH_ROUNDS: u8 = u8::MAX;

/// Smallest supported number of hash rounds.
pub const MIN_HASH_ROUNDS: u8 = 1;

fn validate_fp_rate(fp_rate: f64) -> Result<()> {
    // Written so NaN fails the check as well
    if fp_rate > 0.0 && fp_rate < 1.0 {
        Ok(())
    } else {
        Err(BloomError::invalid_fp_rate(fp_rate))
    }
}

/// Calculate the optimal number of bits: `m = ceil(-n × ln(ε) / (ln 2)²)`.
///
/// # Errors
///
/// - [`BloomError::InvalidItemCount`] if `n == 0`
/// - [`BloomError::InvalidFalsePositiveRate`] if `fp_rate` is not in (0, 1)
/// - [`BloomError::InvalidSize`] if the result does not fit in `u64`
///
/// # Examples
///
/// ```
/// use dualbloom::core::params::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(1000, 0.01)?, 9586);
/// assert_eq!(optimal_bit_count(1000, 0.001)?, 14378);
/// # Ok::<(), dualbloom::BloomError>(())
/// ```
pub fn optimal_bit_count(n: u64, fp_rate: f64) -> Result<u64> {
    if n == 0 {
        return Err(BloomError::invalid_item_count(n));
    }
    validate_fp_rate(fp_rate)?;

    let m = (-(n as f64) * fp_rate.ln() / LN2_SQUARED).ceil();

    if !m.is_finite() || m >= U64_LIMIT {
        return Err(BloomError::invalid_size(u64::MAX));
    }

    // ln(ε) < 0 for every ε in (0, 1), so m ≥ 1 already; max() guards rounding
    Ok((m as u64).max(1))
}

/// Calculate the optimal number of hash rounds: `k = ceil((m / n) × ln 2)`.
///
/// # Errors
///
/// - [`BloomError::InvalidSize`] if `m == 0`
/// - [`BloomError::InvalidItemCount`] if `n == 0`
/// - [`BloomError::InvalidHashRoundCount`] if `k` exceeds [`MAX_HASH_ROUNDS`]
///
/// # Examples
///
/// ```
/// use dualbloom::core::params::optimal_hash_rounds;
///
/// assert_eq!(optimal_hash_rounds(9586, 1000)?, 7);
/// assert_eq!(optimal_hash_rounds(14378, 1000)?, 10);
/// # Ok::<(), dualbloom::BloomError>(())
/// ```
pub fn optimal_hash_rounds(m: u64, n: u64) -> Result<u8> {
    if m == 0 {
        return Err(BloomError::invalid_size(m));
    }
    if n == 0 {
        return Err(BloomError::invalid_item_count(n));
    }

    let k = (LN_2 * m as f64 / n as f64).ceil();

    if k > f64::from(MAX_HASH_ROUNDS) {
        // Float-to-int casts saturate, so an absurd k still reports sensibly
        return Err(BloomError::invalid_hash_round_count(k as u64));
    }

    Ok((k as u8).max(MIN_HASH_ROUNDS))
}

/// Theoretical false positive rate `(1 - e^(-kn/m))^k`.
///
/// `n` is the number of distinct items inserted so far; an empty filter has
/// a rate of exactly 0.
///
/// # Errors
///
/// - [`BloomError::InvalidSize`] if `m == 0`
/// - [`BloomError::InvalidHashRoundCount`] if `k == 0`
///
/// # Examples
///
/// ```
/// use dualbloom::core::params::expected_fp_rate;
///
/// let fp = expected_fp_rate(9586, 1000, 7)?;
/// assert!((fp - 0.01).abs() < 0.001);
/// # Ok::<(), dualbloom::BloomError>(())
/// ```
pub fn expected_fp_rate(m: u64, n: u64, k: u8) -> Result<f64> {
    if m == 0 {
        return Err(BloomError::invalid_size(m));
    }
    if k == 0 {
        return Err(BloomError::invalid_hash_round_count(0));
    }
    if n == 0 {
        return Ok(0.0);
    }

    let k_f64 = f64::from(k);
    let prob_bit_one = 1.0 - (-(k_f64 * n as f64) / m as f64).exp();

    Ok(prob_bit_one.powf(k_f64).clamp(0.0, 1.0))
}

/// Bits needed per item for a target rate: `-ln(ε) / (ln 2)²`.
///
/// # Errors
///
/// [`BloomError::InvalidFalsePositiveRate`] if `fp_rate` is not in (0, 1).
///
/// # Examples
///
/// ```
/// use dualbloom::core::params::bits_per_element;
///
/// let bpe = bits_per_element(0.01)?;
/// assert!((bpe - 9.585).abs() < 0.01);
/// # Ok::<(), dualbloom::BloomError>(())
/// ```
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    validate_fp_rate(fp_rate)?;
    Ok(-fp_rate.ln() / LN2_SQUARED)
}

/// A validated `(size, hash_rounds)` pair.
///
/// This is the single sizing routine shared by every constructor: explicit
/// construction validates through [`FilterParams::new`], estimate-based
/// construction computes through [`FilterParams::from_estimate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterParams {
    /// Total addressable bits.
    pub size: u64,
    /// Positions derived per key.
    pub hash_rounds: u8,
}

impl FilterParams {
    /// Validate explicit parameters.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidSize`] if `size == 0`
    /// - [`BloomError::InvalidHashRoundCount`] if `hash_rounds == 0`
    pub fn new(size: u64, hash_rounds: u8) -> Result<Self> {
        if size == 0 {
            return Err(BloomError::invalid_size(size));
        }
        if hash_rounds == 0 {
            return Err(BloomError::invalid_hash_round_count(0));
        }
        Ok(Self { size, hash_rounds })
    }

    /// Compute optimal parameters for `expected_items` at `fp_rate`.
    ///
    /// # Errors
    ///
    /// See [`optimal_bit_count`] and [`optimal_hash_rounds`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dualbloom::core::params::FilterParams;
    ///
    /// let params = FilterParams::from_estimate(1000, 0.01)?;
    /// assert_eq!(params.size, 9586);
    /// assert_eq!(params.hash_rounds, 7);
    /// # Ok::<(), dualbloom::BloomError>(())
    /// ```
    pub fn from_estimate(expected_items: u64, fp_rate: f64) -> Result<Self> {
        let size = optimal_bit_count(expected_items, fp_rate)?;
        let hash_rounds = optimal_hash_rounds(size, expected_items)?;

        #[cfg(feature = "trace")]
        tracing::debug!(
            expected_items,
            fp_rate,
            size,
            hash_rounds,
            "computed filter parameters from estimate"
        );

        Self::new(size, hash_rounds)
    }

    /// Number of 64-bit words the bit array needs.
    #[must_use]
    pub const fn word_count(&self) -> u64 {
        self.size.div_ceil(WORD_BITS)
    }

    /// Bytes of bit-array storage.
    #[must_use]
    pub const fn memory_bytes(&self) -> u64 {
        self.word_count().saturating_mul(8)
    }

    /// Bits of storage per item for a planned item count.
    #[must_use]
    pub fn bits_per_item(&self, items: u64) -> f64 {
        if items == 0 {
            return f64::INFINITY;
        }
        self.size as f64 / items as f64
    }

    /// Theoretical false positive rate after `items` distinct insertions.
    #[must_use]
    pub fn expected_fp_rate(&self, items: u64) -> f64 {
        // size and hash_rounds are validated non-zero
        expected_fp_rate(self.size, items, self.hash_rounds).unwrap_or(1.0)
    }
}
