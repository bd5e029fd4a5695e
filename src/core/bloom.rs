//! The single-threaded Bloom filter.
//!
//! `BloomFilter` owns a packed bit array and two hashers. Each key is hashed
//! once by each hasher, and [`DoubleHashing`] expands the two values into
//! `hash_rounds` bit positions.
//!
//! # Thread Safety
//!
//! `insert` takes `&mut self`; the filter has no internal synchronization.
//! Wrap it in [`SyncBloomFilter`](crate::sync::SyncBloomFilter) (or another
//! lock) to share it between threads.
//!
//! # Examples
//!
//! ```
//! use dualbloom::core::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 5)?;
//! filter.insert(b"a");
//! assert!(filter.contains(b"a"));
//! assert!(!filter.contains(b"zzz-never-inserted"));
//!
//! let sized = BloomFilter::from_estimate(10_000, 0.01)?;
//! assert_eq!(sized.size(), 95_851);
//! assert_eq!(sized.hash_rounds(), 7);
//! # Ok::<(), dualbloom::BloomError>(())
//! ```

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::core::bitvec::BitVec;
use crate::core::filter::MembershipFilter;
use crate::core::params::FilterParams;
use crate::error::Result;
use crate::hash::{BitPositions, BloomHasher, DefaultHashA, DefaultHashB, DoubleHashing};
use std::fmt;

/// Bloom filter over byte-string keys.
///
/// # Type Parameters
///
/// - `A`: first hasher (defaults to FNV-1a)
/// - `B`: second hasher (defaults to FNV-1)
///
/// # Invariants
///
/// - `size()` and `hash_rounds()` never change after construction
/// - the bit array holds exactly `ceil(size / 64)` words
/// - bits are only ever set, never cleared
#[derive(Clone)]
pub struct BloomFilter<A = DefaultHashA, B = DefaultHashB> {
    bits: BitVec,
    hash_rounds: u8,
    hash_a: A,
    hash_b: B,
}

impl BloomFilter {
    /// Create a filter of `size` bits and `hash_rounds` rounds with the
    /// default FNV-1a / FNV-1 hashers.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidSize`](crate::BloomError::InvalidSize) if `size == 0`
    /// - [`BloomError::InvalidHashRoundCount`](crate::BloomError::InvalidHashRoundCount)
    ///   if `hash_rounds == 0`
    pub fn new(size: u64, hash_rounds: u8) -> Result<Self> {
        Self::with_hashers(size, hash_rounds, DefaultHashA::default(), DefaultHashB::default())
    }

    /// Create a filter sized for `expected_items` at `fp_rate`, with the
    /// default hashers.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidItemCount`](crate::BloomError::InvalidItemCount)
    ///   if `expected_items == 0`
    /// - [`BloomError::InvalidFalsePositiveRate`](crate::BloomError::InvalidFalsePositiveRate)
    ///   if `fp_rate` is not in (0, 1)
    /// - size or round-count errors for pathological inputs (see
    ///   [`FilterParams::from_estimate`])
    pub fn from_estimate(expected_items: u64, fp_rate: f64) -> Result<Self> {
        Self::from_estimate_with_hashers(
            expected_items,
            fp_rate,
            DefaultHashA::default(),
            DefaultHashB::default(),
        )
    }
}

impl<A, B> BloomFilter<A, B>
where
    A: BloomHasher,
    B: BloomHasher,
{
    /// Create a filter of `size` bits and `hash_rounds` rounds with explicit
    /// hashers.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dualbloom::core::BloomFilter;
    /// use dualbloom::hash::{BloomHasher, Fnv1a64};
    ///
    /// fn rotated(bytes: &[u8]) -> u64 {
    ///     Fnv1a64.hash_bytes(bytes).rotate_left(29) | 1
    /// }
    ///
    /// let mut filter = BloomFilter::with_hashers(4096, 4, Fnv1a64, rotated)?;
    /// filter.insert(b"key");
    /// assert!(filter.contains(b"key"));
    /// # Ok::<(), dualbloom::BloomError>(())
    /// ```
    pub fn with_hashers(size: u64, hash_rounds: u8, hash_a: A, hash_b: B) -> Result<Self> {
        Self::from_params(FilterParams::new(size, hash_rounds)?, hash_a, hash_b)
    }

    /// Create a filter sized for `expected_items` at `fp_rate` with explicit
    /// hashers.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::from_estimate`].
    pub fn from_estimate_with_hashers(
        expected_items: u64,
        fp_rate: f64,
        hash_a: A,
        hash_b: B,
    ) -> Result<Self> {
        Self::from_params(
            FilterParams::from_estimate(expected_items, fp_rate)?,
            hash_a,
            hash_b,
        )
    }

    /// Allocate a filter for `params`.
    ///
    /// Every constructor ends here. The fields of [`FilterParams`] are public,
    /// so they are validated again before allocating.
    ///
    /// # Errors
    ///
    /// [`BloomError::InvalidSize`](crate::BloomError::InvalidSize) if the size
    /// is zero or the bit array cannot be addressed on this platform, and
    /// [`BloomError::InvalidHashRoundCount`](crate::BloomError::InvalidHashRoundCount)
    /// if the round count is zero.
    pub fn from_params(params: FilterParams, hash_a: A, hash_b: B) -> Result<Self> {
        let params = FilterParams::new(params.size, params.hash_rounds)?;
        let bits = BitVec::new(params.size)?;

        #[cfg(feature = "trace")]
        tracing::debug!(
            size = params.size,
            hash_rounds = params.hash_rounds,
            words = bits.word_count(),
            hash_a = hash_a.name(),
            hash_b = hash_b.name(),
            "allocated bloom filter"
        );

        Ok(Self {
            bits,
            hash_rounds: params.hash_rounds,
            hash_a,
            hash_b,
        })
    }

    /// Set every derived bit position of `data`. Idempotent; never fails.
    #[inline]
    pub fn insert(&mut self, data: &[u8]) {
        for position in self.bit_positions(data) {
            self.bits.set(position);
        }
    }

    /// Test membership of `data`.
    ///
    /// Returns `false` at the first unset position. `true` means every
    /// position is set: either `data` was inserted, or this is a false
    /// positive.
    #[must_use]
    #[inline]
    pub fn contains(&self, data: &[u8]) -> bool {
        self.bit_positions(data).all(|position| self.bits.get(position))
    }

    /// The `hash_rounds` positions derived for `data`, in round order.
    ///
    /// Positions may repeat.
    #[must_use]
    #[inline]
    pub fn bit_positions(&self, data: &[u8]) -> BitPositions {
        let h1 = self.hash_a.hash_bytes(data);
        let h2 = self.hash_b.hash_bytes(data);
        DoubleHashing::positions(h1, h2, self.hash_rounds, self.bits.len())
    }

    /// Total addressable bits.
    #[must_use]
    #[inline]
    pub fn size(&self) -> u64 {
        self.bits.len()
    }

    /// Positions derived per key.
    #[must_use]
    #[inline]
    pub fn hash_rounds(&self) -> u8 {
        self.hash_rounds
    }

    /// The filter's `(size, hash_rounds)`.
    #[must_use]
    pub fn params(&self) -> FilterParams {
        FilterParams {
            size: self.size(),
            hash_rounds: self.hash_rounds,
        }
    }

    /// Number of 64-bit words in the bit array.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.bits.word_count()
    }

    /// Heap bytes used by the bit array.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage()
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in `[0, 1]`.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.size() as f64
    }

    /// `true` if no bit is set, i.e. nothing was ever inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.as_words().iter().all(|&word| word == 0)
    }

    /// Theoretical false positive rate once `items` distinct keys are inserted.
    #[must_use]
    pub fn expected_false_positive_rate(&self, items: u64) -> f64 {
        self.params().expected_fp_rate(items)
    }

    /// Estimate of the number of distinct keys inserted so far.
    ///
    /// Uses the Swamidass-Baldi estimator `-(m / k) × ln(1 - X / m)` where
    /// `X` is the number of set bits. Saturates to `u64::MAX` when every bit
    /// is set.
    #[must_use]
    pub fn estimated_item_count(&self) -> u64 {
        let m = self.size() as f64;
        let ones = self.count_ones() as f64;
        if ones == 0.0 {
            return 0;
        }
        if ones >= m {
            return u64::MAX;
        }
        let estimate = -(m / f64::from(self.hash_rounds)) * (1.0 - ones / m).ln();
        // Float-to-int casts saturate
        estimate.round() as u64
    }

    /// Theoretical false positive rate at the current estimated load.
    #[must_use]
    pub fn current_false_positive_rate(&self) -> f64 {
        let ones = self.count_ones();
        if ones == 0 {
            return 0.0;
        }
        // Probability that all k derived bits are set, from the observed fill
        self.fill_ratio().powi(i32::from(self.hash_rounds))
    }

    /// The first hasher.
    #[must_use]
    pub fn hash_a(&self) -> &A {
        &self.hash_a
    }

    /// The second hasher.
    #[must_use]
    pub fn hash_b(&self) -> &B {
        &self.hash_b
    }
}

impl<A, B> MembershipFilter for BloomFilter<A, B>
where
    A: BloomHasher,
    B: BloomHasher,
{
    #[inline]
    fn insert(&mut self, data: &[u8]) {
        BloomFilter::insert(self, data);
    }

    #[inline]
    fn contains(&self, data: &[u8]) -> bool {
        BloomFilter::contains(self, data)
    }

    fn size(&self) -> u64 {
        BloomFilter::size(self)
    }

    fn hash_rounds(&self) -> u8 {
        BloomFilter::hash_rounds(self)
    }
}

impl<A, B> fmt::Debug for BloomFilter<A, B>
where
    A: BloomHasher,
    B: BloomHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("size", &self.size())
            .field("hash_rounds", &self.hash_rounds)
            .field("words", &self.word_count())
            .field("ones", &self.count_ones())
            .field("hash_a", &self.hash_a.name())
            .field("hash_b", &self.hash_b.name())
            .finish()
    }
}
