//! Type-state builder for [`BloomFilter`] and [`SyncBloomFilter`].
//!
//! # Type-State Pattern
//!
//! The builder only exposes `build` once the sizing is complete. Two paths
//! lead there:
//!
//! ```text
//! Initial ─.expected_items(n)─▶ WithItems ─.false_positive_rate(p)─▶ Complete
//! Initial ─.bits(m)───────────▶ WithBits  ─.hash_rounds(k)──────────▶ Complete
//! ```
//!
//! `hash_a` and `hash_b` may be called in any state.
//!
//! # Examples
//!
//! ## Estimate Sizing
//!
//! ```
//! use dualbloom::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()?;
//!
//! assert_eq!(filter.size(), 95_851);
//! assert_eq!(filter.hash_rounds(), 7);
//! # Ok::<(), dualbloom::BloomError>(())
//! ```
//!
//! ## Explicit Sizing With a Custom Hasher
//!
//! ```
//! use dualbloom::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .bits(4096)
//!     .hash_rounds(3)
//!     .hash_b(|bytes: &[u8]| bytes.iter().fold(7u64, |h, &b| h.wrapping_mul(31) ^ u64::from(b)))
//!     .build_sync()?;
//!
//! filter.insert(b"k");
//! assert!(filter.contains(b"k"));
//! # Ok::<(), dualbloom::BloomError>(())
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use dualbloom::builder::BloomFilterBuilder;
//! use dualbloom::BloomError;
//!
//! let result = BloomFilterBuilder::new()
//!     .expected_items(0)
//!     .false_positive_rate(0.01)
//!     .build();
//!
//! assert_eq!(result.unwrap_err(), BloomError::InvalidItemCount { count: 0 });
//! ```

use crate::core::params::FilterParams;
use crate::core::BloomFilter;
use crate::error::Result;
use crate::hash::{BloomHasher, DefaultHashA, DefaultHashB};
use crate::sync::SyncBloomFilter;

/// Type-state marker: nothing set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Initial;

/// Type-state marker: expected item count set.
#[derive(Debug, Clone, Copy)]
pub struct WithItems {
    expected_items: u64,
}

/// Type-state marker: bit count set.
#[derive(Debug, Clone, Copy)]
pub struct WithBits {
    size: u64,
}

/// Type-state marker: sizing complete.
#[derive(Debug, Clone, Copy)]
pub struct Complete {
    sizing: Sizing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Sizing {
    Estimate { expected_items: u64, fp_rate: f64 },
    Explicit { size: u64, hash_rounds: u8 },
}

/// Builder for Bloom filters with type-state guarantees.
///
/// # Type Parameters
///
/// - `State`: [`Initial`], [`WithItems`], [`WithBits`] or [`Complete`]
/// - `A`, `B`: hashers for the two slots (default FNV-1a and FNV-1)
///
/// Nothing is validated until [`build`](BloomFilterBuilder::build),
/// [`build_sync`](BloomFilterBuilder::build_sync) or
/// [`params`](BloomFilterBuilder::params) runs.
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder<State, A = DefaultHashA, B = DefaultHashB> {
    state: State,
    hash_a: A,
    hash_b: B,
}

impl BloomFilterBuilder<Initial> {
    /// Create a builder with the default hashers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Initial,
            hash_a: DefaultHashA::default(),
            hash_b: DefaultHashB::default(),
        }
    }
}

impl Default for BloomFilterBuilder<Initial> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, A, B> BloomFilterBuilder<State, A, B> {
    /// Replace the first hasher.
    #[must_use]
    pub fn hash_a<H: BloomHasher>(self, hash_a: H) -> BloomFilterBuilder<State, H, B> {
        BloomFilterBuilder {
            state: self.state,
            hash_a,
            hash_b: self.hash_b,
        }
    }

    /// Replace the second hasher.
    #[must_use]
    pub fn hash_b<H: BloomHasher>(self, hash_b: H) -> BloomFilterBuilder<State, A, H> {
        BloomFilterBuilder {
            state: self.state,
            hash_a: self.hash_a,
            hash_b,
        }
    }

    fn with_state<S>(self, state: S) -> BloomFilterBuilder<S, A, B> {
        BloomFilterBuilder {
            state,
            hash_a: self.hash_a,
            hash_b: self.hash_b,
        }
    }
}

impl<A, B> BloomFilterBuilder<Initial, A, B> {
    /// Size from an expected item count. Must be > 0 at build time.
    #[must_use]
    pub fn expected_items(self, expected_items: u64) -> BloomFilterBuilder<WithItems, A, B> {
        self.with_state(WithItems { expected_items })
    }

    /// Size explicitly with `size` bits. Must be > 0 at build time.
    #[must_use]
    pub fn bits(self, size: u64) -> BloomFilterBuilder<WithBits, A, B> {
        self.with_state(WithBits { size })
    }
}

impl<A, B> BloomFilterBuilder<WithItems, A, B> {
    /// Target false positive rate, in (0, 1) at build time.
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> BloomFilterBuilder<Complete, A, B> {
        let expected_items = self.state.expected_items;
        self.with_state(Complete {
            sizing: Sizing::Estimate {
                expected_items,
                fp_rate,
            },
        })
    }
}

impl<A, B> BloomFilterBuilder<WithBits, A, B> {
    /// Positions derived per key. Must be > 0 at build time.
    #[must_use]
    pub fn hash_rounds(self, hash_rounds: u8) -> BloomFilterBuilder<Complete, A, B> {
        let size = self.state.size;
        self.with_state(Complete {
            sizing: Sizing::Explicit { size, hash_rounds },
        })
    }
}

impl<A, B> BloomFilterBuilder<Complete, A, B>
where
    A: BloomHasher,
    B: BloomHasher,
{
    /// Resolve and validate the sizing without allocating.
    ///
    /// # Errors
    ///
    /// The same errors the matching `BloomFilter` constructor returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualbloom::builder::BloomFilterBuilder;
    ///
    /// let params = BloomFilterBuilder::new()
    ///     .expected_items(1000)
    ///     .false_positive_rate(0.01)
    ///     .params()?;
    /// assert_eq!((params.size, params.hash_rounds), (9586, 7));
    /// # Ok::<(), dualbloom::BloomError>(())
    /// ```
    pub fn params(&self) -> Result<FilterParams> {
        match self.state.sizing {
            Sizing::Estimate {
                expected_items,
                fp_rate,
            } => FilterParams::from_estimate(expected_items, fp_rate),
            Sizing::Explicit { size, hash_rounds } => FilterParams::new(size, hash_rounds),
        }
    }

    /// Build a single-threaded filter.
    ///
    /// # Errors
    ///
    /// See [`params`](Self::params); also
    /// [`BloomError::InvalidSize`](crate::BloomError::InvalidSize) if the bit
    /// array cannot be allocated on this platform.
    pub fn build(self) -> Result<BloomFilter<A, B>> {
        let params = self.params()?;
        BloomFilter::from_params(params, self.hash_a, self.hash_b)
    }

    /// Build a filter behind a reader-writer lock.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_sync(self) -> Result<SyncBloomFilter<A, B>> {
        self.build().map(SyncBloomFilter::from_filter)
    }
}
