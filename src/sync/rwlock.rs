//! Reader-writer locked Bloom filter.
//!
//! # Locking
//!
//! One `parking_lot::RwLock` guards the whole core:
//!
//! - `insert` takes the write lock (exclusive)
//! - `contains` and every accessor take the read lock (shared)
//!
//! Guards are scoped, so the lock is released on every exit path. Locks are
//! never upgraded, downgraded or re-entered. `parking_lot` locks do not
//! poison: a panicking thread simply releases its guard.
//!
//! # Visibility
//!
//! An `insert` that returned before a `contains` began is always observed by
//! it. Concurrent pairs are linearized by the lock in some order.
//!
//! # Examples
//!
//! ```
//! use dualbloom::sync::SyncBloomFilter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let filter = Arc::new(SyncBloomFilter::from_estimate(10_000, 0.01)?);
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let filter = Arc::clone(&filter);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 filter.insert(format!("{}-{}", t, i).as_bytes());
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert!(filter.contains(b"3-99"));
//! # Ok::<(), dualbloom::BloomError>(())
//! ```

use crate::core::filter::SharedMembershipFilter;
use crate::core::params::FilterParams;
use crate::core::BloomFilter;
use crate::error::Result;
use crate::hash::{BloomHasher, DefaultHashA, DefaultHashB};
use parking_lot::RwLock;
use std::fmt;

/// A [`BloomFilter`] behind a reader-writer lock.
///
/// Share it as `Arc<SyncBloomFilter>`; every method takes `&self`.
pub struct SyncBloomFilter<A = DefaultHashA, B = DefaultHashB> {
    inner: RwLock<BloomFilter<A, B>>,
}

impl SyncBloomFilter {
    /// Locked counterpart of [`BloomFilter::new`].
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn new(size: u64, hash_rounds: u8) -> Result<Self> {
        BloomFilter::new(size, hash_rounds).map(Self::from_filter)
    }

    /// Locked counterpart of [`BloomFilter::from_estimate`].
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::from_estimate`].
    pub fn from_estimate(expected_items: u64, fp_rate: f64) -> Result<Self> {
        BloomFilter::from_estimate(expected_items, fp_rate).map(Self::from_filter)
    }
}

impl<A, B> SyncBloomFilter<A, B>
where
    A: BloomHasher,
    B: BloomHasher,
{
    /// Locked counterpart of [`BloomFilter::with_hashers`].
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::with_hashers`].
    pub fn with_hashers(size: u64, hash_rounds: u8, hash_a: A, hash_b: B) -> Result<Self> {
        BloomFilter::with_hashers(size, hash_rounds, hash_a, hash_b).map(Self::from_filter)
    }

    /// Locked counterpart of [`BloomFilter::from_estimate_with_hashers`].
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::from_estimate_with_hashers`].
    pub fn from_estimate_with_hashers(
        expected_items: u64,
        fp_rate: f64,
        hash_a: A,
        hash_b: B,
    ) -> Result<Self> {
        BloomFilter::from_estimate_with_hashers(expected_items, fp_rate, hash_a, hash_b)
            .map(Self::from_filter)
    }

    /// Take ownership of an existing core.
    #[must_use]
    pub fn from_filter(filter: BloomFilter<A, B>) -> Self {
        Self {
            inner: RwLock::new(filter),
        }
    }

    /// Release the core. No lock is needed since `self` is owned.
    #[must_use]
    pub fn into_inner(self) -> BloomFilter<A, B> {
        self.inner.into_inner()
    }

    /// Insert `data` under the write lock.
    pub fn insert(&self, data: &[u8]) {
        #[cfg(feature = "trace")]
        tracing::trace!(len = data.len(), "insert");

        self.inner.write().insert(data);
    }

    /// Query `data` under the read lock.
    #[must_use]
    pub fn contains(&self, data: &[u8]) -> bool {
        let found = self.inner.read().contains(data);

        #[cfg(feature = "trace")]
        tracing::trace!(len = data.len(), found, "contains");

        found
    }

    /// Insert every item while holding the write lock once.
    pub fn insert_batch<I>(&self, items: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let items = items.into_iter();

        #[cfg(feature = "trace")]
        tracing::trace!(size_hint = items.size_hint().0, "insert_batch");

        let mut guard = self.inner.write();
        for item in items {
            guard.insert(item.as_ref());
        }
    }

    /// Run `f` against the core under a single read lock.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualbloom::sync::SyncBloomFilter;
    ///
    /// let filter = SyncBloomFilter::new(1024, 3)?;
    /// filter.insert(b"x");
    /// let (ones, hit) = filter.with_read(|f| (f.count_ones(), f.contains(b"x")));
    /// assert!(ones > 0 && hit);
    /// # Ok::<(), dualbloom::BloomError>(())
    /// ```
    pub fn with_read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&BloomFilter<A, B>) -> R,
    {
        f(&self.inner.read())
    }

    /// Total addressable bits.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.inner.read().size()
    }

    /// Positions derived per key.
    #[must_use]
    pub fn hash_rounds(&self) -> u8 {
        self.inner.read().hash_rounds()
    }

    /// The filter's `(size, hash_rounds)`.
    #[must_use]
    pub fn params(&self) -> FilterParams {
        self.inner.read().params()
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> u64 {
        self.inner.read().count_ones()
    }

    /// Fraction of bits set.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.inner.read().fill_ratio()
    }

    /// See [`BloomFilter::estimated_item_count`].
    #[must_use]
    pub fn estimated_item_count(&self) -> u64 {
        self.inner.read().estimated_item_count()
    }
}

impl<A, B> SharedMembershipFilter for SyncBloomFilter<A, B>
where
    A: BloomHasher,
    B: BloomHasher,
{
    fn insert(&self, data: &[u8]) {
        SyncBloomFilter::insert(self, data);
    }

    fn contains(&self, data: &[u8]) -> bool {
        SyncBloomFilter::contains(self, data)
    }

    fn size(&self) -> u64 {
        SyncBloomFilter::size(self)
    }

    fn hash_rounds(&self) -> u8 {
        SyncBloomFilter::hash_rounds(self)
    }

    fn insert_batch<I>(&self, items: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        SyncBloomFilter::insert_batch(self, items);
    }
}

impl<A, B> From<BloomFilter<A, B>> for SyncBloomFilter<A, B>
where
    A: BloomHasher,
    B: BloomHasher,
{
    fn from(filter: BloomFilter<A, B>) -> Self {
        Self::from_filter(filter)
    }
}

impl<A, B> Clone for SyncBloomFilter<A, B>
where
    A: Clone,
    B: Clone,
{
    /// Snapshot the core under the read lock into a new, independent lock.
    fn clone(&self) -> Self {
        let snapshot = self.inner.read().clone();
        Self {
            inner: RwLock::new(snapshot),
        }
    }
}

impl<A, B> fmt::Debug for SyncBloomFilter<A, B>
where
    A: BloomHasher,
    B: BloomHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncBloomFilter")
            .field("inner", &*self.inner.read())
            .finish()
    }
}

impl<A, B> fmt::Display for SyncBloomFilter<A, B>
where
    A: BloomHasher,
    B: BloomHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.read();
        write!(
            f,
            "SyncBloomFilter({} bits, k={}, fill={:.1}%)",
            guard.size(),
            guard.hash_rounds(),
            guard.fill_ratio() * 100.0
        )
    }
}
