//! Trait definitions shared by the filter kinds.
//!
//! # Trait Hierarchy
//!
//! ```text
//! MembershipFilter        - Single-threaded (&mut self insert)
//! SharedMembershipFilter  - Internally synchronized (&self insert)
//! ```
//!
//! [`BloomFilter`](crate::core::BloomFilter) implements `MembershipFilter`;
//! [`SyncBloomFilter`](crate::sync::SyncBloomFilter) implements
//! `SharedMembershipFilter`. Keys are byte slices; batch helpers accept
//! anything that yields `AsRef<[u8]>` items.

/// A Bloom filter mutated through exclusive access.
///
/// # Examples
///
/// ```
/// use dualbloom::core::{BloomFilter, MembershipFilter};
///
/// fn load<F: MembershipFilter>(filter: &mut F, keys: &[&str]) {
///     filter.insert_batch(keys.iter().map(|k| k.as_bytes()));
/// }
///
/// let mut filter = BloomFilter::from_estimate(100, 0.01)?;
/// load(&mut filter, &["alpha", "beta"]);
/// assert!(filter.contains_all(["alpha", "beta"]));
/// # Ok::<(), dualbloom::BloomError>(())
/// ```
pub trait MembershipFilter: Send + Sync {
    /// Set every derived bit position of `data`.
    fn insert(&mut self, data: &[u8]);

    /// `false` if `data` was definitely never inserted; `true` if it probably was.
    fn contains(&self, data: &[u8]) -> bool;

    /// Total addressable bits.
    fn size(&self) -> u64;

    /// Positions derived per key.
    fn hash_rounds(&self) -> u8;

    /// Insert every item of `items`.
    fn insert_batch<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for item in items {
            self.insert(item.as_ref());
        }
    }

    /// `true` if every item is (probably) present. Stops at the first miss.
    fn contains_all<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        items.into_iter().all(|item| self.contains(item.as_ref()))
    }

    /// `true` if any item is (probably) present. Stops at the first hit.
    fn contains_any<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        items.into_iter().any(|item| self.contains(item.as_ref()))
    }
}

/// A Bloom filter that synchronizes internally, so every method takes `&self`.
///
/// Implementors are shared as `Arc<F>` without an external lock.
pub trait SharedMembershipFilter: Send + Sync {
    /// Set every derived bit position of `data`.
    fn insert(&self, data: &[u8]);

    /// `false` if `data` was definitely never inserted; `true` if it probably was.
    fn contains(&self, data: &[u8]) -> bool;

    /// Total addressable bits.
    fn size(&self) -> u64;

    /// Positions derived per key.
    fn hash_rounds(&self) -> u8;

    /// Insert every item of `items`.
    fn insert_batch<I>(&self, items: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for item in items {
            self.insert(item.as_ref());
        }
    }

    /// Query every item, preserving order.
    fn contains_batch<I>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        items
            .into_iter()
            .map(|item| self.contains(item.as_ref()))
            .collect()
    }

    /// `true` if every item is (probably) present.
    fn contains_all<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        items.into_iter().all(|item| self.contains(item.as_ref()))
    }

    /// `true` if any item is (probably) present.
    fn contains_any<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        items.into_iter().any(|item| self.contains(item.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Exact set, to check the provided methods independently of hashing
    struct ExactSet(HashSet<Vec<u8>>);

    impl MembershipFilter for ExactSet {
        fn insert(&mut self, data: &[u8]) {
            self.0.insert(data.to_vec());
        }

        fn contains(&self, data: &[u8]) -> bool {
            self.0.contains(data)
        }

        fn size(&self) -> u64 {
            0
        }

        fn hash_rounds(&self) -> u8 {
            1
        }
    }

    #[test]
    fn test_insert_batch_default() {
        let mut set = ExactSet(HashSet::new());
        set.insert_batch(vec![b"a".to_vec(), b"b".to_vec()]);
        assert!(set.contains(b"a"));
        assert!(set.contains(b"b"));
    }

    #[test]
    fn test_contains_all_and_any() {
        let mut set = ExactSet(HashSet::new());
        set.insert_batch(["x", "y"]);

        assert!(set.contains_all(["x", "y"]));
        assert!(!set.contains_all(["x", "z"]));
        assert!(set.contains_any(["z", "y"]));
        assert!(!set.contains_any(["z", "w"]));
        assert!(set.contains_all(Vec::<&[u8]>::new()));
        assert!(!set.contains_any(Vec::<&[u8]>::new()));
    }
}
