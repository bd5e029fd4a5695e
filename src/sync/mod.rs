//! Thread-safe Bloom filter.
//!
//! [`SyncBloomFilter`] wraps one [`BloomFilter`](crate::core::BloomFilter)
//! in a `parking_lot::RwLock` and implements
//! [`SharedMembershipFilter`](crate::core::SharedMembershipFilter): all
//! methods take `&self`, so the filter is shared as `Arc<SyncBloomFilter>`
//! without an outer `Mutex`.
//!
//! # Concurrency Model
//!
//! | Operation  | Lock   | Concurrent with        |
//! |------------|--------|------------------------|
//! | `insert`   | write  | nothing                |
//! | `contains` | read   | other reads            |
//! | accessors  | read   | other reads            |
//!
//! Reads scale with readers; writers serialize. For write-heavy workloads,
//! batch writes with [`SyncBloomFilter::insert_batch`], which holds the
//! write lock once for the whole batch.

mod rwlock;

pub use rwlock::SyncBloomFilter;
