//! Core types of the filter.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── bitvec.rs    - Packed set-only bit array
//! ├── bloom.rs     - BloomFilter, the single-threaded filter
//! ├── filter.rs    - Membership traits
//! ├── params.rs    - Sizing formulas and FilterParams
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Concurrency Architecture
//!
//! ## Single-Threaded (`MembershipFilter`)
//! - `insert` requires `&mut self`
//! - No synchronization overhead
//! - Implemented by [`BloomFilter`]
//!
//! ## Internally Locked (`SharedMembershipFilter`)
//! - Every method takes `&self`
//! - Implemented by [`SyncBloomFilter`](crate::sync::SyncBloomFilter)
//! - Usage: `Arc<SyncBloomFilter>`, no outer lock needed

pub mod bitvec;
pub mod bloom;
pub mod filter;
pub mod params;

pub use bitvec::BitVec;
pub use bloom::BloomFilter;
pub use filter::{MembershipFilter, SharedMembershipFilter};
pub use params::{
    bits_per_element, expected_fp_rate, optimal_bit_count, optimal_hash_rounds, FilterParams,
};
