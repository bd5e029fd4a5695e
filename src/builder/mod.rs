//! Builder pattern for filter construction.
//!
//! # Type-State Pattern
//!
//! [`BloomFilterBuilder`] enforces a complete sizing at compile time. Either
//! `expected_items` + `false_positive_rate` or `bits` + `hash_rounds` must be
//! given before `build` exists.
//!
//! # Error Handling
//!
//! - **Compile-time errors**: missing sizing parameters
//! - **Runtime errors**: out-of-range values, reported by `build`
//!
//! # Example
//!
//! ```
//! use dualbloom::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()?;
//! assert!(filter.is_empty());
//! # Ok::<(), dualbloom::BloomError>(())
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod standard;

pub use standard::BloomFilterBuilder;
