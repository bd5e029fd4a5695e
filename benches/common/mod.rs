//! Shared data generation for benchmarks.
//!
//! Every generator is seeded so runs are comparable.

#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Filter capacities exercised by the size benchmarks.
pub const SIZES: &[u64] = &[1_000, 10_000, 100_000, 1_000_000];

/// False positive targets exercised by the rate benchmarks.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

/// Alphanumeric keys of `len` bytes.
pub fn generate_keys(count: usize, len: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (&mut rng).sample_iter(Alphanumeric).take(len).collect())
        .collect()
}

/// Random 16-byte keys.
pub fn generate_uuids(count: usize, seed: u64) -> Vec<[u8; 16]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen()).collect()
}
