//! Behavioural properties of the filter core.

use dualbloom::hash::{BloomHasher, Fnv1_64, Fnv1a64};
use dualbloom::{BloomFilter, FilterParams, MembershipFilter};
use proptest::prelude::*;

fn keys(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("key-{}", i).into_bytes())
        .collect()
}

#[test]
fn test_no_false_negatives() {
    let mut filter = BloomFilter::from_estimate(5_000, 0.01).unwrap();
    let keys = keys(5_000);
    for key in &keys {
        filter.insert(key);
    }
    for key in &keys {
        assert!(filter.contains(key), "false negative for {:?}", key);
    }
}

#[test]
fn test_no_false_negatives_past_capacity() {
    // Overfilled filters lose precision, never recall
    let mut filter = BloomFilter::from_estimate(100, 0.01).unwrap();
    let keys = keys(5_000);
    filter.insert_batch(&keys);
    assert!(filter.contains_all(&keys));
}

#[test]
fn test_idempotent_insert() {
    let mut once = BloomFilter::new(2048, 6).unwrap();
    let mut many = BloomFilter::new(2048, 6).unwrap();
    once.insert(b"repeat");
    for _ in 0..10 {
        many.insert(b"repeat");
    }
    assert_eq!(once.count_ones(), many.count_ones());
    for key in keys(200) {
        assert_eq!(once.contains(&key), many.contains(&key));
    }
}

#[test]
fn test_deterministic_across_instances() {
    let mut a = BloomFilter::from_estimate(1000, 0.01).unwrap();
    let mut b = BloomFilter::from_estimate(1000, 0.01).unwrap();
    for key in keys(500) {
        a.insert(&key);
        b.insert(&key);
    }
    for i in 0..2000 {
        let query = format!("query-{}", i);
        assert_eq!(a.contains(query.as_bytes()), b.contains(query.as_bytes()));
    }
}

#[test]
fn test_monotonic() {
    let mut filter = BloomFilter::from_estimate(1000, 0.01).unwrap();
    let queries: Vec<Vec<u8>> = (0..500)
        .map(|i| format!("query-{}", i).into_bytes())
        .collect();
    let mut seen = vec![false; queries.len()];

    for key in keys(1000) {
        filter.insert(&key);
        for (query, was_found) in queries.iter().zip(seen.iter_mut()) {
            let found = filter.contains(query);
            assert!(found || !*was_found, "{:?} became absent", query);
            *was_found |= found;
        }
    }
}

#[test]
fn test_empty_filter_rejects_everything() {
    let filter = BloomFilter::from_estimate(1000, 0.01).unwrap();
    for key in keys(10_000) {
        assert!(!filter.contains(&key));
    }
    assert!(!filter.contains(b""));
}

#[test]
fn test_positions_independent_of_history() {
    let mut filter = BloomFilter::from_estimate(1000, 0.01).unwrap();
    let before: Vec<u64> = filter.bit_positions(b"stable").collect();
    filter.insert_batch(keys(300));
    let after: Vec<u64> = filter.bit_positions(b"stable").collect();
    assert_eq!(before, after);
}

#[test]
fn test_estimated_count_tracks_inserts() {
    let mut filter = BloomFilter::from_estimate(10_000, 0.01).unwrap();
    filter.insert_batch(keys(5_000));
    let estimate = filter.estimated_item_count();
    assert!(
        (4_500..=5_500).contains(&estimate),
        "estimate {} too far from 5000",
        estimate
    );
}

#[test]
fn test_closure_hashers() {
    let seed = 0x5bd1_e995u64;
    let mixed = move |bytes: &[u8]| Fnv1_64.hash_bytes(bytes) ^ seed;
    let mut filter =
        BloomFilter::from_estimate_with_hashers(1000, 0.01, Fnv1a64, mixed).unwrap();
    filter.insert_batch(keys(1000));
    assert!(filter.contains_all(keys(1000)));
}

proptest! {
    #[test]
    fn prop_inserted_keys_are_found(
        items in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 1..200),
        size in 1u64..10_000,
        rounds in 1u8..16,
    ) {
        let mut filter = BloomFilter::new(size, rounds).unwrap();
        for item in &items {
            filter.insert(item);
        }
        for item in &items {
            prop_assert!(filter.contains(item));
        }
    }

    #[test]
    fn prop_insert_is_idempotent(
        item in prop::collection::vec(any::<u8>(), 0..128),
        rounds in 1u8..32,
    ) {
        let mut once = BloomFilter::new(4096, rounds).unwrap();
        let mut twice = BloomFilter::new(4096, rounds).unwrap();
        once.insert(&item);
        twice.insert(&item);
        twice.insert(&item);
        prop_assert_eq!(once.count_ones(), twice.count_ones());
    }

    #[test]
    fn prop_positions_in_range_and_deterministic(
        item in prop::collection::vec(any::<u8>(), 0..128),
        size in 1u64..1_000_000,
        rounds in 1u8..=255,
    ) {
        let filter = BloomFilter::new(size, rounds).unwrap();
        let first: Vec<u64> = filter.bit_positions(&item).collect();
        let second: Vec<u64> = filter.bit_positions(&item).collect();
        prop_assert_eq!(first.len(), rounds as usize);
        prop_assert!(first.iter().all(|&p| p < size));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_estimate_sizing_is_valid(
        items in 1u64..1_000_000,
        fp_rate in 0.0001f64..0.5,
    ) {
        let params = FilterParams::from_estimate(items, fp_rate).unwrap();
        prop_assert!(params.size >= items);
        prop_assert!(params.hash_rounds >= 1);
        let expected = params.expected_fp_rate(items);
        prop_assert!(expected <= fp_rate * 1.25, "expected {} > target {}", expected, fp_rate);
    }
}
