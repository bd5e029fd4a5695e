//! Bit-position derivation from two base hashes.
//!
//! # Double Hashing (Kirsch & Mitzenmacher 2006)
//!
//! For `k` hash rounds derived from two independent hashes `h1` and `h2`:
//!
//! ```text
//! step = h2 | 1
//! p_i  = (h1 + i * step) mod m     for i in 0..k
//! ```
//!
//! Arithmetic wraps at 64 bits before the reduction. Positions are not
//! guaranteed distinct; a repeated position only costs a little capacity.
//!
//! The step is forced odd. An even step on an even `m` keeps every position on
//! the parity of `h1`, and hashers whose low bits agree (FNV-1 and FNV-1a
//! always share the lowest bit) would then confine a key to half the array.
//!
//! Positions are produced lazily so a query can stop at the first unset bit
//! without computing or allocating the rest.
//!
//! # References
//!
//! - Kirsch, A., & Mitzenmacher, M. (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

use std::iter::FusedIterator;

/// Double hashing with an odd step: `p_i = (h1 + i * (h2 | 1)) mod m`.
///
/// # Examples
///
/// ```
/// use dualbloom::hash::DoubleHashing;
///
/// let positions: Vec<u64> = DoubleHashing::positions(10, 7, 4, 100).collect();
/// assert_eq!(positions, vec![10, 17, 24, 31]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleHashing;

impl DoubleHashing {
    /// Iterate over the `rounds` bit positions for base hashes `h1`, `h2` in a
    /// bit array of `size` bits.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`. Filters reject a zero size at construction.
    #[inline]
    #[must_use]
    pub fn positions(h1: u64, h2: u64, rounds: u8, size: u64) -> BitPositions {
        assert!(size > 0, "bit array size must be non-zero");
        BitPositions {
            h1,
            h2,
            round: 0,
            rounds,
            size,
        }
    }

    /// Position for a single round.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    #[inline]
    #[must_use]
    pub fn position(h1: u64, h2: u64, round: u8, size: u64) -> u64 {
        assert!(size > 0, "bit array size must be non-zero");
        h1.wrapping_add(u64::from(round).wrapping_mul(h2 | 1)) % size
    }
}

/// Lazy iterator over the positions derived for one key.
#[derive(Debug, Clone)]
pub struct BitPositions {
    h1: u64,
    h2: u64,
    round: u8,
    rounds: u8,
    size: u64,
}

impl Iterator for BitPositions {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.round >= self.rounds {
            return None;
        }
        let position = DoubleHashing::position(self.h1, self.h2, self.round, self.size);
        self.round += 1;
        Some(position)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.rounds - self.round);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitPositions {}

impl FusedIterator for BitPositions {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_linear_combination() {
        let positions: Vec<u64> = DoubleHashing::positions(3, 5, 5, 1000).collect();
        assert_eq!(positions, vec![3, 8, 13, 18, 23]);
    }

    #[test]
    fn test_positions_reduced_modulo_size() {
        let positions: Vec<u64> = DoubleHashing::positions(95, 11, 3, 100).collect();
        assert_eq!(positions, vec![95, 6, 17]);
    }

    #[test]
    fn test_positions_wrap_at_64_bits() {
        // h1 + step overflows; wrapping keeps the result well defined
        let h1 = u64::MAX;
        let h2 = 3;
        let positions: Vec<u64> = DoubleHashing::positions(h1, h2, 2, 1 << 32).collect();
        assert_eq!(positions[0], u64::MAX % (1 << 32));
        assert_eq!(positions[1], 2);
    }

    #[test]
    fn test_positions_count_and_bounds() {
        let positions: Vec<u64> =
            DoubleHashing::positions(0x1234_5678_9abc_def0, 0xfedc_ba98_7654_3210, 255, 977)
                .collect();
        assert_eq!(positions.len(), 255);
        assert!(positions.iter().all(|&p| p < 977));
    }

    #[test]
    fn test_step_equal_to_size_repeats_position() {
        // Collisions among rounds are accepted
        let positions: Vec<u64> = DoubleHashing::positions(42, 101, 4, 101).collect();
        assert_eq!(positions, vec![42; 4]);
    }

    #[test]
    fn test_even_second_hash_is_made_odd() {
        // An even step would keep every round on the parity of h1
        let positions: Vec<u64> = DoubleHashing::positions(42, 0, 4, 100).collect();
        assert_eq!(positions, vec![42, 43, 44, 45]);

        let even: Vec<u64> = DoubleHashing::positions(10, 20, 4, 1000).collect();
        let odd: Vec<u64> = DoubleHashing::positions(10, 21, 4, 1000).collect();
        assert_eq!(even, odd);
        assert!(even.iter().any(|p| p % 2 == 1));
    }

    #[test]
    fn test_position_matches_iterator() {
        let positions: Vec<u64> = DoubleHashing::positions(7, 12, 6, 97).collect();
        let single: Vec<u64> = (0..6).map(|i| DoubleHashing::position(7, 12, i, 97)).collect();
        assert_eq!(positions, single);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_size_panics() {
        let _ = DoubleHashing::positions(1, 2, 3, 0);
    }

    #[test]
    fn test_exact_size_and_fused() {
        let mut iter = DoubleHashing::positions(1, 1, 3, 10);
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next();
        iter.next();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_single_bit_filter() {
        let positions: Vec<u64> = DoubleHashing::positions(u64::MAX, u64::MAX, 7, 1).collect();
        assert_eq!(positions, vec![0; 7]);
    }
}
