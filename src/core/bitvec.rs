//! Packed, fixed-size, set-only bit array.
//!
//! # Memory Layout
//!
//! Bits are packed into 64-bit words, least significant bit first:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! Word 2: [bit 128][bit 129]...[bit 191]
//! ```
//!
//! Position `p` lives in word `p / 64` at offset `p % 64`. The word count is
//! fixed at `ceil(len / 64)` for the array's lifetime.
//!
//! # Monotonicity
//!
//! There is no operation that clears a bit. Once set, a bit stays set, which
//! is what guarantees a Bloom filter never produces a false negative.
//!
//! # Thread Safety
//!
//! `set` takes `&mut self`; the array carries no synchronization of its own.
//! Share it across threads through [`SyncBloomFilter`](crate::sync::SyncBloomFilter).
//!
//! # Examples
//!
//! ```
//! use dualbloom::core::bitvec::BitVec;
//!
//! let mut bv = BitVec::new(100)?;
//! bv.set(42);
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 1);
//! assert_eq!(bv.word_count(), 2);
//! # Ok::<(), dualbloom::BloomError>(())
//! ```

use crate::error::{BloomError, Result};

/// Bits per storage word.
pub const WORD_BITS: u64 = 64;

/// Fixed-size bit array backed by `Box<[u64]>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    words: Box<[u64]>,
    len: u64,
}

impl BitVec {
    /// Allocate `num_bits` zeroed bits in `ceil(num_bits / 64)` words.
    ///
    /// # Errors
    ///
    /// [`BloomError::InvalidSize`] if `num_bits` is 0 or the word count does
    /// not fit in `usize` on this platform.
    pub fn new(num_bits: u64) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomError::invalid_size(num_bits));
        }

        let word_count = usize::try_from(num_bits.div_ceil(WORD_BITS))
            .map_err(|_| BloomError::invalid_size(num_bits))?;

        Ok(Self {
            words: vec![0u64; word_count].into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Always `false`: construction rejects zero-length arrays.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of 64-bit storage words.
    #[must_use]
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Set bit `index` to 1. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, matching slice indexing.
    #[inline]
    pub fn set(&mut self, index: u64) {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );
        let (word, mask) = Self::locate(index);
        self.words[word] |= mask;
    }

    /// Test bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: u64) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );
        let (word, mask) = Self::locate(index);
        self.words[word] & mask != 0
    }

    /// Number of set bits (uses the POPCNT instruction where available).
    #[must_use]
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Heap bytes used by the word storage.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }

    /// Raw storage words.
    #[must_use]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    #[inline]
    fn locate(index: u64) -> (usize, u64) {
        // index < len and the word count fits usize, so the cast is lossless
        let word = (index / WORD_BITS) as usize;
        let mask = 1u64 << (index % WORD_BITS);
        (word, mask)
    }
}
