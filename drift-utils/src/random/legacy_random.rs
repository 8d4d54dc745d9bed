//! 48-bit linear congruential random source.

use crate::random::{DOUBLE_UNIT, Random};

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// Classic 48-bit LCG.
///
/// Weaker than [`super::xoroshiro::Xoroshiro`] but cheap and fully
/// reproducible. Useful when a small, well-known sequence is wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRandom {
    seed: u64,
}

impl LegacyRandom {
    /// Create a generator from a seed. Only the low 48 bits are used.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance the state and return the top `bits` bits (at most 32).
    #[inline]
    fn next_bits(&mut self, bits: u32) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.seed >> (48 - bits)) as i64 as i32
    }
}

impl Random for LegacyRandom {
    fn next_u64(&mut self) -> u64 {
        let high = i64::from(self.next_bits(32)) << 32;
        let low = i64::from(self.next_bits(32));
        high.wrapping_add(low) as u64
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }
        if bound & (bound - 1) == 0 {
            return ((i64::from(bound) * i64::from(self.next_bits(31))) >> 31) as i32;
        }
        loop {
            let bits = self.next_bits(31);
            let value = bits % bound;
            // Reject the partial block at the top of the range.
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next_bits(26)) << 27;
        let low = i64::from(self.next_bits(27));
        (high + low) as f64 * DOUBLE_UNIT
    }
}
