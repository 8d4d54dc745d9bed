//! Seedable random sources.
//!
//! Table construction only needs two primitives from a source: a uniform
//! integer in `[0, bound)` and a uniform float in `[-1, 1)`. [`Random`] is the
//! capability the noise code is written against; [`xoroshiro::Xoroshiro`] is
//! the default implementation and [`legacy_random::LegacyRandom`] a smaller
//! LCG alternative.

pub mod legacy_random;
pub mod xoroshiro;

/// A deterministic source of uniformly distributed values.
pub trait Random {
    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Uniform integer in `[0, bound)`.
    ///
    /// `bound` must be positive. Implementations may return garbage otherwise;
    /// callers in this crate validate the result.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform float in `[-1, 1)`.
    fn next_signed_f64(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }

    /// Skip `count` raw draws.
    fn consume_count(&mut self, count: u32) {
        for _ in 0..count {
            self.next_u64();
        }
    }
}

/// Scale factor turning a 53-bit integer into a float in `[0, 1)`.
pub(crate) const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;
