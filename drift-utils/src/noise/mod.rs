//! 2D gradient noise.
//!
//! - [`GradientNoise2D`] - improved Perlin noise over a seeded permutation
//!   table and a table of random unit gradients
//! - [`NoiseConfig`] - table size and shuffle behavior
//! - [`NoiseError`] - construction failures

mod gradient_noise;
mod tables;

use thiserror::Error;

pub use gradient_noise::GradientNoise2D;

/// Default number of entries in both the permutation and gradient tables.
pub const DEFAULT_TABLE_SIZE: usize = 256;

/// Maximum candidates drawn per gradient slot before giving up.
pub(crate) const GRADIENT_ATTEMPTS: u32 = 1024;

/// An error that can occur while building noise tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// The table size or the random source cannot produce a valid table pair.
    #[error("Invalid noise configuration: {0}")]
    InvalidConfiguration(String),
}

/// How the permutation table is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    /// Swap each slot with a partner drawn from the whole table.
    ///
    /// This is not a uniform shuffle (some permutations are more likely than
    /// others) but it is the historical behavior and keeps existing seeds
    /// producing the same fields.
    #[default]
    FullRange,
    /// Swap slot `i` with a partner drawn from `[i, N)` (Fisher-Yates).
    ///
    /// Produces every permutation with equal probability.
    Shrinking,
}

/// Table construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseConfig {
    /// Entries in each table. Must be in `1..=i32::MAX`.
    pub table_size: usize,
    /// Shuffle used for the permutation table.
    pub shuffle: ShuffleMode,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            shuffle: ShuffleMode::default(),
        }
    }
}

impl NoiseConfig {
    /// Check the table size and return it as a draw bound.
    pub fn validate(&self) -> Result<i32, NoiseError> {
        if self.table_size == 0 {
            return Err(NoiseError::InvalidConfiguration(
                "table size must be positive".to_owned(),
            ));
        }
        i32::try_from(self.table_size).map_err(|_| {
            NoiseError::InvalidConfiguration(format!(
                "table size {} exceeds {}",
                self.table_size,
                i32::MAX
            ))
        })
    }
}
