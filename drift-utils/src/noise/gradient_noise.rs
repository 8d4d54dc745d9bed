//! Improved Perlin noise in 2D with random unit gradients.
//!
//! Unlike the fixed 12-direction gradient set of classic Perlin noise, each
//! lattice corner here hashes into a table of unit vectors sampled uniformly
//! from the unit circle, and corner contributions are weighted by a separable
//! quintic falloff instead of being lerped.

use glam::DVec2;

use crate::math::{dropoff, floor, wrap_index};
use crate::noise::tables::Tables;
use crate::noise::{NoiseConfig, NoiseError};
use crate::random::Random;
use crate::random::xoroshiro::Xoroshiro;

/// Corner offsets of a lattice cell, in evaluation order.
const CORNERS: [(i64, i64); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Deterministic 2D gradient noise.
///
/// Owns one permutation table and one gradient table, always built together.
/// Evaluation is read-only, so a `GradientNoise2D` can be shared across
/// threads freely; replacing the tables requires `&mut self`.
#[derive(Debug, Clone)]
pub struct GradientNoise2D {
    tables: Tables,
    config: NoiseConfig,
}

impl GradientNoise2D {
    /// Build a generator from an injected random source.
    ///
    /// The permutation is drawn first, then the gradients, so the same source
    /// state always yields the same field.
    pub fn new<R: Random + ?Sized>(
        random: &mut R,
        config: NoiseConfig,
    ) -> Result<Self, NoiseError> {
        let tables = Tables::build(random, &config)?;
        Ok(Self { tables, config })
    }

    /// Build a generator with the default configuration from a seed.
    pub fn from_seed(seed: u64) -> Result<Self, NoiseError> {
        Self::new(&mut Xoroshiro::from_seed(seed), NoiseConfig::default())
    }

    /// Replace both tables with a fresh pair drawn from `random`.
    ///
    /// On error the current tables are kept untouched.
    pub fn reseed<R: Random + ?Sized>(&mut self, random: &mut R) -> Result<(), NoiseError> {
        self.tables = Tables::build(random, &self.config)?;
        Ok(())
    }

    /// Number of entries in each table.
    #[must_use]
    pub fn table_size(&self) -> usize {
        self.tables.permutation.len()
    }

    /// The configuration the tables were built with.
    #[must_use]
    pub const fn config(&self) -> NoiseConfig {
        self.config
    }

    /// Gradient for a lattice corner, hashing x then y through the
    /// permutation table.
    #[inline]
    fn gradient_at(&self, corner_x: i64, corner_y: i64) -> DVec2 {
        let size = self.table_size();
        let first = self.tables.permutation.get(corner_x);
        let second = (first + wrap_index(corner_y, size)) % size;
        let second = self.tables.permutation.get(second as i64);
        self.tables.gradients.get(second)
    }

    /// Sample the noise field at `(x, y)`.
    ///
    /// Returns a value in `[-1, 1]`. Integer lattice points always evaluate to
    /// `0`. Any finite input is accepted; coordinates beyond the `i64` range
    /// reuse the hash of the outermost lattice cell.
    ///
    /// If either coordinate is `NaN` or infinite the result is `NaN`.
    #[must_use]
    pub fn get_value(&self, x: f64, y: f64) -> f64 {
        if !x.is_finite() || !y.is_finite() {
            return f64::NAN;
        }

        let cell_x = floor(x);
        let cell_y = floor(y);
        // Exact in f64, and stays in [0, 1) where the lattice saturates.
        let frac = DVec2::new(x - x.floor(), y - y.floor());

        let mut total = 0.0;
        for (dx, dy) in CORNERS {
            let uv = frac - DVec2::new(dx as f64, dy as f64);
            let gradient = self.gradient_at(cell_x.wrapping_add(dx), cell_y.wrapping_add(dy));
            total += dropoff(uv.x) * dropoff(uv.y) * gradient.dot(uv);
        }

        total.clamp(-1.0, 1.0)
    }

    #[cfg(test)]
    pub(crate) const fn tables(&self) -> &Tables {
        &self.tables
    }
}
