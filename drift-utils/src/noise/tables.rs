//! Permutation and gradient table construction.

use glam::DVec2;

use crate::math::wrap_index;
use crate::noise::{GRADIENT_ATTEMPTS, NoiseConfig, NoiseError, ShuffleMode};
use crate::random::Random;

/// A shuffle of `0..N`, read with wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PermutationTable(Box<[u32]>);

impl PermutationTable {
    /// Build a shuffled identity permutation.
    ///
    /// Consumes exactly one bounded draw per slot in either [`ShuffleMode`].
    pub(crate) fn build<R: Random + ?Sized>(
        random: &mut R,
        bound: i32,
        shuffle: ShuffleMode,
    ) -> Result<Self, NoiseError> {
        let size = bound as usize;
        let mut p: Vec<u32> = (0..bound as u32).collect();

        for i in 0..size {
            let partner = match shuffle {
                ShuffleMode::FullRange => checked_draw(random, bound)?,
                ShuffleMode::Shrinking => i + checked_draw(random, bound - i as i32)?,
            };
            p.swap(i, partner);
        }

        Ok(Self(p.into_boxed_slice()))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up any lattice coordinate, wrapping it into the table.
    #[inline]
    pub(crate) fn get(&self, index: i64) -> usize {
        self.0[wrap_index(index, self.0.len())] as usize
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

/// One random unit vector per slot.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GradientTable(Box<[DVec2]>);

impl GradientTable {
    /// Fill the table by rejection sampling the unit disk.
    ///
    /// Candidates outside the disk, and the zero vector, are redrawn.
    pub(crate) fn build<R: Random + ?Sized>(
        random: &mut R,
        bound: i32,
    ) -> Result<Self, NoiseError> {
        let size = bound as usize;
        let mut gradients = Vec::with_capacity(size);

        for slot in 0..size {
            gradients.push(sample_unit_vector(random, slot)?);
        }

        Ok(Self(gradients.into_boxed_slice()))
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> DVec2 {
        self.0[index % self.0.len()]
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[DVec2] {
        &self.0
    }
}

/// The permutation and gradient tables of one generation.
///
/// Only ever built together, so a reader always sees a matching pair.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tables {
    pub(crate) permutation: PermutationTable,
    pub(crate) gradients: GradientTable,
}

impl Tables {
    pub(crate) fn build<R: Random + ?Sized>(
        random: &mut R,
        config: &NoiseConfig,
    ) -> Result<Self, NoiseError> {
        let bound = config.validate()?;
        let permutation = PermutationTable::build(random, bound, config.shuffle)?;
        let gradients = GradientTable::build(random, bound)?;
        Ok(Self {
            permutation,
            gradients,
        })
    }
}

fn checked_draw<R: Random + ?Sized>(random: &mut R, bound: i32) -> Result<usize, NoiseError> {
    let value = random.next_i32_bounded(bound);
    if (0..bound).contains(&value) {
        Ok(value as usize)
    } else {
        Err(NoiseError::InvalidConfiguration(format!(
            "random source returned {value} for a draw in [0, {bound})"
        )))
    }
}

fn sample_unit_vector<R: Random + ?Sized>(
    random: &mut R,
    slot: usize,
) -> Result<DVec2, NoiseError> {
    for _ in 0..GRADIENT_ATTEMPTS {
        let candidate = DVec2::new(checked_signed(random)?, checked_signed(random)?);
        let length_squared = candidate.length_squared();
        if length_squared < 1.0 && length_squared > 0.0 {
            return Ok(candidate / length_squared.sqrt());
        }
    }
    Err(NoiseError::InvalidConfiguration(format!(
        "no usable gradient for slot {slot} after {GRADIENT_ATTEMPTS} draws"
    )))
}

fn checked_signed<R: Random + ?Sized>(random: &mut R) -> Result<f64, NoiseError> {
    let value = random.next_signed_f64();
    if (-1.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(NoiseError::InvalidConfiguration(format!(
            "random source returned {value} for a draw in [-1, 1)"
        )))
    }
}
