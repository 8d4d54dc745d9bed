//! Rectangular window sampling.
//!
//! Rows are evaluated in parallel with rayon; each row tracks its own min/max
//! and the results are merged in row order, so output is deterministic.

use drift_utils::noise::GradientNoise2D;
use rayon::prelude::*;

/// A grid of sample points: `(origin_x + col * scale, origin_y + row * scale)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// X coordinate of column 0.
    pub origin_x: f64,
    /// Y coordinate of row 0.
    pub origin_y: f64,
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Distance between neighboring samples.
    pub scale: f64,
}

impl Window {
    /// World position of a grid cell.
    #[inline]
    #[must_use]
    pub fn point(&self, col: usize, row: usize) -> (f64, f64) {
        (
            self.origin_x + col as f64 * self.scale,
            self.origin_y + row as f64 * self.scale,
        )
    }
}

/// Row-major samples of a [`Window`] with their observed range.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledField {
    values: Vec<f64>,
    width: usize,
    height: usize,
    min: f64,
    max: f64,
}

impl SampledField {
    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Smallest sampled value, `0` for an empty field.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest sampled value, `0` for an empty field.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Row-major values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Total sample count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the window had no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a grid cell, if it is inside the window.
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.values.get(row * self.width + col).copied()
    }

    /// Values rescaled to `[0, 1]` using the observed min and max.
    ///
    /// A flat field maps to all zeros.
    #[must_use]
    pub fn normalized(&self) -> Vec<f64> {
        let span = self.max - self.min;
        if span <= 0.0 {
            return vec![0.0; self.values.len()];
        }
        self.values.iter().map(|v| (v - self.min) / span).collect()
    }
}

/// Sample every point of `window` from `noise`.
#[must_use]
pub fn sample_window(noise: &GradientNoise2D, window: &Window) -> SampledField {
    let width = window.width;
    let height = window.height;
    if width == 0 || height == 0 {
        return SampledField {
            values: Vec::new(),
            width,
            height,
            min: 0.0,
            max: 0.0,
        };
    }

    let rows: Vec<(Vec<f64>, f64, f64)> = (0..height)
        .into_par_iter()
        .map(|row| {
            let mut values = Vec::with_capacity(width);
            let mut row_min = f64::INFINITY;
            let mut row_max = f64::NEG_INFINITY;
            for col in 0..width {
                let (x, y) = window.point(col, row);
                let value = noise.get_value(x, y);
                row_min = row_min.min(value);
                row_max = row_max.max(value);
                values.push(value);
            }
            (values, row_min, row_max)
        })
        .collect();

    let mut values = Vec::with_capacity(width * height);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (row, row_min, row_max) in rows {
        min = min.min(row_min);
        max = max.max(row_max);
        values.extend(row);
    }

    // Only reachable when every sample was NaN.
    if min > max {
        min = 0.0;
        max = 0.0;
    }

    SampledField {
        values,
        width,
        height,
        min,
        max,
    }
}
