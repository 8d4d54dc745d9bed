//! Lattice math shared by the noise generators.

/// Floor a coordinate onto the integer lattice.
///
/// Saturates at the `i64` range; `NaN` maps to `0`. Callers that care about
/// non-finite input must check before calling.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i64 {
    value.floor() as i64
}

/// Map any lattice coordinate into `[0, size)`.
///
/// Uses Euclidean remainder so negative coordinates wrap the same way positive
/// ones do (`-1` maps to `size - 1`, not `-1`).
///
/// `size` must be non-zero.
#[inline]
#[must_use]
pub const fn wrap_index(value: i64, size: usize) -> usize {
    value.rem_euclid(size as i64) as usize
}

/// Quintic falloff kernel `1 - 6|t|^5 + 15|t|^4 - 10|t|^3`.
///
/// Equals `1` at `t = 0` and exactly `0` at `|t| = 1`, with zero first and
/// second derivatives at both ends.
#[inline]
#[must_use]
pub fn dropoff(t: f64) -> f64 {
    let t = t.abs();
    1.0 - t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_negative() {
        assert_eq!(floor(-0.5), -1);
        assert_eq!(floor(-1.0), -1);
        assert_eq!(floor(2.999), 2);
        assert_eq!(floor(f64::NAN), 0);
    }

    #[test]
    fn test_wrap_index_negative() {
        assert_eq!(wrap_index(-1, 256), 255);
        assert_eq!(wrap_index(-256, 256), 0);
        assert_eq!(wrap_index(-257, 256), 255);
        assert_eq!(wrap_index(513, 256), 1);
        assert_eq!(wrap_index(i64::MIN, 256), 0);
        assert_eq!(wrap_index(i64::MAX, 256), 255);
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "kernel endpoints are exact")]
    fn test_dropoff_endpoints() {
        assert_eq!(dropoff(0.0), 1.0);
        assert_eq!(dropoff(1.0), 0.0);
        assert_eq!(dropoff(-1.0), 0.0);
        assert_eq!(dropoff(0.5), 0.5);
    }

    #[test]
    fn test_dropoff_monotonic_and_symmetric() {
        let mut previous = dropoff(0.0);
        for i in 1..=100 {
            let t = f64::from(i) / 100.0;
            let value = dropoff(t);
            assert!(value <= previous, "dropoff must not increase at t = {t}");
            assert!((value - dropoff(-t)).abs() < 1e-15);
            previous = value;
        }
    }

    #[test]
    fn test_dropoff_flat_at_ends() {
        let h = 1e-4;
        let near_zero = (dropoff(h) - dropoff(0.0)) / h;
        let near_one = (dropoff(1.0) - dropoff(1.0 - h)) / h;
        assert!(near_zero.abs() < 1e-6, "slope at 0 was {near_zero}");
        assert!(near_one.abs() < 1e-6, "slope at 1 was {near_one}");
    }
}
