//! ASCII rendering of a sampled field.

use drift_core::SampledField;

/// Shades from lowest to highest.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Render `field` as one line of shade characters per row.
#[must_use]
pub fn render(field: &SampledField) -> String {
    let normalized = field.normalized();
    let mut out = String::with_capacity((field.width() + 1) * field.height());
    if field.width() == 0 {
        return out;
    }
    for row in normalized.chunks(field.width()) {
        for &value in row {
            out.push(char::from(RAMP[shade(value)]));
        }
        out.push('\n');
    }
    out
}

fn shade(value: f64) -> usize {
    let last = RAMP.len() - 1;
    if value.is_nan() {
        return 0;
    }
    ((value * last as f64).round() as usize).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::{GradientNoise2D, Window, sample_window};

    #[test]
    fn test_shade_bounds() {
        assert_eq!(shade(0.0), 0);
        assert_eq!(shade(1.0), RAMP.len() - 1);
        assert_eq!(shade(f64::NAN), 0);
        assert_eq!(shade(-0.5), 0);
    }

    #[test]
    fn test_render_dimensions() {
        let noise = GradientNoise2D::from_seed(42).unwrap();
        let window = Window {
            origin_x: 0.3,
            origin_y: 0.3,
            width: 12,
            height: 5,
            scale: 0.21,
        };
        let text = render(&sample_window(&noise, &window));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.len() == 12));
        assert!(text.contains('@') && text.contains(' '));
    }
}
