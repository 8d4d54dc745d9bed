//! Previewer configuration, loaded from a JSON5 file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use drift_core::{NoiseConfig, ShuffleMode, Window};
use serde::Deserialize;

/// Written to disk when no config file exists yet.
pub const DEFAULT_CONFIG: &str = r#"{
  // Empty picks a random seed. Numbers are used as-is, other text is hashed.
  seed: "",
  // Entries in the permutation and gradient tables.
  table_size: 256,
  // "full_range" keeps historical fields, "shrinking" is an unbiased shuffle.
  shuffle: "full_range",
  window: {
    origin_x: 0.0,
    origin_y: 0.0,
    width: 64,
    height: 32,
    scale: 0.1,
  },
  // Extra reseeds applied before sampling.
  reseeds: 0,
}
"#;

/// Permutation shuffle as spelled in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleSetting {
    /// See [`ShuffleMode::FullRange`].
    FullRange,
    /// See [`ShuffleMode::Shrinking`].
    Shrinking,
}

impl From<ShuffleSetting> for ShuffleMode {
    fn from(setting: ShuffleSetting) -> Self {
        match setting {
            ShuffleSetting::FullRange => Self::FullRange,
            ShuffleSetting::Shrinking => Self::Shrinking,
        }
    }
}

/// The sampled region.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowConfig {
    /// X coordinate of the first column.
    pub origin_x: f64,
    /// Y coordinate of the first row.
    pub origin_y: f64,
    /// Columns to sample.
    pub width: usize,
    /// Rows to sample.
    pub height: usize,
    /// Spacing between samples.
    pub scale: f64,
}

/// Top-level config file.
#[derive(Debug, Clone, Deserialize)]
pub struct DriftConfig {
    /// Seed text, see [`DriftConfig::resolve_seed`].
    #[serde(default)]
    pub seed: String,
    /// Entries in each noise table.
    pub table_size: usize,
    /// Permutation shuffle.
    pub shuffle: ShuffleSetting,
    /// Region to preview.
    pub window: WindowConfig,
    /// Reseeds applied after construction.
    #[serde(default)]
    pub reseeds: u32,
}

impl DriftConfig {
    /// Load the config at `path`, writing [`DEFAULT_CONFIG`] there first if
    /// the file does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            fs::write(path, DEFAULT_CONFIG)
                .with_context(|| format!("failed to write default config to {}", path.display()))?;
            tracing::info!("Wrote default config to {}", path.display());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse config text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json5::from_str(text)?)
    }

    /// Turn the seed text into a numeric seed.
    ///
    /// Empty text draws a random seed, numeric text is parsed as `i64`, and
    /// anything else is hashed with `hash * 31 + byte`.
    #[must_use]
    pub fn resolve_seed(&self) -> i64 {
        if self.seed.is_empty() {
            rand::random()
        } else {
            self.seed.parse().unwrap_or_else(|_| {
                let mut hash: i64 = 0;
                for byte in self.seed.bytes() {
                    hash = hash.wrapping_mul(31).wrapping_add(i64::from(byte));
                }
                hash
            })
        }
    }

    /// Table construction settings.
    #[must_use]
    pub fn noise_config(&self) -> NoiseConfig {
        NoiseConfig {
            table_size: self.table_size,
            shuffle: self.shuffle.into(),
        }
    }

    /// Sampling window.
    #[must_use]
    pub const fn window(&self) -> Window {
        Window {
            origin_x: self.window.origin_x,
            origin_y: self.window.origin_y,
            width: self.window.width,
            height: self.window.height,
            scale: self.window.scale,
        }
    }
}
