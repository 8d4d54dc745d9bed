//! Noise generator lifecycle and field sampling.
//!
//! [`generator::NoiseGenerator`] owns a random source and the current table
//! generation, and can be reseeded while other threads keep evaluating.
//! [`field`] samples rectangular windows of a noise field in parallel.

pub mod field;
pub mod generator;

pub use drift_utils::noise::{GradientNoise2D, NoiseConfig, NoiseError, ShuffleMode};
pub use drift_utils::random::{Random, legacy_random::LegacyRandom, xoroshiro::Xoroshiro};
pub use field::{SampledField, Window, sample_window};
pub use generator::NoiseGenerator;
