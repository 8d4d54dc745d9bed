//! Reseedable noise generator shared between threads.
//!
//! Evaluation never blocks: readers load the current [`GradientNoise2D`]
//! snapshot through an [`ArcSwap`]. A reseed builds a complete new table pair
//! off to the side and publishes it with one atomic store, so a reader sees
//! either the old pair or the new pair, never one table from each.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use drift_utils::noise::{GradientNoise2D, NoiseConfig, NoiseError};
use drift_utils::random::Random;
use drift_utils::random::xoroshiro::Xoroshiro;
use parking_lot::Mutex;

use crate::field::{SampledField, Window, sample_window};

/// A noise field together with the random source that feeds its reseeds.
pub struct NoiseGenerator<R: Random> {
    /// Owned source. The lock also serializes publishes.
    random: Mutex<R>,
    current: ArcSwap<GradientNoise2D>,
    generation: AtomicU64,
    config: NoiseConfig,
}

impl NoiseGenerator<Xoroshiro> {
    /// Create a generator whose tables come from a [`Xoroshiro`] seeded with
    /// `seed`.
    ///
    /// The same seed always produces the same field, on every platform.
    pub fn initialize(seed: u64) -> Result<Self, NoiseError> {
        Self::with_random(Xoroshiro::from_seed(seed), NoiseConfig::default())
    }
}

impl<R: Random> NoiseGenerator<R> {
    /// Create a generator from an injected random source.
    pub fn with_random(mut random: R, config: NoiseConfig) -> Result<Self, NoiseError> {
        let noise = GradientNoise2D::new(&mut random, config)?;
        Ok(Self {
            random: Mutex::new(random),
            current: ArcSwap::from_pointee(noise),
            generation: AtomicU64::new(0),
            config,
        })
    }

    /// Regenerate both tables from the owned random source.
    ///
    /// Each call continues the source's sequence, so a seeded generator
    /// reseeded `n` times is itself reproducible. On error the current tables
    /// stay published.
    pub fn reseed(&self) -> Result<(), NoiseError> {
        let mut random = self.random.lock();
        let noise = GradientNoise2D::new(&mut *random, self.config)?;
        self.publish(noise);
        Ok(())
    }

    /// Regenerate both tables from an external random source.
    ///
    /// The owned source is not advanced.
    pub fn reseed_with<S: Random + ?Sized>(&self, random: &mut S) -> Result<(), NoiseError> {
        let _publish = self.random.lock();
        let noise = GradientNoise2D::new(random, self.config)?;
        self.publish(noise);
        Ok(())
    }

    /// Must be called with the `random` lock held.
    fn publish(&self, noise: GradientNoise2D) {
        self.current.store(Arc::new(noise));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        log::debug!("Published noise tables, generation {generation}");
    }

    /// Sample the current field at `(x, y)`.
    ///
    /// See [`GradientNoise2D::get_value`] for range and non-finite handling.
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.current.load().get_value(x, y)
    }

    /// The currently published field.
    ///
    /// The snapshot stays valid and unchanged across later reseeds.
    #[must_use]
    pub fn snapshot(&self) -> Arc<GradientNoise2D> {
        self.current.load_full()
    }

    /// Sample a window against a single generation.
    #[must_use]
    pub fn sample_window(&self, window: &Window) -> SampledField {
        sample_window(&self.current.load(), window)
    }

    /// Number of successful reseeds since construction.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Table configuration shared by every generation.
    #[must_use]
    pub const fn config(&self) -> NoiseConfig {
        self.config
    }
}

impl<R: Random> fmt::Debug for NoiseGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseGenerator")
            .field("generation", &self.generation())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
