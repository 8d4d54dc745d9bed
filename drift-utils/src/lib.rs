//! Shared primitives for the drift noise workspace.
//!
//! - [`math`] - lattice math and the falloff kernel
//! - [`random`] - the [`random::Random`] capability and seeded sources
//! - [`noise`] - permutation/gradient tables and 2D gradient noise

pub mod math;
pub mod noise;
pub mod random;
