//! Relief Noise - Lattice-gradient height fields
//!
//! A `GradientField` assigns a pseudo-random gradient to every integer
//! lattice corner; a `HeightSampler` blends the four corners around a point
//! into a smooth height. Both are pure functions of their inputs, so they can
//! be shared freely across threads.

pub mod gradient;
pub mod sampler;

pub use gradient::{lattice_seed, GradientField};
pub use sampler::{ease, HeightField, HeightSampler};
