//! Relief Core - Foundational types for the Relief terrain generator
//!
//! This crate provides the types that the noise and terrain crates share:
//! - `Vec2`, `Vec3` - Small vector math for gradients, positions and normals
//! - `GridDigest` - SHA-256 fingerprint of generated vertex data
//! - Error types and Result alias

mod digest;
mod error;
mod types;

pub use digest::GridDigest;
pub use error::{ReliefError, Result};
pub use types::{Vec2, Vec3};
