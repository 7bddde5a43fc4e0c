//! Terrain configuration

use relief_core::{ReliefError, Result};
use serde::{Deserialize, Serialize};

use crate::mesh::NormalStrategy;

/// Parameters read at generation time.
///
/// Missing TOML keys fall back to the defaults: amplitude 2, a 10×10 domain
/// centred on the origin, and a step of 0.1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Gradient magnitude; larger values give more rugged terrain
    pub amplitude: f32,
    /// Domain extends from `-half_width` to `+half_width` along X
    pub half_width: f32,
    /// Domain extends from `-half_height` to `+half_height` along Y
    pub half_height: f32,
    /// Distance between neighbouring samples on both axes
    pub step: f32,
    /// How vertex normals are estimated
    pub normals: NormalStrategy,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            amplitude: 2.0,
            half_width: 5.0,
            half_height: 5.0,
            step: 0.1,
            normals: NormalStrategy::default(),
        }
    }
}

impl TerrainConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: TerrainConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric field against its allowed range
    pub fn validate(&self) -> Result<()> {
        if !self.amplitude.is_finite() {
            return Err(invalid("amplitude", self.amplitude, "must be finite"));
        }
        if self.amplitude < 0.0 {
            return Err(invalid("amplitude", self.amplitude, "must not be negative"));
        }
        positive("half_width", self.half_width)?;
        positive("half_height", self.half_height)?;
        positive("step", self.step)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(invalid(field, value, "must be greater than zero"));
    }
    Ok(())
}

fn invalid(field: &'static str, value: f32, reason: &'static str) -> ReliefError {
    ReliefError::InvalidConfiguration {
        field,
        value,
        reason,
    }
}
