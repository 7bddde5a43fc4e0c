//! Configured terrain: the entry point for renderers and other consumers

use relief_core::{Result, Vec2};
use relief_noise::{GradientField, HeightSampler};
use tracing::warn;

use crate::config::TerrainConfig;
use crate::grid::TerrainGrid;
use crate::mesh::{NormalStrategy, TerrainMesh};

/// Holds a validated configuration and produces grids and height queries from it.
///
/// Nothing generated is retained: each `generate` call returns a new grid
/// and the caller owns it.
#[derive(Clone, Debug, Default)]
pub struct Terrain {
    config: TerrainConfig,
}

impl Terrain {
    pub fn new(config: TerrainConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!(%err, "Rejected terrain configuration");
            return Err(err);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Replace the numeric parameters used by later `generate` calls.
    ///
    /// On error the previous configuration is kept.
    pub fn configure(
        &mut self,
        amplitude: f32,
        half_width: f32,
        half_height: f32,
        step: f32,
    ) -> Result<()> {
        let candidate = TerrainConfig {
            amplitude,
            half_width,
            half_height,
            step,
            normals: self.config.normals,
        };
        if let Err(err) = candidate.validate() {
            warn!(%err, "Rejected terrain configuration");
            return Err(err);
        }
        self.config = candidate;
        Ok(())
    }

    pub fn set_normal_strategy(&mut self, strategy: NormalStrategy) {
        self.config.normals = strategy;
    }

    pub fn sampler(&self) -> HeightSampler {
        HeightSampler::new(GradientField::new(self.config.amplitude))
    }

    /// Build the full vertex grid for the current configuration
    pub fn generate(&self) -> TerrainGrid {
        let c = &self.config;
        TerrainMesh::new(self.sampler(), c.normals).generate(c.half_width, c.half_height, c.step)
    }

    /// Height at any point, independent of grid generation
    pub fn height_at(&self, x: f32, y: f32) -> f32 {
        self.sampler().height(x, y)
    }

    /// Lattice gradient at corner `(ix, iy)`
    pub fn gradient(&self, ix: i32, iy: i32) -> Vec2 {
        self.sampler().field().gradient(ix, iy)
    }
}
