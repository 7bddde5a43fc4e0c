//! Point queries against the height field

use anyhow::{Context, Result};
use relief_terrain::{Terrain, TerrainConfig};

fn terrain_with_amplitude(amplitude: f32) -> Result<Terrain> {
    let config = TerrainConfig {
        amplitude,
        ..Default::default()
    };
    Terrain::new(config).context("Invalid amplitude")
}

pub fn height(x: f32, y: f32, amplitude: f32) -> Result<()> {
    let terrain = terrain_with_amplitude(amplitude)?;
    println!("{}", terrain.height_at(x, y));
    Ok(())
}

pub fn gradient(ix: i32, iy: i32, amplitude: f32) -> Result<()> {
    let terrain = terrain_with_amplitude(amplitude)?;
    let g = terrain.gradient(ix, iy);
    println!("({}, {})", g.x, g.y);
    Ok(())
}
