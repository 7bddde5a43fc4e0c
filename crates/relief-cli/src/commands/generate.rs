//! Terrain generation command

use anyhow::{Context, Result};
use relief_terrain::{NormalStrategy, Terrain, TerrainConfig, TerrainGrid};
use serde::Serialize;
use tracing::info;

pub struct GenerateArgs {
    pub config: Option<String>,
    pub amplitude: Option<f32>,
    pub half_width: Option<f32>,
    pub half_height: Option<f32>,
    pub step: Option<f32>,
    pub normals: Option<NormalStrategy>,
    pub format: String,
}

#[derive(Serialize)]
struct MeshOutput<'a> {
    config: &'a TerrainConfig,
    rows: usize,
    cols: usize,
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let terrain = Terrain::new(config).context("Invalid terrain settings")?;

    let grid = terrain.generate();
    info!(
        rows = grid.rows(),
        cols = grid.cols(),
        digest = %grid.digest(),
        "Generated terrain"
    );

    if args.format == "json" {
        let output = MeshOutput {
            config: terrain.config(),
            rows: grid.rows(),
            cols: grid.cols(),
            positions: grid.positions(),
            normals: grid.normals(),
            indices: grid.triangle_indices(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print_summary(terrain.config(), &grid);
    }

    Ok(())
}

/// Start from the TOML file (or defaults) and apply command-line overrides
fn resolve_config(args: &GenerateArgs) -> Result<TerrainConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config '{}'", path))?;
            TerrainConfig::from_toml_str(&source)
                .with_context(|| format!("Failed to load config '{}'", path))?
        }
        None => TerrainConfig::default(),
    };

    if let Some(amplitude) = args.amplitude {
        config.amplitude = amplitude;
    }
    if let Some(half_width) = args.half_width {
        config.half_width = half_width;
    }
    if let Some(half_height) = args.half_height {
        config.half_height = half_height;
    }
    if let Some(step) = args.step {
        config.step = step;
    }
    if let Some(normals) = args.normals {
        config.normals = normals;
    }

    Ok(config)
}

fn print_summary(config: &TerrainConfig, grid: &TerrainGrid) {
    let (lo, hi) = grid.height_range();
    println!(
        "Terrain grid: {} x {} ({} vertices, {} triangles)",
        grid.rows(),
        grid.cols(),
        grid.vertices().len(),
        grid.triangle_indices().len() / 3
    );
    println!("  amplitude: {}", config.amplitude);
    println!(
        "  domain:    [{}, {}] x [{}, {}], step {}",
        -config.half_width, config.half_width, -config.half_height, config.half_height, config.step
    );
    println!("  normals:   {}", config.normals);
    println!("  height:    {:.4} .. {:.4}", lo, hi);
    println!("  digest:    {}", grid.digest().to_prefixed_hex());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GenerateArgs {
        GenerateArgs {
            config: None,
            amplitude: None,
            half_width: None,
            half_height: None,
            step: None,
            normals: None,
            format: "text".to_string(),
        }
    }

    #[test]
    fn defaults_without_file_or_flags() {
        assert_eq!(resolve_config(&args()).unwrap(), TerrainConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = resolve_config(&GenerateArgs {
            amplitude: Some(0.5),
            step: Some(0.25),
            normals: Some(NormalStrategy::Face),
            ..args()
        })
        .unwrap();

        assert_eq!(config.amplitude, 0.5);
        assert_eq!(config.step, 0.25);
        assert_eq!(config.half_width, 5.0);
        assert_eq!(config.normals, NormalStrategy::Face);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = resolve_config(&GenerateArgs {
            config: Some("does/not/exist.toml".to_string()),
            ..args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
