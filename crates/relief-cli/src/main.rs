//! Relief CLI - Command-line interface for the Relief terrain generator

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate, sample};
use relief_terrain::NormalStrategy;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "relief")]
#[command(about = "Procedural terrain from lattice-gradient noise", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a terrain grid and print a summary or the full mesh
    Generate {
        /// TOML file with terrain settings (flags below override it)
        #[arg(long)]
        config: Option<String>,

        /// Gradient amplitude (terrain ruggedness)
        #[arg(long)]
        amplitude: Option<f32>,

        /// Half extent of the domain along X
        #[arg(long)]
        half_width: Option<f32>,

        /// Half extent of the domain along Y
        #[arg(long)]
        half_height: Option<f32>,

        /// Distance between samples
        #[arg(long)]
        step: Option<f32>,

        /// Normal estimation (differential or face)
        #[arg(long)]
        normals: Option<NormalStrategy>,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Sample the height field at a point
    Height {
        #[arg(allow_negative_numbers = true)]
        x: f32,

        #[arg(allow_negative_numbers = true)]
        y: f32,

        /// Gradient amplitude
        #[arg(long, default_value = "2.0")]
        amplitude: f32,
    },

    /// Show the gradient assigned to a lattice corner
    Gradient {
        #[arg(allow_negative_numbers = true)]
        ix: i32,

        #[arg(allow_negative_numbers = true)]
        iy: i32,

        /// Gradient amplitude
        #[arg(long, default_value = "2.0")]
        amplitude: f32,
    },
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            amplitude,
            half_width,
            half_height,
            step,
            normals,
            format,
        } => generate::run(generate::GenerateArgs {
            config,
            amplitude,
            half_width,
            half_height,
            step,
            normals,
            format,
        }),
        Commands::Height { x, y, amplitude } => sample::height(x, y, amplitude),
        Commands::Gradient { ix, iy, amplitude } => sample::gradient(ix, iy, amplitude),
    }
}
