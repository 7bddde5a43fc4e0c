//! Relief Terrain - Noise-driven terrain mesh generation
//!
//! Samples a lattice-gradient height field over a rectangular domain and
//! returns a grid of vertices with unit normals. Does not render anything:
//! outputs raw vertex data (positions, normals, quads, indices) for the
//! renderer to consume.

pub mod config;
pub mod grid;
pub mod mesh;
pub mod terrain;

pub use config::TerrainConfig;
pub use grid::{Quad, TerrainGrid, Vertex};
pub use mesh::{axis_len, NormalStrategy, TerrainMesh};
pub use terrain::Terrain;
