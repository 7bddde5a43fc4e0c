//! Terrain mesh generation from a height field

use std::fmt;
use std::str::FromStr;

use relief_core::Vec3;
use relief_noise::{HeightField, HeightSampler};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::grid::{TerrainGrid, Vertex};

/// Slack added to the upper bound of each axis so rounding cannot drop the
/// last row or column.
pub const AXIS_TOLERANCE: f64 = 0.005;

/// Offset used by the differential normal estimate
pub const NORMAL_EPSILON: f32 = 0.0005;

/// How vertex normals are estimated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalStrategy {
    /// Re-sample the field a small step along X and Y and cross the tangents
    #[default]
    Differential,
    /// Cross the edges to the right and upper grid neighbours
    Face,
}

impl fmt::Display for NormalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalStrategy::Differential => write!(f, "differential"),
            NormalStrategy::Face => write!(f, "face"),
        }
    }
}

impl FromStr for NormalStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "differential" => Ok(NormalStrategy::Differential),
            "face" => Ok(NormalStrategy::Face),
            _ => Err(format!(
                "unknown normal strategy '{}'; valid values: differential, face",
                s
            )),
        }
    }
}

/// Number of samples along an axis spanning `[-half, +half]`.
///
/// Saturates at `usize::MAX` for domains too fine to count.
pub fn axis_len(half: f32, step: f32) -> usize {
    let steps = ((2.0 * half as f64 + AXIS_TOLERANCE) / step as f64).floor() as usize;
    steps.saturating_add(1)
}

fn axis_coord(half: f32, step: f32, k: usize) -> f32 {
    -half + k as f32 * step
}

/// Builds vertex grids by sampling a height field.
pub struct TerrainMesh<H = HeightSampler> {
    field: H,
    strategy: NormalStrategy,
}

impl<H: HeightField + Sync> TerrainMesh<H> {
    pub fn new(field: H, strategy: NormalStrategy) -> Self {
        Self { field, strategy }
    }

    pub fn strategy(&self) -> NormalStrategy {
        self.strategy
    }

    /// Sample the domain `[-half_width, half_width] × [-half_height, half_height]`.
    ///
    /// Callers are expected to pass validated, strictly positive extents.
    pub fn generate(&self, half_width: f32, half_height: f32, step: f32) -> TerrainGrid {
        let rows = axis_len(half_width, step);
        let cols = axis_len(half_height, step);
        debug!(rows, cols, step, strategy = ?self.strategy, "Generating terrain grid");

        let position = |i: usize, j: usize| {
            let x = axis_coord(half_width, step, i);
            let y = axis_coord(half_height, step, j);
            Vec3::new(x, y, self.field.height(x, y))
        };

        let vertices: Vec<Vertex> = match self.strategy {
            NormalStrategy::Differential => collect_rows(rows, |i| {
                (0..cols)
                    .map(|j| {
                        let p = position(i, j);
                        Vertex::new(p, self.differential_normal(p))
                    })
                    .collect::<Vec<_>>()
            }),
            NormalStrategy::Face => {
                // Normals need the neighbouring positions, so sample everything first
                let positions: Vec<Vec3> =
                    collect_rows(rows, |i| (0..cols).map(|j| position(i, j)).collect::<Vec<_>>());
                collect_rows(rows, |i| {
                    (0..cols)
                        .map(|j| {
                            let normal = face_normal(&positions, rows, cols, i, j);
                            Vertex::new(positions[i * cols + j], normal)
                        })
                        .collect::<Vec<_>>()
                })
            }
        };

        debug!(vertices = vertices.len(), "Terrain grid ready");
        TerrainGrid::from_vertices(rows, cols, vertices)
    }

    fn differential_normal(&self, p: Vec3) -> Vec3 {
        let (rx, uy) = (p.x + NORMAL_EPSILON, p.y + NORMAL_EPSILON);
        let right = Vec3::new(rx, p.y, self.field.height(rx, p.y)) - p;
        let up = Vec3::new(p.x, uy, self.field.height(p.x, uy)) - p;
        right.cross(&up).normalized_or(Vec3::UP)
    }
}

fn face_normal(positions: &[Vec3], rows: usize, cols: usize, i: usize, j: usize) -> Vec3 {
    let right = grid_edge(i, rows, |k| positions[k * cols + j]);
    let up = grid_edge(j, cols, |k| positions[i * cols + k]);
    match (right, up) {
        (Some(right), Some(up)) => right.cross(&up).normalized_or(Vec3::UP),
        _ => Vec3::UP,
    }
}

// Edge towards the next sample on an axis. The last sample reuses the edge
// from its predecessor so the direction (and the winding) stays the same.
fn grid_edge(at: usize, len: usize, sample: impl Fn(usize) -> Vec3) -> Option<Vec3> {
    if at + 1 < len {
        Some(sample(at + 1) - sample(at))
    } else if at > 0 {
        Some(sample(at) - sample(at - 1))
    } else {
        None
    }
}

fn collect_rows<T, F>(rows: usize, build_row: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> Vec<T> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    let per_row: Vec<Vec<T>> = (0..rows).into_par_iter().map(build_row).collect();
    #[cfg(not(feature = "parallel"))]
    let per_row: Vec<Vec<T>> = (0..rows).map(build_row).collect();

    per_row.into_iter().flatten().collect()
}
