//! Generated vertex grid and renderer-facing accessors

use bytemuck::{Pod, Zeroable};
use relief_core::{GridDigest, Vec3};

/// A single mesh vertex, laid out for direct upload to a vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// (x, y, height)
    pub position: [f32; 3],
    /// Unit surface normal
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn height(&self) -> f32 {
        self.position[2]
    }
}

/// One grid cell, corners in counter-clockwise order seen from +Z
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quad {
    pub bl: Vertex,
    pub br: Vertex,
    pub tr: Vertex,
    pub tl: Vertex,
}

impl Quad {
    /// Corners in drawing order
    pub fn corners(&self) -> [Vertex; 4] {
        [self.bl, self.br, self.tr, self.tl]
    }

    /// Single normal for flat shading: the mean of the corner normals
    pub fn face_normal(&self) -> Vec3 {
        let sum = self
            .corners()
            .iter()
            .fold(Vec3::ZERO, |acc, v| acc + Vec3::from_array(v.normal));
        sum.normalized_or(Vec3::UP)
    }
}

/// Row-major grid of vertices.
///
/// Row `i` walks the X axis and column `j` walks the Y axis, both from the
/// negative edge of the domain. A grid is never edited after generation.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainGrid {
    rows: usize,
    cols: usize,
    vertices: Vec<Vertex>,
}

impl TerrainGrid {
    pub(crate) fn from_vertices(rows: usize, cols: usize, vertices: Vec<Vertex>) -> Self {
        debug_assert_eq!(vertices.len(), rows * cols);
        Self {
            rows,
            cols,
            vertices,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index of `(i, j)` into `vertices()`
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&Vertex> {
        if i < self.rows && j < self.cols {
            self.vertices.get(self.index(i, j))
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> Option<&[Vertex]> {
        if i < self.rows {
            let start = self.index(i, 0);
            Some(&self.vertices[start..start + self.cols])
        } else {
            None
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Every 2×2 window of the grid as a quad
    pub fn quads(&self) -> impl Iterator<Item = Quad> + '_ {
        let cols = self.cols;
        (0..self.rows.saturating_sub(1)).flat_map(move |i| {
            (0..cols.saturating_sub(1)).map(move |j| Quad {
                bl: self.vertices[self.index(i, j)],
                br: self.vertices[self.index(i + 1, j)],
                tr: self.vertices[self.index(i + 1, j + 1)],
                tl: self.vertices[self.index(i, j + 1)],
            })
        })
    }

    /// Two counter-clockwise triangles per quad, as indices into `vertices()`
    pub fn triangle_indices(&self) -> Vec<u32> {
        let quads = self.rows.saturating_sub(1) * self.cols.saturating_sub(1);
        let mut indices = Vec::with_capacity(quads * 6);

        for i in 0..self.rows.saturating_sub(1) {
            for j in 0..self.cols.saturating_sub(1) {
                let bl = self.index(i, j) as u32;
                let br = self.index(i + 1, j) as u32;
                let tr = br + 1;
                let tl = bl + 1;

                // First triangle (bottom-left, bottom-right, top-right)
                indices.extend_from_slice(&[bl, br, tr]);
                // Second triangle (bottom-left, top-right, top-left)
                indices.extend_from_slice(&[bl, tr, tl]);
            }
        }

        indices
    }

    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    pub fn normals(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| v.normal).collect()
    }

    /// Lowest and highest sampled height
    pub fn height_range(&self) -> (f32, f32) {
        self.vertices
            .iter()
            .map(Vertex::height)
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), h| {
                (lo.min(h), hi.max(h))
            })
    }

    /// Fingerprint of every position and normal in the grid
    pub fn digest(&self) -> GridDigest {
        GridDigest::from_bytes(bytemuck::cast_slice(&self.vertices))
    }
}
