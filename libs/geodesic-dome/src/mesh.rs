//! # Mesh Data Structure
//!
//! Colored triangle mesh the exporter accumulates dome shapes into.

use crate::struts::BLOCK_FACES;
use config::constants::EPSILON;
use glam::DVec3;
use std::collections::HashMap;

/// A triangle mesh with one RGBA color per vertex.
///
/// # Example
///
/// ```rust
/// use geodesic_dome::mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_polygon(&[DVec3::ZERO, DVec3::X, DVec3::ONE, DVec3::Y], [1.0; 4]);
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    colors: Vec<[f32; 4]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            colors: Vec::with_capacity(vertex_count),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, color: [f32; 4]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.colors.push(color);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds a convex polygon as a triangle fan.
    pub fn add_polygon(&mut self, points: &[DVec3], color: [f32; 4]) {
        if points.len() < 3 {
            return;
        }
        let first = self.vertices.len() as u32;
        for &p in points {
            self.add_vertex(p, color);
        }
        for i in 1..points.len() as u32 - 1 {
            self.add_triangle(first, first + i, first + i + 1);
        }
    }

    /// Adds a hexahedron given as outer quad then inner quad.
    pub fn add_hexahedron(&mut self, corners: &[DVec3; 8], color: [f32; 4]) {
        let first = self.vertices.len() as u32;
        for &p in corners {
            self.add_vertex(p, color);
        }
        for [a, b, c, d] in BLOCK_FACES {
            let [a, b, c, d] = [a, b, c, d].map(|i| first + i as u32);
            self.add_triangle(a, b, c);
            self.add_triangle(a, c, d);
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[inline]
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Computes the axis-aligned bounding box as `(min, max)`.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(&first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        self.vertices[1..]
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another mesh.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.colors.extend_from_slice(&other.colors);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|t| [t[0] + offset, t[1] + offset, t[2] + offset]),
        );
    }

    /// Merges vertices of the same color closer than `tolerance` and drops
    /// triangles that collapse. Returns the number of vertices removed.
    pub fn weld(&mut self, tolerance: f64) -> usize {
        let cell = tolerance.max(EPSILON);
        let key = |p: DVec3, c: [f32; 4]| {
            let q = (p / cell).round();
            (
                q.x as i64,
                q.y as i64,
                q.z as i64,
                c.map(f32::to_bits),
            )
        };

        let mut seen = HashMap::new();
        let mut remap = Vec::with_capacity(self.vertices.len());
        let mut vertices = Vec::new();
        let mut colors = Vec::new();
        for (&p, &c) in self.vertices.iter().zip(&self.colors) {
            let index = *seen.entry(key(p, c)).or_insert_with(|| {
                vertices.push(p);
                colors.push(c);
                vertices.len() as u32 - 1
            });
            remap.push(index);
        }

        let removed = self.vertices.len() - vertices.len();
        self.triangles = self
            .triangles
            .iter()
            .map(|t| t.map(|i| remap[i as usize]))
            .filter(|t| t[0] != t[1] && t[1] != t[2] && t[0] != t[2])
            .collect();
        self.vertices = vertices;
        self.colors = colors;
        removed
    }

    /// Checks that every index is in range and no triangle is degenerate.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;
        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let [v0, v1, v2] = tri.map(|i| self.vertices[i as usize]);
            (v1 - v0).cross(v2 - v0).length() > EPSILON
        })
    }
}
