//! # Ellipsoid Tessellation
//!
//! Splits every base face into a triangular lattice of side `frequency` and
//! projects each lattice point onto the ellipsoid.
//!
//! ## Lattice layout
//!
//! ```text
//! row f        p3                 1 point
//!             /  \
//! row 1      o----o  ...          f points
//!           / \  / \
//! row 0    p1--o--o--p2           f+1 points
//! ```
//!
//! Row `r` runs between `lerp(p1, p3, r/f)` and `lerp(p2, p3, r/f)`. Each point
//! links to its left neighbour in the row and to the two points above it in
//! the previous (longer) row.

use crate::ellipsoid::Ellipsoid;
use crate::polyhedron::Polyhedron;
use crate::topology::{StrutEdge, TriangleRecord};
use glam::DVec3;
use std::ops::Range;

/// Raw subdivision output: the generation context every later stage reads.
///
/// Points are appended per face, so shared corners and edges appear once
/// per face until the strut graph dedups them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tessellation {
    pub points: Vec<DVec3>,
    pub edges: Vec<StrutEdge>,
    pub triangles: Vec<TriangleRecord>,
    /// Point index range emitted by each base face.
    pub faces: Vec<Range<usize>>,
}

impl Tessellation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subdivides every face of `polyhedron`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geodesic_dome::ellipsoid::Ellipsoid;
    /// use geodesic_dome::polyhedron::Polyhedron;
    /// use geodesic_dome::tessellate::Tessellation;
    /// use geodesic_dome::BaseSolid;
    /// use glam::DVec3;
    ///
    /// let e = Ellipsoid::new(DVec3::ZERO, DVec3::splat(100.0));
    /// let poly = Polyhedron::build(BaseSolid::Tetrahedron, &e);
    /// let mesh = Tessellation::of_polyhedron(&poly, 2, &e);
    /// assert_eq!(mesh.points.len(), 4 * 6);
    /// assert_eq!(mesh.triangles.len(), 4 * 4);
    /// ```
    pub fn of_polyhedron(polyhedron: &Polyhedron, frequency: u32, ellipsoid: &Ellipsoid) -> Self {
        let f = frequency as usize;
        let faces = polyhedron.faces.len();
        let mut tessellation = Self {
            points: Vec::with_capacity(faces * lattice_size(frequency)),
            edges: Vec::with_capacity(faces * 3 * f * (f + 1) / 2),
            triangles: Vec::with_capacity(faces * f * f),
            faces: Vec::with_capacity(faces),
        };
        for [p1, p2, p3] in polyhedron.face_corners() {
            tessellation.subdivide_face(p1, p2, p3, frequency, ellipsoid);
        }
        log::debug!(
            "tessellated {} faces at frequency {}: {} points, {} edges, {} triangles",
            faces,
            frequency,
            tessellation.points.len(),
            tessellation.edges.len(),
            tessellation.triangles.len()
        );
        tessellation
    }

    /// Appends the lattice of one face `(p1, p2, p3)`.
    ///
    /// Emits exactly `(f+1)(f+2)/2` points, `3f(f+1)/2` edges and `f²`
    /// triangles. Diagonal edges are stored as `(upper row, lower row)`.
    pub fn subdivide_face(
        &mut self,
        p1: DVec3,
        p2: DVec3,
        p3: DVec3,
        frequency: u32,
        ellipsoid: &Ellipsoid,
    ) {
        let f = frequency.max(1) as usize;
        let face_start = self.points.len();
        let mut prev_start = face_start;

        for row in 0..=f {
            let order = f + 1 - row;
            let rf = row as f64 / f as f64;
            let start = p1.lerp(p3, rf);
            let end = p2.lerp(p3, rf);
            let row_start = self.points.len();

            for c in 0..order {
                let point = if order == 1 {
                    // apex, already on the surface
                    p3
                } else {
                    let t = c as f64 / (order - 1) as f64;
                    ellipsoid.project(start.lerp(end, t))
                };
                let idx = self.points.len();
                self.points.push(point);

                if c > 0 {
                    self.edges.push(StrutEdge::new(idx - 1, idx));
                }
                if row > 0 {
                    let upper_left = prev_start + c;
                    let upper_right = prev_start + c + 1;
                    self.edges.push(StrutEdge::new(upper_right, idx));
                    self.edges.push(StrutEdge::new(upper_left, idx));

                    self.triangles
                        .push(TriangleRecord::new(upper_right, upper_left, idx));
                    if c > 0 {
                        self.triangles
                            .push(TriangleRecord::new(upper_left, idx, idx - 1));
                    }
                }
            }
            prev_start = row_start;
        }

        self.faces.push(face_start..self.points.len());
    }

    /// Corner points of a triangle record.
    pub fn corners(&self, tri: &TriangleRecord) -> [DVec3; 3] {
        let [a, b, c] = tri.0;
        [self.points[a], self.points[b], self.points[c]]
    }
}

/// Number of lattice points on one face: `(f+1)(f+2)/2`.
pub fn lattice_size(frequency: u32) -> usize {
    let f = frequency as usize;
    (f + 1) * (f + 2) / 2
}
