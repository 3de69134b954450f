//! # Base Polyhedra
//!
//! Vertex sets and face tables of the three base solids. Vertices are placed
//! on the ellipsoid boundary around the dome center.

use crate::ellipsoid::Ellipsoid;
use crate::params::BaseSolid;
use config::constants::ICOSAHEDRON_TILT;
use glam::{DQuat, DVec3};

// =============================================================================
// FACE TABLES
// =============================================================================

const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 1, 3], [1, 2, 3], [2, 0, 3], [0, 1, 2]];

const OCTAHEDRON_FACES: [[usize; 3]; 8] = [
    [0, 1, 4],
    [1, 2, 4],
    [2, 3, 4],
    [3, 0, 4],
    [0, 1, 5],
    [1, 2, 5],
    [2, 3, 5],
    [3, 0, 5],
];

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [1, 6, 9],
    [1, 2, 6],
    [2, 6, 8],
    [6, 7, 8],
    [6, 7, 9],
    [1, 9, 10],
    [1, 5, 10],
    [1, 2, 5],
    [2, 5, 11],
    [2, 8, 11],
    [4, 5, 10],
    [4, 5, 11],
    [0, 4, 10],
    [0, 9, 10],
    [0, 7, 9],
    [3, 7, 8],
    [0, 3, 7],
    [0, 3, 4],
    [3, 4, 11],
    [3, 8, 11],
];

// =============================================================================
// POLYHEDRON
// =============================================================================

/// A base solid placed on the ellipsoid.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    pub solid: BaseSolid,
    pub vertices: Vec<DVec3>,
    pub faces: &'static [[usize; 3]],
}

impl Polyhedron {
    /// Builds the vertices of `solid` on `ellipsoid`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geodesic_dome::ellipsoid::Ellipsoid;
    /// use geodesic_dome::polyhedron::Polyhedron;
    /// use geodesic_dome::BaseSolid;
    /// use glam::DVec3;
    ///
    /// let e = Ellipsoid::new(DVec3::ZERO, DVec3::splat(100.0));
    /// let octa = Polyhedron::build(BaseSolid::Octahedron, &e);
    /// assert_eq!(octa.vertices.len(), 6);
    /// assert_eq!(octa.faces.len(), 8);
    /// ```
    pub fn build(solid: BaseSolid, ellipsoid: &Ellipsoid) -> Self {
        let (directions, faces): (Vec<DVec3>, &'static [[usize; 3]]) = match solid {
            BaseSolid::Tetrahedron => (tetrahedron_directions(), &TETRAHEDRON_FACES[..]),
            BaseSolid::Octahedron => (octahedron_directions(), &OCTAHEDRON_FACES[..]),
            BaseSolid::Icosahedron => (icosahedron_directions(), &ICOSAHEDRON_FACES[..]),
        };

        let vertices = directions
            .into_iter()
            .map(|dir| ellipsoid.project(ellipsoid.center + dir))
            .collect();

        Self {
            solid,
            vertices,
            faces,
        }
    }

    /// Corner points of every face, in face-table order.
    pub fn face_corners(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.faces.iter().map(|&[a, b, c]| {
            [self.vertices[a], self.vertices[b], self.vertices[c]]
        })
    }
}

/// Regular tetrahedron with a horizontal top edge (0-1) and a horizontal
/// bottom edge (2-3).
fn tetrahedron_directions() -> Vec<DVec3> {
    let h = std::f64::consts::FRAC_1_SQRT_2;
    vec![
        DVec3::new(0.0, 1.0, h),
        DVec3::new(0.0, -1.0, h),
        DVec3::new(1.0, 0.0, -h),
        DVec3::new(-1.0, 0.0, -h),
    ]
}

fn octahedron_directions() -> Vec<DVec3> {
    vec![
        DVec3::new(-1.0, -1.0, 0.0),
        DVec3::new(1.0, -1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(-1.0, 1.0, 0.0),
        DVec3::Z,
        DVec3::NEG_Z,
    ]
}

/// Golden-rectangle icosahedron, tilted about +Y so vertex 7 sits on the
/// pole and the vertex rings are horizontal.
fn icosahedron_directions() -> Vec<DVec3> {
    let golden = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let (a, b) = (golden, 1.0);
    let tilt = DQuat::from_axis_angle(DVec3::Y, ICOSAHEDRON_TILT);

    [
        DVec3::new(-a, -b, 0.0),
        DVec3::new(a, -b, 0.0),
        DVec3::new(a, b, 0.0),
        DVec3::new(-a, b, 0.0),
        DVec3::new(-b, 0.0, -a),
        DVec3::new(b, 0.0, -a),
        DVec3::new(b, 0.0, a),
        DVec3::new(-b, 0.0, a),
        DVec3::new(0.0, a, b),
        DVec3::new(0.0, -a, b),
        DVec3::new(0.0, -a, -b),
        DVec3::new(0.0, a, -b),
    ]
    .into_iter()
    .map(|v| tilt * v)
    .collect()
}
