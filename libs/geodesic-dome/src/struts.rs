//! # Strut Solids
//!
//! Rectangular strut prisms and round strut rods, one per strut of the
//! graph.
//!
//! A rectangular strut is a hexahedron whose outer face lies on the dome
//! surface and whose inner face sits `depth` closer to the center:
//!
//! ```text
//!   0 ---------------- 3      outer quad (surface side)
//!   |  pt1 ------ pt2  |
//!   1 ---------------- 2
//!
//!   4 ---------------- 7      inner quad (toward center)
//!   5 ---------------- 6
//! ```

use crate::scene::Material;
use crate::strut_graph::StrutGraph;
use crate::params::StrutKind;
use crate::vector::{extend_line, with_length};
use config::constants::EPSILON;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Quad faces of a hexahedron given as outer quad then inner quad.
pub const BLOCK_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

/// A hexahedral solid with its material tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidBlock {
    pub corners: [DVec3; 8],
    pub material: Material,
}

impl SolidBlock {
    pub fn new(corners: [DVec3; 8], material: Material) -> Self {
        Self { corners, material }
    }

    /// Corner points of face `index` of [`BLOCK_FACES`].
    pub fn face(&self, index: usize) -> [DVec3; 4] {
        BLOCK_FACES[index].map(|i| self.corners[i])
    }
}

/// A round strut between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderStrut {
    pub start: DVec3,
    pub end: DVec3,
    pub radius: f64,
}

impl CylinderStrut {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Strut geometry for the whole graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrutSolids {
    pub blocks: Vec<SolidBlock>,
    pub cylinders: Vec<CylinderStrut>,
}

/// Builds one solid per strut of `graph`. Struts too short for their inset
/// or lying along a radial are skipped.
pub fn build_struts(graph: &StrutGraph, center: DVec3, kind: &StrutKind) -> StrutSolids {
    let mut solids = StrutSolids::default();
    for strut in &graph.struts {
        let (p1, p2) = graph.endpoints(strut);
        match *kind {
            StrutKind::Rect {
                dist_from_hub,
                thickness,
                depth,
            } => match rect_strut(p1, p2, center, dist_from_hub, thickness, depth) {
                Some(corners) => solids.blocks.push(SolidBlock::new(corners, Material::Strut)),
                None => log::debug!("skipping strut {:?}: degenerate prism", strut.key()),
            },
            StrutKind::Cylinder {
                radius,
                offset,
                extension,
            } => match cylinder_strut(p1, p2, center, radius, offset, extension) {
                Some(cylinder) => solids.cylinders.push(cylinder),
                None => log::debug!("skipping strut {:?}: degenerate rod", strut.key()),
            },
        }
    }
    solids
}

/// Corners of the rectangular prism for strut `p1`-`p2`.
///
/// The ends are inset `dist_from_hub` from each node. At each end the
/// half-width vector is `(end - center) x (p1 - p2)` scaled to
/// `thickness / 2`; the inner quad is the outer quad moved `depth` toward
/// the center along the radial of the node at that end.
///
/// Returns `None` when the inset consumes the strut or the strut points at
/// the center.
///
/// # Example
///
/// ```rust
/// use geodesic_dome::struts::rect_strut;
/// use glam::DVec3;
///
/// let corners = rect_strut(
///     DVec3::new(-10.0, 0.0, 100.0),
///     DVec3::new(10.0, 0.0, 100.0),
///     DVec3::ZERO,
///     2.0,
///     1.0,
///     3.0,
/// )
/// .unwrap();
/// assert!((corners[0].distance(corners[1]) - 1.0).abs() < 1e-9);
/// ```
pub fn rect_strut(
    p1: DVec3,
    p2: DVec3,
    center: DVec3,
    dist_from_hub: f64,
    thickness: f64,
    depth: f64,
) -> Option<[DVec3; 8]> {
    if p1.distance(p2) <= 2.0 * dist_from_hub {
        return None;
    }
    let pt1 = extend_line(p1, p2, dist_from_hub);
    let pt2 = extend_line(p2, p1, dist_from_hub);

    let n1 = (pt1 - center).cross(p1 - p2);
    let n2 = (pt2 - center).cross(p1 - p2);
    if n1.length() < EPSILON || n2.length() < EPSILON {
        return None;
    }
    let n1 = with_length(n1, thickness / 2.0);
    let n2 = with_length(n2, thickness / 2.0);

    let in1 = -with_length(p1 - center, depth);
    let in2 = -with_length(p2 - center, depth);

    let outer = [pt1 + n1, pt1 - n1, pt2 - n2, pt2 + n2];
    Some([
        outer[0],
        outer[1],
        outer[2],
        outer[3],
        outer[0] + in1,
        outer[1] + in1,
        outer[2] + in2,
        outer[3] + in2,
    ])
}

/// The rod for strut `p1`-`p2`.
///
/// The axis is shifted `offset` toward the center, perpendicular to the
/// strut, and extended `extension` past both nodes (negative shortens).
/// Returns `None` if nothing is left of the rod.
pub fn cylinder_strut(
    p1: DVec3,
    p2: DVec3,
    center: DVec3,
    radius: f64,
    offset: f64,
    extension: f64,
) -> Option<CylinderStrut> {
    let axis = (p2 - p1).try_normalize()?;
    if p1.distance(p2) + 2.0 * extension <= EPSILON {
        return None;
    }

    let inward = center - p1.lerp(p2, 0.5);
    let lateral = (inward - axis * inward.dot(axis)).normalize_or_zero() * offset;

    Some(CylinderStrut {
        start: p1 - axis * extension + lateral,
        end: p2 + axis * extension + lateral,
        radius,
    })
}
