//! # Clip Processor
//!
//! Classifies every lattice triangle against the clip plane `z = 0` and
//! closes the dome along its base.
//!
//! | Vertices above | Result |
//! |---|---|
//! | 3 | kept whole, recorded for frames |
//! | 2 | clipped to the quad above the plane |
//! | 1 | sliver, kept only if a straddling neighbour shares one of its edges |
//! | 0 | discarded |
//!
//! A vertex counts as above when `z >= -tolerance`.

use crate::tessellate::Tessellation;
use crate::topology::TriangleRecord;
use crate::vector::{intersect_line_plane, same_point, Line, Plane};
use config::constants::EPSILON;
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// How a face polygon was derived from its source triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipKind {
    /// Entirely above the plane.
    Whole,
    /// Two vertices above; exact quad (or triangle if a vertex sits on the plane).
    Straddle,
    /// Two vertices above but a cut point was degenerate; approximated by a
    /// triangle toward the higher vertex.
    Approximated,
    /// One vertex above, reconciled with a straddling neighbour.
    Sliver,
}

/// A drawable face polygon above the clip plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClippedFace {
    pub source: TriangleRecord,
    pub kind: ClipKind,
    /// Vertices in the winding order of the source triangle.
    pub polygon: Vec<DVec3>,
}

/// A sliver triangle paired with the straddling triangle that shares its edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipJoin {
    pub sliver: TriangleRecord,
    pub partner: TriangleRecord,
}

/// Per-class triangle counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipReport {
    pub whole: usize,
    pub straddling: usize,
    pub slivers: usize,
    /// Slivers without a straddling neighbour; excluded from the output.
    pub unresolved: usize,
    pub discarded: usize,
}

/// Result of clipping a tessellation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipResult {
    /// Triangles entirely above the plane, indexed into the raw point list.
    pub retained: Vec<TriangleRecord>,
    pub faces: Vec<ClippedFace>,
    pub joins: Vec<ClipJoin>,
    pub report: ClipReport,
}

// =============================================================================
// PROCESSOR
// =============================================================================

/// Clips triangles against the horizontal ground plane.
#[derive(Debug, Clone, Copy)]
pub struct ClipProcessor {
    plane: Plane,
    tolerance: f64,
}

impl ClipProcessor {
    pub fn new(tolerance: f64) -> Self {
        Self {
            plane: Plane::ground(),
            tolerance,
        }
    }

    /// True if `p` is on the retained side of the plane.
    #[inline]
    pub fn is_above(&self, p: DVec3) -> bool {
        self.plane.signed_distance(p) >= -self.tolerance
    }

    /// Clips every triangle of `tessellation`.
    pub fn process(&self, tessellation: &Tessellation) -> ClipResult {
        let mut result = ClipResult::default();
        let coverage: Vec<Coverage> = tessellation
            .triangles
            .iter()
            .map(|tri| Coverage::of(tessellation.corners(tri).map(|p| self.is_above(p))))
            .collect();

        for (tri, &cover) in tessellation.triangles.iter().zip(&coverage) {
            let corners = tessellation.corners(tri);
            match cover {
                Coverage::Whole => {
                    result.report.whole += 1;
                    result.retained.push(*tri);
                    result.faces.push(ClippedFace {
                        source: *tri,
                        kind: ClipKind::Whole,
                        polygon: corners.to_vec(),
                    });
                }
                Coverage::Straddle { below } => {
                    result.report.straddling += 1;
                    if let Some(face) = self.clip_straddling(*tri, corners, below) {
                        result.faces.push(face);
                    }
                }
                Coverage::Sliver { apex } => {
                    let Some(polygon) = self.clip_sliver(corners, apex) else {
                        // apex on the plane, nothing above it
                        result.report.discarded += 1;
                        continue;
                    };
                    result.report.slivers += 1;
                    match self.find_partner(tessellation, &coverage, tri, apex) {
                        Some(partner) => {
                            result.joins.push(ClipJoin {
                                sliver: *tri,
                                partner,
                            });
                            result.faces.push(ClippedFace {
                                source: *tri,
                                kind: ClipKind::Sliver,
                                polygon,
                            });
                        }
                        None => {
                            log::warn!(
                                "unresolved clip triangle {:?}: no straddling neighbour shares its edge",
                                tri.0
                            );
                            result.report.unresolved += 1;
                        }
                    }
                }
                Coverage::Below => result.report.discarded += 1,
            }
        }

        log::debug!("clip: {:?}", result.report);
        result
    }

    /// Quad above the plane for a triangle with one vertex (`below`) under it.
    fn clip_straddling(
        &self,
        source: TriangleRecord,
        corners: [DVec3; 3],
        below: usize,
    ) -> Option<ClippedFace> {
        let n = corners[below];
        let a = corners[(below + 1) % 3];
        let b = corners[(below + 2) % 3];
        let cut_a = self.cut(n, a);
        let cut_b = self.cut(n, b);

        let (kind, polygon) = match (cut_a, cut_b) {
            (Some(xa), Some(xb)) => (ClipKind::Straddle, dedup_polygon(vec![a, b, xb, xa])),
            (xa, xb) => {
                let (high, low, cut) = if a.z >= b.z { (a, b, xa) } else { (b, a, xb) };
                let cut = cut.or(xa).or(xb)?;
                log::debug!("straddling triangle {:?} approximated", source.0);
                (ClipKind::Approximated, dedup_polygon(vec![high, low, cut]))
            }
        };
        // both retained vertices on the plane leave nothing to draw
        (polygon.len() >= 3).then_some(ClippedFace {
            source,
            kind,
            polygon,
        })
    }

    /// Triangle above the plane for a triangle with only `apex` above it.
    fn clip_sliver(&self, corners: [DVec3; 3], apex: usize) -> Option<Vec<DVec3>> {
        let p = corners[apex];
        if p.z <= EPSILON {
            return None;
        }
        let x1 = self.cut(corners[(apex + 1) % 3], p)?;
        let x2 = self.cut(corners[(apex + 2) % 3], p)?;
        Some(vec![p, x1, x2])
    }

    /// Point where the segment from `below` to `above` crosses the plane.
    ///
    /// A retained vertex within tolerance under the plane is its own cut.
    fn cut(&self, below: DVec3, above: DVec3) -> Option<DVec3> {
        if above.z <= 0.0 {
            return Some(above);
        }
        intersect_line_plane(&Line::through(below, above), &self.plane)
    }

    /// Searches all triangles for a straddling one sharing an edge from the
    /// sliver's apex, matching endpoints by position.
    fn find_partner(
        &self,
        tessellation: &Tessellation,
        coverage: &[Coverage],
        sliver: &TriangleRecord,
        apex: usize,
    ) -> Option<TriangleRecord> {
        let corners = tessellation.corners(sliver);
        let p = corners[apex];
        let shared = [corners[(apex + 1) % 3], corners[(apex + 2) % 3]];

        tessellation
            .triangles
            .iter()
            .zip(coverage)
            .filter(|(tri, cover)| {
                *tri != sliver && matches!(cover, Coverage::Straddle { .. })
            })
            .find(|(tri, _)| {
                let other = tessellation.corners(tri);
                let has = |q: DVec3| other.iter().any(|&o| same_point(o, q, self.tolerance));
                has(p) && shared.iter().any(|&n| has(n))
            })
            .map(|(tri, _)| *tri)
    }
}

/// Which corners of a triangle lie above the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coverage {
    Whole,
    /// Only corner `below` is under the plane.
    Straddle { below: usize },
    /// Only corner `apex` is above the plane.
    Sliver { apex: usize },
    Below,
}

impl Coverage {
    fn of(above: [bool; 3]) -> Self {
        match above {
            [true, true, true] => Self::Whole,
            [false, true, true] => Self::Straddle { below: 0 },
            [true, false, true] => Self::Straddle { below: 1 },
            [true, true, false] => Self::Straddle { below: 2 },
            [true, false, false] => Self::Sliver { apex: 0 },
            [false, true, false] => Self::Sliver { apex: 1 },
            [false, false, true] => Self::Sliver { apex: 2 },
            [false, false, false] => Self::Below,
        }
    }
}

/// Drops consecutive vertices closer than `EPSILON`.
fn dedup_polygon(mut polygon: Vec<DVec3>) -> Vec<DVec3> {
    polygon.dedup_by(|a, b| a.distance(*b) < EPSILON);
    if polygon.len() > 1 && polygon[0].distance(polygon[polygon.len() - 1]) < EPSILON {
        polygon.pop();
    }
    polygon
}

#[cfg(test)]
mod tests;
