//! # Frame Members
//!
//! Cross-members that fill each whole triangle between its struts, plus the
//! vertical plates that close a flattened base.
//!
//! For a triangle with base edge `A-B` and apex `C`, members run parallel to
//! the midline (from the base midpoint `M` to `C`) at lateral offsets
//! `0, ±sep, ±2·sep, ...` along `A-B`:
//!
//! ```text
//!                C
//!               /|\
//!              / | \
//!          CA /| | |\ CB
//!            / | | | \
//!           A--+-M-+--B
//!            -sep 0 +sep
//! ```
//!
//! Each member is clipped by the inner side plane of the base strut at the
//! bottom and of `CA` (negative offsets) or `CB` (positive offsets) at the
//! top, then given the strut depth along the face normal.

use crate::flatten::BaseRing;
use crate::params::{FrameSpec, StrutKind};
use crate::scene::Material;
use crate::strut_graph::StrutGraph;
use crate::struts::SolidBlock;
use crate::vector::{intersect_line_plane, intersect_lines, Line, Plane};
use config::constants::EPSILON;
use glam::DVec3;

// =============================================================================
// TRIANGLE MEMBERS
// =============================================================================

/// Builds frame members for the whole triangles of a strut graph.
#[derive(Debug, Clone, Copy)]
pub struct FrameBuilder {
    separation: f64,
    thickness: f64,
    depth: f64,
    center: DVec3,
    tolerance: f64,
}

impl FrameBuilder {
    /// Members take the cross-section of `strut`. Separations narrower
    /// than the strut width are widened to it.
    pub fn new(spec: &FrameSpec, strut: &StrutKind, center: DVec3, tolerance: f64) -> Self {
        let thickness = strut.thickness();
        Self {
            separation: spec.separation.max(thickness),
            thickness,
            depth: strut.depth(),
            center,
            tolerance,
        }
    }

    /// Members for every triangle of `graph`, using each triangle's first
    /// two nodes as the base edge.
    pub fn build(&self, graph: &StrutGraph) -> Vec<SolidBlock> {
        let members: Vec<SolidBlock> = graph
            .triangles
            .iter()
            .flat_map(|tri| {
                let [a, b, c] = tri.0.map(|i| graph.nodes[i]);
                self.triangle_members(a, b, c)
            })
            .collect();
        log::debug!(
            "frame: {} members across {} triangles",
            members.len(),
            graph.triangles.len()
        );
        members
    }

    /// Members of triangle `a`-`b` (base) with apex `c`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geodesic_dome::frame::FrameBuilder;
    /// use geodesic_dome::{FrameSpec, StrutKind};
    /// use glam::DVec3;
    ///
    /// let builder = FrameBuilder::new(
    ///     &FrameSpec { separation: 8.0 },
    ///     &StrutKind::default_rect(),
    ///     DVec3::ZERO,
    ///     0.5,
    /// );
    /// let h = 30.0 * 3.0_f64.sqrt();
    /// let members = builder.triangle_members(
    ///     DVec3::new(-30.0, 0.0, 100.0),
    ///     DVec3::new(30.0, 0.0, 100.0),
    ///     DVec3::new(0.0, h, 100.0),
    /// );
    /// assert_eq!(members.len(), 5);
    /// ```
    pub fn triangle_members(&self, a: DVec3, b: DVec3, c: DVec3) -> Vec<SolidBlock> {
        let Some(normal) = self.face_normal(a, b, c) else {
            return Vec::new();
        };
        let half = self.thickness / 2.0;
        let (Some(base), Some(side_a), Some(side_b)) = (
            inner_side_plane(a, b, c, half),
            inner_side_plane(c, a, b, half),
            inner_side_plane(c, b, a, half),
        ) else {
            return Vec::new();
        };

        let half_width = a.distance(b) / 2.0;
        let mut offsets = Vec::new();
        let mut k = 0;
        loop {
            let s = k as f64 * self.separation;
            if half_width - s < self.separation + half {
                break;
            }
            offsets.push(s);
            if k > 0 {
                offsets.push(-s);
            }
            k += 1;
        }

        let along = (b - a) / (2.0 * half_width);
        let mid = a.lerp(b, 0.5);
        let rise = c - mid;
        let sides = SidePlanes {
            base,
            side_a,
            side_b,
            a,
            b,
        };

        offsets
            .into_iter()
            .filter_map(|s| {
                let outer = self.member_outline(mid, along, rise, c, s, &sides)?;
                let inner = outer.map(|p| p - normal * self.depth);
                Some(SolidBlock::new(
                    [
                        outer[0], outer[1], outer[2], outer[3], inner[0], inner[1], inner[2],
                        inner[3],
                    ],
                    Material::FrameMember,
                ))
            })
            .collect()
    }

    /// Outer corners of the member at lateral offset `s`:
    /// `[base left, base right, top right, top left]`.
    fn member_outline(
        &self,
        mid: DVec3,
        along: DVec3,
        rise: DVec3,
        apex: DVec3,
        s: f64,
        sides: &SidePlanes,
    ) -> Option<[DVec3; 4]> {
        let half = self.thickness / 2.0;

        let side_end = sides.end(s);
        let centerline = Line::new(mid + along * s, rise);
        let hit = intersect_lines(&centerline, &Line::through(apex, side_end), self.tolerance)?;
        let t = (hit - apex).dot(side_end - apex) / apex.distance_squared(side_end);
        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        let mut corners = [DVec3::ZERO; 4];
        for (i, offset) in [s - half, s + half].into_iter().enumerate() {
            let line = Line::new(mid + along * offset, rise);
            let bottom = intersect_line_plane(&line, &sides.base)?;
            let top = intersect_line_plane(&line, sides.plane(offset))?;
            if (top - bottom).dot(rise) <= EPSILON {
                // inverted: the strut sides overlap here
                return None;
            }
            corners[i] = bottom;
            corners[3 - i] = top;
        }
        Some(corners)
    }

    /// Unit normal of the face, pointing away from the dome center.
    fn face_normal(&self, a: DVec3, b: DVec3, c: DVec3) -> Option<DVec3> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        let centroid = (a + b + c) / 3.0;
        if normal.dot(centroid - self.center) < 0.0 {
            Some(-normal)
        } else {
            Some(normal)
        }
    }
}

/// The three strut side planes facing into a triangle.
struct SidePlanes {
    base: Plane,
    side_a: Plane,
    side_b: Plane,
    a: DVec3,
    b: DVec3,
}

impl SidePlanes {
    /// Side plane bounding a line at lateral offset `s`.
    fn plane(&self, s: f64) -> &Plane {
        if s < 0.0 {
            &self.side_a
        } else {
            &self.side_b
        }
    }

    /// Base vertex at the far end of the side edge for offset `s`.
    fn end(&self, s: f64) -> DVec3 {
        if s < 0.0 {
            self.a
        } else {
            self.b
        }
    }
}

/// Plane of the side of strut `p`-`q` that faces `opposite`, `half` in
/// from the strut axis within the face.
fn inner_side_plane(p: DVec3, q: DVec3, opposite: DVec3, half: f64) -> Option<Plane> {
    let edge = (q - p).try_normalize()?;
    let to_opposite = opposite - p;
    let inward = (to_opposite - edge * to_opposite.dot(edge)).try_normalize()?;
    Some(Plane::new(p + inward * half, inward))
}

// =============================================================================
// BASE FRAME
// =============================================================================

/// Vertical plates under every strut lying in the flattened base ring.
///
/// Each plate hangs `height` below the ring and is `thickness` deep toward
/// the vertical axis.
pub fn build_base_frame(
    graph: &StrutGraph,
    ring: &BaseRing,
    thickness: f64,
    height: f64,
) -> Vec<SolidBlock> {
    if height <= 0.0 {
        return Vec::new();
    }
    let drop = DVec3::new(0.0, 0.0, height);
    let plates: Vec<SolidBlock> = graph
        .struts
        .iter()
        .filter(|s| ring.contains(s.a) && ring.contains(s.b))
        .map(|s| {
            let (p1, p2) = graph.endpoints(s);
            let in1 = -DVec3::new(p1.x, p1.y, 0.0).normalize_or_zero() * thickness;
            let in2 = -DVec3::new(p2.x, p2.y, 0.0).normalize_or_zero() * thickness;
            let outer = [p1, p2, p2 - drop, p1 - drop];
            SolidBlock::new(
                [
                    outer[0],
                    outer[1],
                    outer[2],
                    outer[3],
                    outer[0] + in1,
                    outer[1] + in2,
                    outer[2] + in2,
                    outer[3] + in1,
                ],
                Material::BaseFrame,
            )
        })
        .collect();
    log::debug!("base frame: {} plates", plates.len());
    plates
}

#[cfg(test)]
mod tests;
