//! # Vector Kernel
//!
//! Point/vector helpers shared by every stage: ray extension, lines,
//! planes and their intersections.

use config::constants::EPSILON;
use glam::DVec3;

// =============================================================================
// POINT HELPERS
// =============================================================================

/// Returns `v` rescaled to `length`, or zero if `v` has no direction.
#[inline]
pub fn with_length(v: DVec3, length: f64) -> DVec3 {
    v.normalize_or_zero() * length
}

/// Returns the point `dist` away from `p1` in the direction of `p2`.
///
/// # Example
///
/// ```rust
/// use geodesic_dome::vector::extend_line;
/// use glam::DVec3;
///
/// let p = extend_line(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0), 3.0);
/// assert_eq!(p, DVec3::new(3.0, 0.0, 0.0));
/// ```
#[inline]
pub fn extend_line(p1: DVec3, p2: DVec3, dist: f64) -> DVec3 {
    p1 + with_length(p2 - p1, dist)
}

/// True if `a` and `b` are closer than `tolerance`.
#[inline]
pub fn same_point(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    a.distance(b) < tolerance
}

// =============================================================================
// LINE
// =============================================================================

/// An infinite line through `point` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub point: DVec3,
    pub direction: DVec3,
}

impl Line {
    /// Creates a line from a point and a direction.
    pub fn new(point: DVec3, direction: DVec3) -> Self {
        Self { point, direction }
    }

    /// Line through two points, directed from `a` to `b`.
    pub fn through(a: DVec3, b: DVec3) -> Self {
        Self {
            point: a,
            direction: b - a,
        }
    }

    /// Point at parameter `t` (`point + t * direction`).
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.point + self.direction * t
    }
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane through `point` with `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: DVec3,
    pub normal: DVec3,
}

impl Plane {
    /// Creates a plane from a point and a normal.
    pub fn new(point: DVec3, normal: DVec3) -> Self {
        Self { point, normal }
    }

    /// The horizontal plane `z = 0` the dome is clipped against.
    pub fn ground() -> Self {
        Self::new(DVec3::ZERO, DVec3::Z)
    }

    /// Plane through three points, `None` if they are collinear.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a);
        if normal.length() < EPSILON {
            return None;
        }
        Some(Self::new(a, normal.normalize()))
    }

    /// Signed distance in units of the normal length.
    ///
    /// Positive = the side the normal points to.
    pub fn signed_distance(&self, p: DVec3) -> f64 {
        (p - self.point).dot(self.normal.normalize_or_zero())
    }
}

// =============================================================================
// INTERSECTIONS
// =============================================================================

/// Intersects a line with a plane.
///
/// Returns `None` when the line is parallel to the plane (including a line
/// lying inside it); callers skip the feature that needed the point.
///
/// # Example
///
/// ```rust
/// use geodesic_dome::vector::{intersect_line_plane, Line, Plane};
/// use glam::DVec3;
///
/// let line = Line::through(DVec3::new(0.0, 0.0, -10.0), DVec3::new(0.0, 0.0, 10.0));
/// let hit = intersect_line_plane(&line, &Plane::ground()).unwrap();
/// assert_eq!(hit, DVec3::ZERO);
/// ```
pub fn intersect_line_plane(line: &Line, plane: &Plane) -> Option<DVec3> {
    let denom = plane.normal.dot(line.direction);
    if denom.abs() < EPSILON {
        return None;
    }
    let t = plane.normal.dot(plane.point - line.point) / denom;
    Some(line.at(t))
}

/// Intersects two lines.
///
/// Returns the midpoint of the closest approach when the lines are closer
/// than `tolerance` there, `None` for parallel or clearly skew lines.
pub fn intersect_lines(a: &Line, b: &Line, tolerance: f64) -> Option<DVec3> {
    let w = a.point - b.point;
    let aa = a.direction.dot(a.direction);
    let bb = b.direction.dot(b.direction);
    let ab = a.direction.dot(b.direction);
    let denom = aa * bb - ab * ab;
    if denom.abs() < EPSILON * aa.max(1.0) * bb.max(1.0) {
        return None;
    }
    let aw = a.direction.dot(w);
    let bw = b.direction.dot(w);
    let s = (ab * bw - bb * aw) / denom;
    let t = (aa * bw - ab * aw) / denom;
    let pa = a.at(s);
    let pb = b.at(t);
    if pa.distance(pb) > tolerance {
        return None;
    }
    Some((pa + pb) * 0.5)
}
