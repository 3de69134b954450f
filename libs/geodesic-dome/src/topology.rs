//! # Topology Records
//!
//! Index-based edges and triangles referencing a point list.

use serde::{Deserialize, Serialize};

/// An undirected strut between two point indices.
///
/// `(a, b)` and `(b, a)` compare equal.
///
/// # Example
///
/// ```rust
/// use geodesic_dome::StrutEdge;
///
/// assert_eq!(StrutEdge::new(3, 7), StrutEdge::new(7, 3));
/// ```
#[derive(Debug, Clone, Copy, Eq, Serialize, Deserialize)]
pub struct StrutEdge {
    pub a: usize,
    pub b: usize,
}

impl StrutEdge {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Endpoints ordered low to high.
    pub fn key(&self) -> (usize, usize) {
        (self.a.min(self.b), self.a.max(self.b))
    }

    /// True if `index` is one of the endpoints.
    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}

impl PartialEq for StrutEdge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl std::hash::Hash for StrutEdge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Three point indices forming one subdivided triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriangleRecord(pub [usize; 3]);

impl TriangleRecord {
    pub fn new(i0: usize, i1: usize, i2: usize) -> Self {
        Self([i0, i1, i2])
    }

    /// The three edges `(i0,i1) (i1,i2) (i2,i0)`.
    pub fn edges(&self) -> [StrutEdge; 3] {
        let [a, b, c] = self.0;
        [StrutEdge::new(a, b), StrutEdge::new(b, c), StrutEdge::new(c, a)]
    }

    /// Rewrites the indices through `remap`.
    pub fn remapped(&self, remap: impl Fn(usize) -> usize) -> Self {
        let [a, b, c] = self.0;
        Self([remap(a), remap(b), remap(c)])
    }
}
