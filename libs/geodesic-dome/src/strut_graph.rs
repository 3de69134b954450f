//! # Strut Graph
//!
//! Collapses the raw per-face lattice into unique nodes and struts above the
//! clip plane, and sorts the struts into length classes (the cut list).
//!
//! Nodes are matched by position: a point is new when no stored node lies
//! within `tolerance`. Struts are matched by endpoint positions in either
//! orientation, since a physical point carries one raw index per face that
//! emitted it.

use crate::topology::{StrutEdge, TriangleRecord};
use crate::vector::same_point;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A group of struts sharing one cut length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrutClass {
    /// `A` for the shortest class, then `B`, `C`, ...
    pub label: String,
    pub length: f64,
    pub count: usize,
}

/// Deduplicated dome topology.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrutGraph {
    pub nodes: Vec<DVec3>,
    pub struts: Vec<StrutEdge>,
    /// Whole triangles, indexed into `nodes`.
    pub triangles: Vec<TriangleRecord>,
    pub classes: Vec<StrutClass>,
    /// Class index of every strut, parallel to `struts`.
    pub strut_class: Vec<usize>,
    /// Raw point index to node index; `None` below the plane.
    pub remap: Vec<Option<usize>>,
}

impl StrutGraph {
    /// Endpoints of a strut.
    pub fn endpoints(&self, strut: &StrutEdge) -> (DVec3, DVec3) {
        (self.nodes[strut.a], self.nodes[strut.b])
    }

    /// Length of a strut.
    pub fn strut_length(&self, strut: &StrutEdge) -> f64 {
        let (a, b) = self.endpoints(strut);
        a.distance(b)
    }

    /// Mean strut length, `0` without struts.
    pub fn mean_strut_length(&self) -> f64 {
        if self.struts.is_empty() {
            return 0.0;
        }
        self.struts.iter().map(|s| self.strut_length(s)).sum::<f64>() / self.struts.len() as f64
    }

    /// Recomputes the length classes after nodes moved.
    pub fn reclassify(&mut self, tolerance: f64) {
        let (classes, strut_class) =
            StrutGraphBuilder::new(tolerance).classify(&self.nodes, &self.struts);
        self.classes = classes;
        self.strut_class = strut_class;
    }
}

/// Builds a [`StrutGraph`] from raw lattice output.
#[derive(Debug, Clone, Copy)]
pub struct StrutGraphBuilder {
    tolerance: f64,
}

impl StrutGraphBuilder {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Dedups `points`, keeps edges whose endpoints both satisfy
    /// `z >= -tolerance`, and remaps `triangles` onto the nodes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geodesic_dome::strut_graph::StrutGraphBuilder;
    /// use geodesic_dome::StrutEdge;
    /// use glam::DVec3;
    ///
    /// let points = [
    ///     DVec3::new(0.0, 0.0, 10.0),
    ///     DVec3::new(10.0, 0.0, 10.0),
    ///     DVec3::new(10.2, 0.0, 10.0),
    ///     DVec3::new(0.1, 0.0, 10.0),
    /// ];
    /// let edges = [StrutEdge::new(0, 1), StrutEdge::new(2, 3)];
    /// let graph = StrutGraphBuilder::new(0.5).build(&points, &edges, &[]);
    /// assert_eq!(graph.nodes.len(), 2);
    /// assert_eq!(graph.struts.len(), 1);
    /// ```
    pub fn build(
        &self,
        points: &[DVec3],
        edges: &[StrutEdge],
        triangles: &[TriangleRecord],
    ) -> StrutGraph {
        let mut graph = StrutGraph::default();

        graph.remap = points
            .iter()
            .map(|&p| (p.z >= -self.tolerance).then(|| self.insert_point(&mut graph.nodes, p)))
            .collect();

        for edge in edges {
            let (Some(a), Some(b)) = (graph.remap[edge.a], graph.remap[edge.b]) else {
                continue;
            };
            if a != b {
                self.insert_edge(&graph.nodes, &mut graph.struts, a, b);
            }
        }

        for tri in triangles {
            let [a, b, c] = tri.0.map(|i| graph.remap[i]);
            if let (Some(a), Some(b), Some(c)) = (a, b, c) {
                let record = TriangleRecord::new(a, b, c);
                if a != b && b != c && c != a && !graph.triangles.contains(&record) {
                    graph.triangles.push(record);
                }
            }
        }

        let (classes, strut_class) = self.classify(&graph.nodes, &graph.struts);
        graph.classes = classes;
        graph.strut_class = strut_class;

        log::debug!(
            "strut graph: {} raw points -> {} nodes, {} raw edges -> {} struts in {} classes",
            points.len(),
            graph.nodes.len(),
            edges.len(),
            graph.struts.len(),
            graph.classes.len()
        );
        graph
    }

    /// Index of the node at `p`, appending it if none is within tolerance.
    fn insert_point(&self, nodes: &mut Vec<DVec3>, p: DVec3) -> usize {
        match nodes.iter().position(|&n| same_point(n, p, self.tolerance)) {
            Some(index) => index,
            None => {
                nodes.push(p);
                nodes.len() - 1
            }
        }
    }

    /// Appends strut `(a, b)` unless one with the same endpoint positions
    /// (either orientation) exists. Returns true if it was added.
    fn insert_edge(
        &self,
        nodes: &[DVec3],
        struts: &mut Vec<StrutEdge>,
        a: usize,
        b: usize,
    ) -> bool {
        let (pa, pb) = (nodes[a], nodes[b]);
        let exists = struts.iter().any(|s| {
            let (qa, qb) = (nodes[s.a], nodes[s.b]);
            (same_point(pa, qa, self.tolerance) && same_point(pb, qb, self.tolerance))
                || (same_point(pa, qb, self.tolerance) && same_point(pb, qa, self.tolerance))
        });
        if !exists {
            struts.push(StrutEdge::new(a, b));
        }
        !exists
    }

    /// Groups struts whose lengths differ by less than the tolerance.
    fn classify(&self, nodes: &[DVec3], struts: &[StrutEdge]) -> (Vec<StrutClass>, Vec<usize>) {
        let lengths: Vec<f64> = struts
            .iter()
            .map(|s| nodes[s.a].distance(nodes[s.b]))
            .collect();
        let mut order: Vec<usize> = (0..struts.len()).collect();
        order.sort_by(|&i, &j| lengths[i].total_cmp(&lengths[j]));

        let mut classes: Vec<StrutClass> = Vec::new();
        let mut strut_class = vec![0; struts.len()];
        let mut first_length = f64::NEG_INFINITY;
        for i in order {
            let length = lengths[i];
            if classes.is_empty() || length - first_length >= self.tolerance {
                first_length = length;
                classes.push(StrutClass {
                    label: class_label(classes.len()),
                    length: 0.0,
                    count: 0,
                });
            }
            let index = classes.len() - 1;
            let class = &mut classes[index];
            class.length += length;
            class.count += 1;
            strut_class[i] = index;
        }
        for class in &mut classes {
            class.length /= class.count as f64;
        }
        (classes, strut_class)
    }
}

/// `0 -> A`, `25 -> Z`, `26 -> AA`, ...
fn class_label(mut index: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

#[cfg(test)]
mod tests;
