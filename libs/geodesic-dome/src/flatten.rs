//! # Base Flattening
//!
//! Levels the lowest ring of nodes so the dome stands on a flat footprint.

use crate::ellipsoid::Ellipsoid;
use crate::strut_graph::StrutGraph;
use config::constants::BASE_RING_STEP_RATIO;
use glam::DVec3;

/// The levelled ring of lowest nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseRing {
    /// Node indices, lowest first.
    pub nodes: Vec<usize>,
    /// Common height of every ring node.
    pub z: f64,
}

impl BaseRing {
    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(&node)
    }
}

/// Indices of the lowest run of nodes.
///
/// Nodes are visited in ascending z; the run ends at the first step of
/// `step_ratio * mean_strut_length` or more.
pub fn find_base_ring(nodes: &[DVec3], mean_strut_length: f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|&a, &b| nodes[a].z.total_cmp(&nodes[b].z));

    let max_step = BASE_RING_STEP_RATIO * mean_strut_length;
    let mut ring = Vec::new();
    let mut previous: Option<f64> = None;
    for index in order {
        let z = nodes[index].z;
        if previous.is_some_and(|p| z - p >= max_step) {
            break;
        }
        ring.push(index);
        previous = Some(z);
    }
    ring
}

/// Moves the base ring of `graph` onto the plane `z = ring minimum`.
///
/// Each ring node keeps its horizontal direction from the axis and is
/// pushed out (or in) to the ellipsoid surface at the new height. A node on
/// the axis keeps its horizontal position. Strut classes are recomputed
/// with `tolerance`.
///
/// # Example
///
/// ```rust
/// use geodesic_dome::ellipsoid::Ellipsoid;
/// use geodesic_dome::flatten::flatten_base;
/// use geodesic_dome::strut_graph::StrutGraphBuilder;
/// use geodesic_dome::StrutEdge;
/// use glam::DVec3;
///
/// let e = Ellipsoid::new(DVec3::ZERO, DVec3::splat(100.0));
/// let nodes = [
///     e.project(DVec3::new(1.0, 0.0, 0.02)),
///     e.project(DVec3::new(0.0, 1.0, 0.0)),
///     DVec3::new(0.0, 0.0, 100.0),
/// ];
/// let edges = [StrutEdge::new(0, 1), StrutEdge::new(1, 2), StrutEdge::new(2, 0)];
/// let mut graph = StrutGraphBuilder::new(0.5).build(&nodes, &edges, &[]);
///
/// let ring = flatten_base(&mut graph, &e, 0.5);
/// assert_eq!(ring.nodes.len(), 2);
/// assert_eq!(graph.nodes[0].z, graph.nodes[1].z);
/// ```
pub fn flatten_base(graph: &mut StrutGraph, ellipsoid: &Ellipsoid, tolerance: f64) -> BaseRing {
    let nodes = find_base_ring(&graph.nodes, graph.mean_strut_length());
    let Some(z) = nodes.first().map(|&i| graph.nodes[i].z) else {
        return BaseRing::default();
    };

    for &index in &nodes {
        let p = graph.nodes[index];
        let horizontal = DVec3::new(p.x, p.y, 0.0);
        graph.nodes[index] = match horizontal.try_normalize() {
            Some(dir) => match ellipsoid.horizontal_radius(z, dir) {
                Some(radius) => dir * radius + DVec3::new(0.0, 0.0, z),
                None => DVec3::new(p.x, p.y, z),
            },
            None => DVec3::new(p.x, p.y, z),
        };
    }
    graph.reclassify(tolerance);

    log::debug!("flattened base ring of {} nodes at z = {z:.3}", nodes.len());
    BaseRing { nodes, z }
}
