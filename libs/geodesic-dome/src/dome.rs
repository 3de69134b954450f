//! # Dome Pipeline
//!
//! `draw` runs every stage once, in order:
//!
//! ```text
//! DomeConfig -> Polyhedron -> Tessellation -> ClipResult -> StrutGraph
//!            -> (flatten) -> hubs, struts, frame -> DomeGeometry
//! ```
//!
//! Each stage consumes the previous stage's result and returns its own; the
//! only mutation after the strut graph is base flattening.

use crate::clip::{ClipProcessor, ClipReport, ClippedFace};
use crate::ellipsoid::Ellipsoid;
use crate::error::DomeError;
use crate::export::MeshSink;
use crate::flatten::{flatten_base, BaseRing};
use crate::frame::{build_base_frame, FrameBuilder};
use crate::hubs::{generate_hubs, HubPlacement};
use crate::mesh::Mesh;
use crate::params::DomeConfig;
use crate::polyhedron::Polyhedron;
use crate::scene::{Material, SceneSink};
use crate::strut_graph::{StrutClass, StrutGraph, StrutGraphBuilder};
use crate::struts::{build_struts, CylinderStrut, SolidBlock};
use crate::tessellate::Tessellation;
use crate::topology::{StrutEdge, TriangleRecord};
use crate::vector::same_point;
use config::constants::ExportConfig;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Everything one `draw` call produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomeGeometry {
    pub center: DVec3,
    pub nodes: Vec<DVec3>,
    pub struts: Vec<StrutEdge>,
    /// Whole triangles above the clip plane, indexed into `nodes`.
    pub triangles: Vec<TriangleRecord>,
    /// Strut prisms, frame members and base frame plates.
    pub solids: Vec<SolidBlock>,
    pub cylinders: Vec<CylinderStrut>,
    pub hubs: Vec<HubPlacement>,
    /// Clipped tessellated faces, when requested.
    pub faces: Vec<ClippedFace>,
    /// Faces of the unsubdivided base solid, when requested.
    pub base_faces: Vec<Vec<DVec3>>,
    pub classes: Vec<StrutClass>,
    pub clip: ClipReport,
    /// Node indices levelled by base flattening.
    pub base_ring: Vec<usize>,
}

impl DomeGeometry {
    /// Hands every shape to `sink`: faces, then solids, then round struts,
    /// then hubs.
    pub fn emit<S: SceneSink + ?Sized>(&self, sink: &mut S) {
        for face in &self.faces {
            sink.add_face(&face.polygon);
        }
        for face in &self.base_faces {
            sink.add_face(face);
        }
        for solid in &self.solids {
            sink.add_solid(&solid.corners, solid.material);
        }
        for cylinder in &self.cylinders {
            sink.add_cylinder(cylinder);
        }
        for hub in &self.hubs {
            sink.add_hub(hub);
        }
    }

    /// Triangulates the whole dome.
    pub fn to_mesh(&self, config: ExportConfig) -> Mesh {
        let mut sink = MeshSink::new(config);
        self.emit(&mut sink);
        sink.finish()
    }

    /// Number of solids tagged with `material`.
    pub fn solid_count(&self, material: Material) -> usize {
        self.solids.iter().filter(|s| s.material == material).count()
    }

    /// Length of strut `index`.
    pub fn strut_length(&self, index: usize) -> f64 {
        let s = self.struts[index];
        self.nodes[s.a].distance(self.nodes[s.b])
    }
}

/// Generates a dome.
///
/// # Errors
///
/// [`DomeError::InvalidConfiguration`] when `config` fails validation; no
/// geometry is computed in that case.
///
/// # Example
///
/// ```rust
/// use geodesic_dome::{draw, BaseSolid, DomeConfig};
///
/// let dome = draw(&DomeConfig {
///     frequency: 2,
///     solid: BaseSolid::Icosahedron,
///     ..DomeConfig::default()
/// })
/// .unwrap();
/// assert!(!dome.struts.is_empty());
/// assert_eq!(dome.hubs.len(), dome.nodes.len());
/// ```
pub fn draw(config: &DomeConfig) -> Result<DomeGeometry, DomeError> {
    config.validate()?;

    let center = config.center();
    let ellipsoid = Ellipsoid::new(center, config.radii);
    let polyhedron = Polyhedron::build(config.solid, &ellipsoid);
    let tessellation = Tessellation::of_polyhedron(&polyhedron, config.frequency, &ellipsoid);
    let clip = ClipProcessor::new(config.tolerance).process(&tessellation);
    let mut graph = StrutGraphBuilder::new(config.tolerance).build(
        &tessellation.points,
        &tessellation.edges,
        &clip.retained,
    );

    let mut faces = if config.draw_faces {
        clip.faces
    } else {
        Vec::new()
    };

    let ring = if config.flatten_base {
        let before = graph.nodes.clone();
        let ring = flatten_base(&mut graph, &ellipsoid, config.tolerance);
        follow_flattened(&mut faces, &ring, &before, &graph, config.tolerance);
        ring
    } else {
        BaseRing::default()
    };

    let hubs = generate_hubs(&graph.nodes, center, config.hub);

    let mut solids = Vec::new();
    let mut cylinders = Vec::new();
    if config.draw_struts {
        let struts = build_struts(&graph, center, &config.strut);
        solids.extend(struts.blocks);
        cylinders = struts.cylinders;
    }
    if let Some(frame) = &config.frame {
        solids.extend(FrameBuilder::new(frame, &config.strut, center, config.tolerance).build(&graph));
    }
    if config.flatten_base {
        solids.extend(build_base_frame(
            &graph,
            &ring,
            config.strut.thickness(),
            config.base_frame_height,
        ));
    }

    let base_faces = if config.draw_base_faces {
        polyhedron.face_corners().map(|f| f.to_vec()).collect()
    } else {
        Vec::new()
    };

    log::info!(
        "dome: {:?} f={} -> {} nodes, {} struts in {} classes, {} solids, {} hubs",
        config.solid,
        config.frequency,
        graph.nodes.len(),
        graph.struts.len(),
        graph.classes.len(),
        solids.len(),
        hubs.len()
    );

    let StrutGraph {
        nodes,
        struts,
        triangles,
        classes,
        ..
    } = graph;

    Ok(DomeGeometry {
        center,
        nodes,
        struts,
        triangles,
        solids,
        cylinders,
        hubs,
        faces,
        base_faces,
        classes,
        clip: clip.report,
        base_ring: ring.nodes,
    })
}

/// Moves face vertices that sat on a ring node to the node's levelled
/// position.
fn follow_flattened(
    faces: &mut [ClippedFace],
    ring: &BaseRing,
    before: &[DVec3],
    graph: &StrutGraph,
    tolerance: f64,
) {
    if faces.is_empty() {
        return;
    }
    for face in faces {
        for vertex in &mut face.polygon {
            if let Some(&node) = ring
                .nodes
                .iter()
                .find(|&&n| same_point(before[n], *vertex, tolerance))
            {
                *vertex = graph.nodes[node];
            }
        }
    }
}
