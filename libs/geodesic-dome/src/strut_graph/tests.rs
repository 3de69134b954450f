use super::*;
use crate::ellipsoid::Ellipsoid;
use crate::params::BaseSolid;
use crate::polyhedron::Polyhedron;
use crate::tessellate::Tessellation;
use approx::assert_relative_eq;

fn tessellate(solid: BaseSolid, frequency: u32, center_z: f64) -> Tessellation {
    let e = Ellipsoid::new(DVec3::new(0.0, 0.0, center_z), DVec3::splat(100.0));
    Tessellation::of_polyhedron(&Polyhedron::build(solid, &e), frequency, &e)
}

fn build(t: &Tessellation) -> StrutGraph {
    StrutGraphBuilder::new(0.5).build(&t.points, &t.edges, &t.triangles)
}

#[test]
fn test_octahedron_hemisphere_keeps_top_half() {
    let t = tessellate(BaseSolid::Octahedron, 1, 0.0);
    assert_eq!(t.points.len(), 24);

    let graph = build(&t);
    assert_eq!(graph.nodes.len(), 5);
    assert_eq!(graph.struts.len(), 8);
    assert_eq!(graph.triangles.len(), 4);
    assert!(graph.nodes.iter().all(|n| n.z >= -0.5));
    assert_eq!(graph.remap.len(), 24);
    assert_eq!(graph.remap.iter().filter(|r| r.is_none()).count(), 4);
}

#[test]
fn test_octahedron_struts_form_one_class() {
    let graph = build(&tessellate(BaseSolid::Octahedron, 1, 0.0));
    assert_eq!(graph.classes.len(), 1);
    assert_eq!(graph.classes[0].label, "A");
    assert_eq!(graph.classes[0].count, 8);
    assert_relative_eq!(graph.classes[0].length, 100.0 * 2.0_f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn test_tetrahedron_lattice_collapses_to_shared_points() {
    // raised center keeps the whole solid above the plane
    let t = tessellate(BaseSolid::Tetrahedron, 2, 200.0);
    assert_eq!(t.points.len(), 4 * 6);

    let graph = build(&t);
    assert_eq!(graph.nodes.len(), 10);
    // Euler: V - E + F = 2
    assert_eq!(graph.struts.len(), 24);
    assert_eq!(graph.triangles.len(), 16);
}

#[test]
fn test_reversed_edges_collapse() {
    let points = [DVec3::new(0.0, 0.0, 1.0), DVec3::new(5.0, 0.0, 1.0)];
    let edges = [StrutEdge::new(0, 1), StrutEdge::new(1, 0)];
    let graph = StrutGraphBuilder::new(0.5).build(&points, &edges, &[]);
    assert_eq!(graph.struts.len(), 1);
}

#[test]
fn test_edges_collapse_by_position() {
    // the same physical strut emitted by two faces with distinct raw indices
    let points = [
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(5.0, 0.0, 1.0),
        DVec3::new(5.0, 0.1, 1.0),
        DVec3::new(0.0, 0.1, 1.0),
    ];
    let edges = [StrutEdge::new(0, 1), StrutEdge::new(2, 3)];
    let graph = StrutGraphBuilder::new(0.5).build(&points, &edges, &[]);
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.struts.len(), 1);
    assert_eq!(graph.remap, vec![Some(0), Some(1), Some(1), Some(0)]);
}

#[test]
fn test_edge_with_one_end_below_is_dropped() {
    let points = [DVec3::new(0.0, 0.0, 1.0), DVec3::new(5.0, 0.0, -3.0)];
    let graph = StrutGraphBuilder::new(0.5).build(&points, &[StrutEdge::new(0, 1)], &[]);
    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.struts.is_empty());
}

#[test]
fn test_point_within_tolerance_below_plane_is_kept() {
    let points = [DVec3::new(0.0, 0.0, 1.0), DVec3::new(5.0, 0.0, -0.4)];
    let graph = StrutGraphBuilder::new(0.5).build(&points, &[StrutEdge::new(0, 1)], &[]);
    assert_eq!(graph.struts.len(), 1);
}

#[test]
fn test_rebuild_is_idempotent() {
    let graph = build(&tessellate(BaseSolid::Icosahedron, 3, 0.0));
    let again = StrutGraphBuilder::new(0.5).build(&graph.nodes, &graph.struts, &graph.triangles);

    assert_eq!(again.nodes, graph.nodes);
    assert_eq!(again.struts.len(), graph.struts.len());
    assert_eq!(again.triangles.len(), graph.triangles.len());
    assert_eq!(again.classes, graph.classes);
}

#[test]
fn test_classes_are_sorted_and_cover_every_strut() {
    let graph = build(&tessellate(BaseSolid::Icosahedron, 3, 0.0));
    assert!(graph.classes.len() > 1);
    assert!(graph
        .classes
        .windows(2)
        .all(|w| w[0].length < w[1].length));
    let total: usize = graph.classes.iter().map(|c| c.count).sum();
    assert_eq!(total, graph.struts.len());
    assert_eq!(graph.strut_class.len(), graph.struts.len());

    for (strut, &class) in graph.struts.iter().zip(&graph.strut_class) {
        assert!((graph.strut_length(strut) - graph.classes[class].length).abs() < 0.5);
    }
}

#[test]
fn test_mean_strut_length() {
    let points = [DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(2.0, 4.0, 0.0)];
    let edges = [StrutEdge::new(0, 1), StrutEdge::new(1, 2)];
    let graph = StrutGraphBuilder::new(0.5).build(&points, &edges, &[]);
    assert_relative_eq!(graph.mean_strut_length(), 3.0);
    assert_eq!(StrutGraph::default().mean_strut_length(), 0.0);
}

#[test]
fn test_class_labels() {
    assert_eq!(class_label(0), "A");
    assert_eq!(class_label(25), "Z");
    assert_eq!(class_label(26), "AA");
    assert_eq!(class_label(27), "AB");
}
