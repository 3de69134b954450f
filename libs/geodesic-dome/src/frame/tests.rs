use super::*;
use crate::strut_graph::StrutGraphBuilder;
use crate::StrutEdge;
use approx::assert_relative_eq;

const SIDE: f64 = 60.0;

fn triangle() -> (DVec3, DVec3, DVec3) {
    let h = SIDE / 2.0 * 3.0_f64.sqrt();
    (
        DVec3::new(-SIDE / 2.0, 0.0, 100.0),
        DVec3::new(SIDE / 2.0, 0.0, 100.0),
        DVec3::new(0.0, h, 100.0),
    )
}

fn builder(separation: f64) -> FrameBuilder {
    FrameBuilder::new(
        &FrameSpec { separation },
        &StrutKind::default_rect(),
        DVec3::ZERO,
        0.5,
    )
}

#[test]
fn test_wide_separation_leaves_center_member() {
    let (a, b, c) = triangle();
    let members = builder(16.0).triangle_members(a, b, c);
    assert_eq!(members.len(), 1);

    let m = &members[0];
    assert_eq!(m.material, Material::FrameMember);
    // member width is the strut thickness
    assert_relative_eq!(m.corners[0].distance(m.corners[1]), 1.5, epsilon = 1e-9);
    // bottom corners sit on the base strut's inner side
    assert_relative_eq!(m.corners[0].y, 0.75, epsilon = 1e-9);
    assert_relative_eq!(m.corners[1].y, 0.75, epsilon = 1e-9);
}

#[test]
fn test_narrow_separation_widens_to_strut_width() {
    let (a, b, c) = triangle();
    let narrow = builder(1e-3).triangle_members(a, b, c);
    let flush = builder(1.5).triangle_members(a, b, c);
    assert!(!narrow.is_empty());
    assert!(narrow.len() <= 37);
    assert_eq!(narrow.len(), flush.len());
}

#[test]
fn test_members_are_symmetric_about_midline() {
    let (a, b, c) = triangle();
    let members = builder(8.0).triangle_members(a, b, c);
    assert_eq!(members.len(), 5);

    let mut centers: Vec<f64> = members
        .iter()
        .map(|m| (m.corners[0].x + m.corners[1].x) / 2.0)
        .collect();
    centers.sort_by(|x, y| x.total_cmp(y));
    for (got, want) in centers.iter().zip([-16.0, -8.0, 0.0, 8.0, 16.0]) {
        assert_relative_eq!(*got, want, epsilon = 1e-9);
    }
}

#[test]
fn test_member_depth_points_toward_center() {
    let (a, b, c) = triangle();
    for m in builder(8.0).triangle_members(a, b, c) {
        for i in 0..4 {
            assert_relative_eq!(m.corners[i].z, 100.0, epsilon = 1e-9);
            assert_relative_eq!(m.corners[i + 4].z, 96.5, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_member_tops_stay_inside_side_struts() {
    let (a, b, c) = triangle();
    let side_b = inner_side_plane(c, b, a, 0.75).unwrap();
    let side_a = inner_side_plane(c, a, b, 0.75).unwrap();
    for m in builder(8.0).triangle_members(a, b, c) {
        for p in &m.corners[..4] {
            assert!(side_a.signed_distance(*p) > -1e-9);
            assert!(side_b.signed_distance(*p) > -1e-9);
        }
        // tops above bottoms
        assert!(m.corners[3].y > m.corners[0].y);
        assert!(m.corners[2].y > m.corners[1].y);
    }
}

#[test]
fn test_narrow_triangle_has_no_members() {
    let a = DVec3::new(-5.0, 0.0, 100.0);
    let b = DVec3::new(5.0, 0.0, 100.0);
    let c = DVec3::new(0.0, 30.0, 100.0);
    assert!(builder(16.0).triangle_members(a, b, c).is_empty());
}

#[test]
fn test_degenerate_triangle_has_no_members() {
    let a = DVec3::new(-30.0, 0.0, 100.0);
    let b = DVec3::new(30.0, 0.0, 100.0);
    let c = DVec3::new(60.0, 0.0, 100.0);
    assert!(builder(8.0).triangle_members(a, b, c).is_empty());
}

#[test]
fn test_build_walks_graph_triangles() {
    let (a, b, c) = triangle();
    let edges = [StrutEdge::new(0, 1), StrutEdge::new(1, 2), StrutEdge::new(2, 0)];
    let graph = StrutGraphBuilder::new(0.5).build(
        &[a, b, c],
        &edges,
        &[crate::TriangleRecord::new(0, 1, 2)],
    );
    assert_eq!(builder(8.0).build(&graph).len(), 5);
}

#[test]
fn test_base_frame_plates_hang_below_ring() {
    let points = [
        DVec3::new(100.0, 0.0, 0.0),
        DVec3::new(0.0, 100.0, 0.0),
        DVec3::new(0.0, 0.0, 100.0),
    ];
    let edges = [StrutEdge::new(0, 1), StrutEdge::new(1, 2), StrutEdge::new(2, 0)];
    let graph = StrutGraphBuilder::new(0.5).build(&points, &edges, &[]);
    let ring = BaseRing {
        nodes: vec![0, 1],
        z: 0.0,
    };

    let plates = build_base_frame(&graph, &ring, 1.5, 5.0);
    assert_eq!(plates.len(), 1);
    let c = plates[0].corners;
    assert_eq!(plates[0].material, Material::BaseFrame);
    assert_relative_eq!(c[2].z, -5.0);
    assert_relative_eq!(c[3].z, -5.0);
    assert_relative_eq!(c[4].x, 98.5);
    assert_relative_eq!(c[5].y, 98.5);

    assert!(build_base_frame(&graph, &ring, 1.5, 0.0).is_empty());
}
