//! # Clip Tests

use super::*;
use crate::ellipsoid::Ellipsoid;
use crate::params::BaseSolid;
use crate::polyhedron::Polyhedron;
use approx::assert_relative_eq;

fn tessellation(points: Vec<DVec3>, triangles: Vec<[usize; 3]>) -> Tessellation {
    Tessellation {
        points,
        edges: Vec::new(),
        triangles: triangles
            .into_iter()
            .map(|[a, b, c]| TriangleRecord::new(a, b, c))
            .collect(),
        faces: Vec::new(),
    }
}

#[test]
fn test_whole_triangle_is_retained() {
    let t = tessellation(
        vec![
            DVec3::new(0.0, 0.0, 5.0),
            DVec3::new(10.0, 0.0, 5.0),
            DVec3::new(0.0, 10.0, 8.0),
        ],
        vec![[0, 1, 2]],
    );
    let result = ClipProcessor::new(0.5).process(&t);
    assert_eq!(result.retained, vec![TriangleRecord::new(0, 1, 2)]);
    assert_eq!(result.faces.len(), 1);
    assert_eq!(result.faces[0].kind, ClipKind::Whole);
    assert_eq!(result.report.whole, 1);
}

#[test]
fn test_straddling_triangle_becomes_quad() {
    let t = tessellation(
        vec![
            DVec3::new(5.0, 5.0, -10.0),
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::new(10.0, 0.0, 10.0),
        ],
        vec![[0, 1, 2]],
    );
    let result = ClipProcessor::new(0.5).process(&t);
    assert!(result.retained.is_empty());
    assert_eq!(result.report.straddling, 1);

    let face = &result.faces[0];
    assert_eq!(face.kind, ClipKind::Straddle);
    assert_eq!(face.polygon.len(), 4);
    assert_eq!(face.polygon[0], DVec3::new(0.0, 0.0, 10.0));
    assert_eq!(face.polygon[1], DVec3::new(10.0, 0.0, 10.0));
    assert_relative_eq!(face.polygon[2].x, 7.5);
    assert_relative_eq!(face.polygon[2].y, 2.5);
    assert_relative_eq!(face.polygon[3].x, 2.5);
    for p in &face.polygon[2..] {
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_straddle_with_vertex_on_plane_is_triangle() {
    let t = tessellation(
        vec![
            DVec3::new(5.0, 5.0, -10.0),
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 10.0),
        ],
        vec![[0, 1, 2]],
    );
    let result = ClipProcessor::new(0.5).process(&t);
    assert_eq!(result.faces[0].polygon.len(), 3);
}

#[test]
fn test_sliver_joins_straddling_neighbour() {
    let t = tessellation(
        vec![
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::new(-5.0, 5.0, -10.0),
            DVec3::new(5.0, 5.0, -10.0),
            DVec3::new(10.0, 0.0, 10.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    );
    let result = ClipProcessor::new(0.5).process(&t);
    assert_eq!(result.report.slivers, 1);
    assert_eq!(result.report.straddling, 1);
    assert_eq!(result.report.unresolved, 0);
    assert_eq!(
        result.joins,
        vec![ClipJoin {
            sliver: TriangleRecord::new(0, 1, 2),
            partner: TriangleRecord::new(0, 2, 3),
        }]
    );

    let sliver = result
        .faces
        .iter()
        .find(|f| f.kind == ClipKind::Sliver)
        .unwrap();
    assert_eq!(sliver.polygon[0], DVec3::new(0.0, 0.0, 10.0));
    assert_relative_eq!(sliver.polygon[1].x, -2.5);
    assert_relative_eq!(sliver.polygon[2].x, 2.5);
}

#[test]
fn test_sliver_partner_matched_by_position() {
    // The partner uses its own copies of the shared points
    let t = tessellation(
        vec![
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::new(-5.0, 5.0, -10.0),
            DVec3::new(5.0, 5.0, -10.0),
            DVec3::new(0.1, 0.0, 10.0),
            DVec3::new(5.0, 5.1, -10.0),
            DVec3::new(10.0, 0.0, 10.0),
        ],
        vec![[0, 1, 2], [3, 4, 5]],
    );
    let result = ClipProcessor::new(0.5).process(&t);
    assert_eq!(result.joins.len(), 1);
}

#[test]
fn test_lonely_sliver_is_unresolved() {
    let t = tessellation(
        vec![
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::new(-5.0, 5.0, -10.0),
            DVec3::new(5.0, 5.0, -10.0),
        ],
        vec![[0, 1, 2]],
    );
    let result = ClipProcessor::new(0.5).process(&t);
    assert_eq!(result.report.unresolved, 1);
    assert!(result.faces.is_empty());
    assert!(result.joins.is_empty());
}

#[test]
fn test_triangle_below_is_discarded() {
    let t = tessellation(
        vec![
            DVec3::new(0.0, 0.0, -5.0),
            DVec3::new(10.0, 0.0, -5.0),
            DVec3::new(0.0, 10.0, -0.6),
        ],
        vec![[0, 1, 2]],
    );
    let result = ClipProcessor::new(0.5).process(&t);
    assert_eq!(result.report.discarded, 1);
    assert!(result.faces.is_empty());
}

#[test]
fn test_tolerance_keeps_vertex_just_under_plane() {
    let clip = ClipProcessor::new(0.5);
    assert!(clip.is_above(DVec3::new(0.0, 0.0, -0.4)));
    assert!(!clip.is_above(DVec3::new(0.0, 0.0, -0.6)));
}

#[test]
fn test_octahedron_hemisphere() {
    let e = Ellipsoid::new(DVec3::ZERO, DVec3::splat(100.0));
    let poly = Polyhedron::build(BaseSolid::Octahedron, &e);
    let t = Tessellation::of_polyhedron(&poly, 1, &e);
    let result = ClipProcessor::new(0.5).process(&t);

    assert_eq!(result.report.whole, 4);
    assert_eq!(result.retained.len(), 4);
    // Lower faces touch the plane along the equator only
    assert_eq!(result.faces.len(), 4);
}

#[test]
fn test_icosahedron_faces_stay_above_plane() {
    let e = Ellipsoid::new(DVec3::ZERO, DVec3::new(100.0, 100.0, 70.0));
    let poly = Polyhedron::build(BaseSolid::Icosahedron, &e);
    let t = Tessellation::of_polyhedron(&poly, 3, &e);
    let result = ClipProcessor::new(0.5).process(&t);

    let r = result.report;
    assert_eq!(
        r.whole + r.straddling + r.slivers + r.discarded,
        t.triangles.len()
    );
    assert!(r.straddling > 0);
    for face in &result.faces {
        assert!(face.polygon.len() >= 3);
        assert!(face.polygon.iter().all(|p| p.z >= -0.5));
    }
}

#[test]
fn test_coverage_names_the_odd_corner() {
    assert_eq!(Coverage::of([true; 3]), Coverage::Whole);
    assert_eq!(Coverage::of([false; 3]), Coverage::Below);
    for i in 0..3 {
        let mut flags = [true; 3];
        flags[i] = false;
        assert_eq!(Coverage::of(flags), Coverage::Straddle { below: i });

        let mut flags = [false; 3];
        flags[i] = true;
        assert_eq!(Coverage::of(flags), Coverage::Sliver { apex: i });
    }
}
