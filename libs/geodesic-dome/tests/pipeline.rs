use config::constants::ExportConfig;
use geodesic_dome::scene::RecordingSink;
use geodesic_dome::{
    draw, BaseSolid, DomeConfig, DomeError, FrameSpec, HubKind, Material, StrutKind,
};
use glam::DVec3;

fn icosa(frequency: u32) -> DomeConfig {
    DomeConfig {
        frequency,
        solid: BaseSolid::Icosahedron,
        ..DomeConfig::default()
    }
}

#[test]
fn invalid_config_builds_nothing() {
    let err = draw(&DomeConfig {
        radii: DVec3::new(150.0, 0.0, 150.0),
        ..DomeConfig::default()
    })
    .unwrap_err();
    assert_eq!(err.field(), Some("radius_y"));
    assert!(matches!(err, DomeError::InvalidConfiguration { .. }));
}

#[test]
fn identical_config_identical_dome() {
    let cfg = DomeConfig {
        draw_faces: true,
        frame: Some(FrameSpec::default()),
        ..icosa(3)
    };
    assert_eq!(draw(&cfg).unwrap(), draw(&cfg).unwrap());
}

#[test]
fn struts_stay_above_plane() {
    let cfg = icosa(4);
    let dome = draw(&cfg).unwrap();
    for s in &dome.struts {
        assert!(dome.nodes[s.a].z >= -cfg.tolerance);
        assert!(dome.nodes[s.b].z >= -cfg.tolerance);
    }
}

#[test]
fn one_hub_per_node() {
    let dome = draw(&icosa(2)).unwrap();
    assert_eq!(dome.hubs.len(), dome.nodes.len());
    for hub in &dome.hubs {
        assert!((hub.orientation.length() - 1.0).abs() < 1e-12);
    }

    let bare = draw(&DomeConfig {
        hub: HubKind::None,
        ..icosa(2)
    })
    .unwrap();
    assert!(bare.hubs.is_empty());
}

#[test]
fn strut_kinds_select_solids() {
    let rect = draw(&icosa(2)).unwrap();
    assert_eq!(rect.solid_count(Material::Strut), rect.struts.len());
    assert!(rect.cylinders.is_empty());

    let rods = draw(&DomeConfig {
        strut: StrutKind::default_cylinder(),
        ..icosa(2)
    })
    .unwrap();
    assert_eq!(rods.cylinders.len(), rods.struts.len());
    assert_eq!(rods.solid_count(Material::Strut), 0);

    let none = draw(&DomeConfig {
        draw_struts: false,
        ..icosa(2)
    })
    .unwrap();
    assert!(none.solids.is_empty());
    assert!(none.cylinders.is_empty());
}

#[test]
fn frame_members_fill_triangles() {
    let dome = draw(&DomeConfig {
        frame: Some(FrameSpec::default()),
        ..icosa(2)
    })
    .unwrap();
    assert!(!dome.triangles.is_empty());
    assert!(dome.solid_count(Material::FrameMember) >= dome.triangles.len());
}

#[test]
fn strut_classes_cover_every_strut() {
    let dome = draw(&icosa(3)).unwrap();
    let total: usize = dome.classes.iter().map(|c| c.count).sum();
    assert_eq!(total, dome.struts.len());
    assert_eq!(dome.classes[0].label, "A");
}

#[test]
fn flattened_base_is_level() {
    let dome = draw(&DomeConfig {
        flatten_base: true,
        fraction_num: 3,
        fraction_den: 8,
        ..icosa(3)
    })
    .unwrap();
    assert!(dome.base_ring.len() >= 3);
    let z = dome.nodes[dome.base_ring[0]].z;
    for &i in &dome.base_ring {
        assert_eq!(dome.nodes[i].z, z);
    }
}

#[test]
fn base_frame_hangs_from_ring() {
    let dome = draw(&DomeConfig {
        solid: BaseSolid::Octahedron,
        frequency: 4,
        flatten_base: true,
        base_frame_height: 5.0,
        ..DomeConfig::default()
    })
    .unwrap();
    // the equator is the ring: 4 base edges of 4 struts each
    assert_eq!(dome.base_ring.len(), 16);
    assert_eq!(dome.solid_count(Material::BaseFrame), 16);
    for solid in dome.solids.iter().filter(|s| s.material == Material::BaseFrame) {
        assert!((solid.corners[2].z + 5.0).abs() < 1e-9);
    }
}

#[test]
fn faces_are_optional_and_above_plane() {
    let plain = draw(&icosa(3)).unwrap();
    assert!(plain.faces.is_empty());
    assert!(plain.base_faces.is_empty());

    let cfg = DomeConfig {
        draw_faces: true,
        draw_base_faces: true,
        ..icosa(3)
    };
    let dome = draw(&cfg).unwrap();
    assert_eq!(dome.base_faces.len(), 20);
    assert!(dome.faces.len() >= dome.triangles.len());
    for face in &dome.faces {
        assert!(face.polygon.len() >= 3);
        assert!(face.polygon.iter().all(|p| p.z >= -cfg.tolerance));
    }
}

#[test]
fn emit_reaches_every_shape() {
    let dome = draw(&DomeConfig {
        draw_faces: true,
        frame: Some(FrameSpec::default()),
        ..icosa(2)
    })
    .unwrap();
    let mut sink = RecordingSink::new();
    dome.emit(&mut sink);

    assert_eq!(sink.solids.len(), dome.solids.len());
    assert_eq!(sink.hubs.len(), dome.hubs.len());
    assert_eq!(sink.faces.len(), dome.faces.len());
    assert_eq!(sink.count(Material::Strut), dome.solid_count(Material::Strut));
}

#[test]
fn mesh_export_covers_struts_and_hubs() {
    let dome = draw(&icosa(2)).unwrap();
    let mesh = dome.to_mesh(ExportConfig::default());
    assert!(mesh.triangle_count() > 12 * dome.struts.len());
    assert!(mesh.validate());
}

#[test]
fn geometry_serializes_to_json() {
    let dome = draw(&icosa(1)).unwrap();
    let value = serde_json::to_value(&dome).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), dome.nodes.len());
    assert_eq!(value["hubs"][0]["kind"]["kind"], "cylinder");
}
