//! # Mesh Export
//!
//! A [`SceneSink`] that triangulates every shape into one colored [`Mesh`],
//! and a Wavefront OBJ writer for the result.

use crate::hubs::HubPlacement;
use crate::mesh::Mesh;
use crate::params::HubKind;
use crate::primitives::{create_sphere, create_tube};
use crate::scene::{Material, SceneSink};
use crate::struts::CylinderStrut;
use config::constants::{ExportConfig, FACE_COLOR, HUB_COLOR, STRUT_COLOR};
use glam::DVec3;
use std::io::{self, Write};

/// Accumulates scene shapes into a single mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::ExportConfig;
/// use geodesic_dome::export::MeshSink;
/// use geodesic_dome::scene::SceneSink;
/// use glam::DVec3;
///
/// let mut sink = MeshSink::new(ExportConfig::default());
/// sink.add_face(&[DVec3::ZERO, DVec3::X, DVec3::Y]);
/// assert_eq!(sink.finish().triangle_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MeshSink {
    config: ExportConfig,
    mesh: Mesh,
    /// Master sphere per radius bit pattern.
    spheres: Vec<(u64, Mesh)>,
    skipped: usize,
}

impl MeshSink {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            mesh: Mesh::new(),
            spheres: Vec::new(),
            skipped: 0,
        }
    }

    /// Shapes that could not be meshed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Welds the accumulated mesh and returns it.
    pub fn finish(mut self) -> Mesh {
        let welded = self.mesh.weld(self.config.weld_tolerance);
        log::debug!(
            "mesh export: {} vertices ({} welded), {} triangles, {} shapes skipped",
            self.mesh.vertex_count(),
            welded,
            self.mesh.triangle_count(),
            self.skipped
        );
        self.mesh
    }

    fn master_sphere(&mut self, radius: f64) -> Option<&Mesh> {
        let key = radius.to_bits();
        if let Some(index) = self.spheres.iter().position(|(k, _)| *k == key) {
            return Some(&self.spheres[index].1);
        }
        match create_sphere(radius, self.config.segments_for(radius), HUB_COLOR) {
            Ok(mesh) => {
                self.spheres.push((key, mesh));
                self.spheres.last().map(|(_, mesh)| mesh)
            }
            Err(err) => {
                log::warn!("hub sphere not meshed: {err}");
                None
            }
        }
    }
}

impl SceneSink for MeshSink {
    fn add_solid(&mut self, corners: &[DVec3; 8], material: Material) {
        self.mesh.add_hexahedron(corners, material.color());
    }

    fn add_cylinder(&mut self, cylinder: &CylinderStrut) {
        let segments = self.config.segments_for(cylinder.radius);
        match create_tube(
            cylinder.start,
            cylinder.end,
            cylinder.radius,
            0.0,
            segments,
            STRUT_COLOR,
        ) {
            Ok(mesh) => self.mesh.merge(&mesh),
            Err(err) => {
                log::warn!("cylinder strut not meshed: {err}");
                self.skipped += 1;
            }
        }
    }

    fn add_hub(&mut self, hub: &HubPlacement) {
        match hub.kind {
            HubKind::None => {}
            HubKind::Sphere { radius } => {
                let sphere = self.master_sphere(radius).cloned();
                match sphere {
                    Some(mut sphere) => {
                        sphere.translate(hub.position);
                        self.mesh.merge(&sphere);
                    }
                    None => self.skipped += 1,
                }
            }
            HubKind::Cylinder {
                outer_radius,
                thickness,
                ..
            } => {
                let segments = self.config.segments_for(outer_radius);
                match create_tube(
                    hub.position,
                    hub.inner_end(),
                    outer_radius,
                    outer_radius - thickness,
                    segments,
                    HUB_COLOR,
                ) {
                    Ok(mesh) => self.mesh.merge(&mesh),
                    Err(err) => {
                        log::warn!("cylinder hub not meshed: {err}");
                        self.skipped += 1;
                    }
                }
            }
        }
    }

    fn add_face(&mut self, polygon: &[DVec3]) {
        self.mesh.add_polygon(polygon, FACE_COLOR);
    }
}

/// Writes `mesh` as Wavefront OBJ with per-vertex colors (`v x y z r g b`).
///
/// # Example
///
/// ```rust
/// use geodesic_dome::export::write_obj;
/// use geodesic_dome::mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_polygon(&[DVec3::ZERO, DVec3::X, DVec3::Y], [1.0, 0.0, 0.0, 1.0]);
/// let mut out = Vec::new();
/// write_obj(&mesh, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("f 1 2 3"));
/// ```
pub fn write_obj<W: Write>(mesh: &Mesh, mut out: W) -> io::Result<()> {
    writeln!(out, "# geodesic dome")?;
    writeln!(
        out,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    for (v, c) in mesh.vertices().iter().zip(mesh.colors()) {
        writeln!(
            out,
            "v {:.6} {:.6} {:.6} {:.3} {:.3} {:.3}",
            v.x, v.y, v.z, c[0], c[1], c[2]
        )?;
    }
    for [a, b, c] in mesh.triangles() {
        writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_hub(position: DVec3) -> HubPlacement {
        HubPlacement {
            position,
            orientation: position.normalize(),
            kind: HubKind::Sphere { radius: 2.0 },
        }
    }

    #[test]
    fn test_sphere_hubs_share_master_mesh() {
        let mut sink = MeshSink::new(ExportConfig::default());
        sink.add_hub(&sphere_hub(DVec3::new(0.0, 0.0, 50.0)));
        sink.add_hub(&sphere_hub(DVec3::new(50.0, 0.0, 0.0)));
        assert_eq!(sink.spheres.len(), 1);

        let mesh = sink.finish();
        let (min, max) = mesh.bounding_box();
        assert!((max.x - 52.0).abs() < 0.1);
        assert!((max.z - 52.0).abs() < 0.1);
        assert!(min.z < 0.0);
    }

    #[test]
    fn test_cylinder_hub_is_hollow_tube() {
        let mut sink = MeshSink::new(ExportConfig::new(1e-6, 8).unwrap());
        sink.add_hub(&HubPlacement {
            position: DVec3::new(0.0, 0.0, 100.0),
            orientation: DVec3::Z,
            kind: HubKind::default_cylinder(),
        });
        let mesh = sink.finish();
        assert_eq!(mesh.vertex_count(), 4 * 8);
        let (min, max) = mesh.bounding_box();
        assert!((min.z - 96.0).abs() < 1e-9);
        assert!((max.z - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_cylinder_is_skipped() {
        let mut sink = MeshSink::new(ExportConfig::default());
        sink.add_cylinder(&CylinderStrut {
            start: DVec3::ONE,
            end: DVec3::ONE,
            radius: 0.75,
        });
        assert_eq!(sink.skipped(), 1);
        assert!(sink.finish().is_empty());
    }

    #[test]
    fn test_solid_uses_material_color() {
        let mut sink = MeshSink::new(ExportConfig::default());
        let corners = [
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        sink.add_solid(&corners, Material::BaseFrame);
        let mesh = sink.finish();
        assert!(mesh.colors().iter().all(|c| *c == Material::BaseFrame.color()));
    }

    #[test]
    fn test_obj_lists_vertices_then_faces() {
        let mut mesh = Mesh::new();
        mesh.add_polygon(&[DVec3::ZERO, DVec3::X, DVec3::ONE, DVec3::Y], [1.0; 4]);
        let mut out = Vec::new();
        write_obj(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let vertices = text.lines().filter(|l| l.starts_with("v ")).count();
        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(vertices, 4);
        assert_eq!(faces, vec!["f 1 2 3", "f 1 3 4"]);
    }
}
