//! # Tube Primitive
//!
//! Cylinders and hollow tubes between two arbitrary points: cylinder hubs
//! (with a bore) and round struts (solid).

use crate::error::DomeError;
use crate::mesh::Mesh;
use glam::{DQuat, DVec3};
use std::f64::consts::PI;

/// Creates a tube from `start` to `end`.
///
/// `inner_radius == 0` gives a solid cylinder with fan caps; otherwise the
/// ends are annuli and the bore is lined with inward-facing walls.
///
/// # Example
///
/// ```rust
/// use geodesic_dome::primitives::create_tube;
/// use glam::DVec3;
///
/// let rod = create_tube(DVec3::ZERO, DVec3::new(0.0, 10.0, 0.0), 1.0, 0.0, 8, [1.0; 4]).unwrap();
/// assert_eq!(rod.vertex_count(), 16);
///
/// let hub = create_tube(DVec3::ZERO, DVec3::Z, 2.25, 2.0, 8, [1.0; 4]).unwrap();
/// assert_eq!(hub.vertex_count(), 32);
/// ```
pub fn create_tube(
    start: DVec3,
    end: DVec3,
    outer_radius: f64,
    inner_radius: f64,
    segments: u32,
    color: [f32; 4],
) -> Result<Mesh, DomeError> {
    let Some(axis) = (end - start).try_normalize() else {
        return Err(DomeError::degenerate(format!(
            "tube axis has zero length at {start}"
        )));
    };
    if outer_radius <= 0.0 {
        return Err(DomeError::degenerate(format!(
            "tube radius must be positive: {outer_radius}"
        )));
    }
    if inner_radius < 0.0 || inner_radius >= outer_radius {
        return Err(DomeError::degenerate(format!(
            "tube bore {inner_radius} does not fit radius {outer_radius}"
        )));
    }
    if segments < 3 {
        return Err(DomeError::degenerate(format!(
            "tube segments must be at least 3: {segments}"
        )));
    }

    let rotation = DQuat::from_rotation_arc(DVec3::Z, axis);
    let n = segments as usize;
    let mut mesh = Mesh::new();

    let mut ring = |radius: f64, origin: DVec3| -> Vec<u32> {
        (0..n)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / n as f64;
                let local = DVec3::new(radius * theta.cos(), radius * theta.sin(), 0.0);
                mesh.add_vertex(origin + rotation * local, color)
            })
            .collect()
    };
    let outer_bottom = ring(outer_radius, start);
    let outer_top = ring(outer_radius, end);
    let inner = (inner_radius > 0.0).then(|| (ring(inner_radius, start), ring(inner_radius, end)));

    for j in 0..n {
        let next = (j + 1) % n;
        mesh.add_triangle(outer_bottom[j], outer_bottom[next], outer_top[next]);
        mesh.add_triangle(outer_bottom[j], outer_top[next], outer_top[j]);
    }

    match inner {
        None => {
            for j in 1..n - 1 {
                mesh.add_triangle(outer_bottom[0], outer_bottom[j + 1], outer_bottom[j]);
                mesh.add_triangle(outer_top[0], outer_top[j], outer_top[j + 1]);
            }
        }
        Some((inner_bottom, inner_top)) => {
            for j in 0..n {
                let next = (j + 1) % n;
                // bore wall faces the axis
                mesh.add_triangle(inner_bottom[j], inner_top[next], inner_bottom[next]);
                mesh.add_triangle(inner_bottom[j], inner_top[j], inner_top[next]);
                // annular caps
                mesh.add_triangle(outer_bottom[j], inner_bottom[next], outer_bottom[next]);
                mesh.add_triangle(outer_bottom[j], inner_bottom[j], inner_bottom[next]);
                mesh.add_triangle(outer_top[j], outer_top[next], inner_top[next]);
                mesh.add_triangle(outer_top[j], inner_top[next], inner_top[j]);
            }
        }
    }

    Ok(mesh)
}
