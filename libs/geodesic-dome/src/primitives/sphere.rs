//! # Sphere Primitive
//!
//! Latitude/longitude sphere for sphere hubs. One master mesh is built per
//! radius and translated to each hub.

use crate::error::DomeError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere mesh centered at the origin.
///
/// Rings sit at polar angles `PI * (i + 0.5) / rings` with
/// `rings = (segments + 1) / 2`, so there are no pole vertices; the first
/// and last rings are closed by polygon fans.
///
/// # Example
///
/// ```rust
/// use geodesic_dome::primitives::create_sphere;
///
/// let mesh = create_sphere(2.25, 16, [1.0; 4]).unwrap();
/// assert_eq!(mesh.vertex_count(), 8 * 16);
/// ```
pub fn create_sphere(radius: f64, segments: u32, color: [f32; 4]) -> Result<Mesh, DomeError> {
    if radius <= 0.0 {
        return Err(DomeError::degenerate(format!(
            "sphere radius must be positive: {radius}"
        )));
    }
    if segments < 3 {
        return Err(DomeError::degenerate(format!(
            "sphere segments must be at least 3: {segments}"
        )));
    }

    let num_rings = (segments + 1) / 2;
    let mut mesh = Mesh::with_capacity(
        (num_rings * segments) as usize,
        (2 * num_rings * segments) as usize,
    );

    let rings: Vec<Vec<u32>> = (0..num_rings)
        .map(|i| {
            let phi = PI * (i as f64 + 0.5) / num_rings as f64;
            let ring_radius = radius * phi.sin();
            let z = radius * phi.cos();
            (0..segments)
                .map(|j| {
                    let theta = 2.0 * PI * j as f64 / segments as f64;
                    mesh.add_vertex(
                        DVec3::new(ring_radius * theta.cos(), ring_radius * theta.sin(), z),
                        color,
                    )
                })
                .collect()
        })
        .collect();

    let top = &rings[0];
    for j in 1..segments as usize - 1 {
        mesh.add_triangle(top[0], top[j], top[j + 1]);
    }

    for pair in rings.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        for j in 0..segments as usize {
            let next = (j + 1) % segments as usize;
            mesh.add_triangle(a[j], b[j], b[next]);
            mesh.add_triangle(a[j], b[next], a[next]);
        }
    }

    let bottom = &rings[rings.len() - 1];
    for j in 1..segments as usize - 1 {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_validates() {
        let mesh = create_sphere(5.0, 16, [1.0; 4]).unwrap();
        assert!(mesh.triangle_count() > 0);
        assert!(mesh.validate());
    }

    #[test]
    fn test_sphere_vertices_on_radius() {
        let mesh = create_sphere(2.25, 12, [1.0; 4]).unwrap();
        for v in mesh.vertices() {
            assert!((v.length() - 2.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(create_sphere(0.0, 16, [1.0; 4]).is_err());
        assert!(create_sphere(-5.0, 16, [1.0; 4]).is_err());
    }

    #[test]
    fn test_sphere_too_few_segments() {
        assert!(matches!(
            create_sphere(5.0, 2, [1.0; 4]),
            Err(DomeError::DegenerateGeometry { .. })
        ));
    }
}
