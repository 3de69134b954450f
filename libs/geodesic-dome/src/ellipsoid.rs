//! # Ellipsoid Surface
//!
//! Spherical parametrization of the dome surface. Every lattice point is
//! pushed along its ray from the dome center until it reaches the boundary
//! radius given by the semi-axes.

use glam::DVec3;

/// An axis-aligned ellipsoid centered at `center` with semi-axes `radii`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub center: DVec3,
    pub radii: DVec3,
}

impl Ellipsoid {
    pub fn new(center: DVec3, radii: DVec3) -> Self {
        Self { center, radii }
    }

    /// Boundary radius along the direction with azimuth `theta` (about Z)
    /// and polar angle `phi` (from +Z):
    ///
    /// `r = abc / sqrt(b²c² cos²θ sin²φ + a²c² sin²θ sin²φ + a²b² cos²φ)`
    ///
    /// # Example
    ///
    /// ```rust
    /// use geodesic_dome::ellipsoid::Ellipsoid;
    /// use glam::DVec3;
    ///
    /// let e = Ellipsoid::new(DVec3::ZERO, DVec3::new(100.0, 50.0, 25.0));
    /// let pole = e.radius_at(0.0, 0.0);
    /// assert!((pole - 25.0).abs() < 1e-9);
    /// ```
    pub fn radius_at(&self, theta: f64, phi: f64) -> f64 {
        let (a, b, c) = (self.radii.x, self.radii.y, self.radii.z);
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();
        let denom = (b * b * c * c * cos_t * cos_t * sin_p * sin_p
            + a * a * c * c * sin_t * sin_t * sin_p * sin_p
            + a * a * b * b * cos_p * cos_p)
            .sqrt();
        a * b * c / denom
    }

    /// Projects `p` onto the surface along the ray from the center.
    ///
    /// The center itself has no direction and is returned unchanged.
    pub fn project(&self, p: DVec3) -> DVec3 {
        let v = p - self.center;
        let Some(dir) = v.try_normalize() else {
            return p;
        };
        let (theta, phi) = spherical_angles(v);
        self.center + dir * self.radius_at(theta, phi)
    }

    /// Unit vector from the center toward `p`.
    pub fn radial(&self, p: DVec3) -> DVec3 {
        (p - self.center).normalize_or_zero()
    }

    /// Horizontal distance from the Z axis of the surface point at height
    /// `z` in the horizontal direction `dir`.
    ///
    /// Returns `None` when `z` lies outside the ellipsoid's vertical extent.
    pub fn horizontal_radius(&self, z: f64, dir: DVec3) -> Option<f64> {
        let dz = (z - self.center.z) / self.radii.z;
        let remaining = 1.0 - dz * dz;
        if remaining < 0.0 {
            return None;
        }
        let flat = DVec3::new(dir.x, dir.y, 0.0).try_normalize()?;
        let scale = (flat.x / self.radii.x).powi(2) + (flat.y / self.radii.y).powi(2);
        Some((remaining / scale).sqrt())
    }
}

/// Spherical angles of `v`: `(theta, phi)` with theta the azimuth about the
/// Z axis and phi the polar angle from +Z.
pub fn spherical_angles(v: DVec3) -> (f64, f64) {
    let theta = v.y.atan2(v.x);
    let len = v.length();
    let phi = if len > 0.0 {
        (v.z / len).clamp(-1.0, 1.0).acos()
    } else {
        0.0
    };
    (theta, phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn squashed() -> Ellipsoid {
        Ellipsoid::new(DVec3::new(0.0, 0.0, -20.0), DVec3::new(100.0, 60.0, 40.0))
    }

    #[test]
    fn test_radius_on_axes() {
        let e = squashed();
        assert_relative_eq!(e.radius_at(0.0, FRAC_PI_2), 100.0, max_relative = 1e-12);
        assert_relative_eq!(e.radius_at(FRAC_PI_2, FRAC_PI_2), 60.0, max_relative = 1e-12);
        assert_relative_eq!(e.radius_at(1.3, 0.0), 40.0, max_relative = 1e-12);
    }

    #[test]
    fn test_sphere_radius_is_constant() {
        let e = Ellipsoid::new(DVec3::ZERO, DVec3::splat(150.0));
        for (theta, phi) in [(0.1, 0.2), (2.0, 1.0), (-2.5, 3.0)] {
            assert_relative_eq!(e.radius_at(theta, phi), 150.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_projected_point_satisfies_implicit_equation() {
        let e = squashed();
        let p = e.project(DVec3::new(12.0, -7.0, 3.0));
        let q = (p - e.center) / e.radii;
        assert_relative_eq!(q.length_squared(), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_project_keeps_direction() {
        let e = squashed();
        let input = DVec3::new(5.0, 5.0, -10.0);
        let p = e.project(input);
        assert_relative_eq!(
            e.radial(p).dot(e.radial(input)),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_project_center_is_identity() {
        let e = squashed();
        assert_eq!(e.project(e.center), e.center);
    }

    #[test]
    fn test_horizontal_radius() {
        let e = Ellipsoid::new(DVec3::ZERO, DVec3::new(100.0, 50.0, 10.0));
        assert_relative_eq!(e.horizontal_radius(0.0, DVec3::X).unwrap(), 100.0);
        assert_relative_eq!(e.horizontal_radius(0.0, DVec3::Y).unwrap(), 50.0);
        assert!(e.horizontal_radius(11.0, DVec3::X).is_none());
        assert!(e.horizontal_radius(0.0, DVec3::Z).is_none());
    }
}
