//! # Dome Parameters
//!
//! The fully populated configuration a `draw` call receives. Defaults come
//! from `config::constants`; `validate` fails fast before any geometry is
//! built.

use crate::error::DomeError;
use config::constants::{
    DEFAULT_CYLINDER_HUB_DEPTH, DEFAULT_CYLINDER_HUB_OUTER_RADIUS,
    DEFAULT_CYLINDER_HUB_THICKNESS, DEFAULT_CYLINDER_STRUT_RADIUS, DEFAULT_FRACTION_DEN,
    DEFAULT_FRACTION_NUM, DEFAULT_FRAME_SEPARATION, DEFAULT_FREQUENCY, DEFAULT_RADIUS,
    DEFAULT_SPHERE_HUB_RADIUS, DEFAULT_STRUT_DEPTH, DEFAULT_STRUT_DIST_FROM_HUB,
    DEFAULT_STRUT_THICKNESS, DEFAULT_TOLERANCE, MAX_FREQUENCY,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// SELECTORS
// =============================================================================

/// The platonic solid whose faces are subdivided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseSolid {
    Tetrahedron,
    Octahedron,
    Icosahedron,
}

impl BaseSolid {
    /// Number of faces of the solid (4, 8 or 20).
    pub fn face_count(self) -> usize {
        match self {
            Self::Tetrahedron => 4,
            Self::Octahedron => 8,
            Self::Icosahedron => 20,
        }
    }
}

/// Hub connector placed at every node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HubKind {
    None,
    Sphere {
        radius: f64,
    },
    /// A short tube: `outer_radius` with a bore of `outer_radius - thickness`,
    /// `depth` deep toward the center.
    Cylinder {
        outer_radius: f64,
        thickness: f64,
        depth: f64,
    },
}

impl HubKind {
    /// Sphere hub with the default radius.
    pub fn default_sphere() -> Self {
        Self::Sphere {
            radius: DEFAULT_SPHERE_HUB_RADIUS,
        }
    }

    /// Cylinder hub with the default dimensions.
    pub fn default_cylinder() -> Self {
        Self::Cylinder {
            outer_radius: DEFAULT_CYLINDER_HUB_OUTER_RADIUS,
            thickness: DEFAULT_CYLINDER_HUB_THICKNESS,
            depth: DEFAULT_CYLINDER_HUB_DEPTH,
        }
    }
}

/// Cross-section of the struts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StrutKind {
    /// Rectangular prism, inset `dist_from_hub` from each node.
    Rect {
        dist_from_hub: f64,
        thickness: f64,
        depth: f64,
    },
    /// Round rod, shifted laterally by `offset` and extended past each node
    /// by `extension` (negative shortens it).
    Cylinder {
        radius: f64,
        offset: f64,
        extension: f64,
    },
}

impl StrutKind {
    /// Rectangular strut with the default dimensions.
    pub fn default_rect() -> Self {
        Self::Rect {
            dist_from_hub: DEFAULT_STRUT_DIST_FROM_HUB,
            thickness: DEFAULT_STRUT_THICKNESS,
            depth: DEFAULT_STRUT_DEPTH,
        }
    }

    /// Cylindrical strut with the default dimensions.
    pub fn default_cylinder() -> Self {
        Self::Cylinder {
            radius: DEFAULT_CYLINDER_STRUT_RADIUS,
            offset: 0.0,
            extension: 0.0,
        }
    }

    /// Width of the strut across the dome surface.
    pub fn thickness(&self) -> f64 {
        match *self {
            Self::Rect { thickness, .. } => thickness,
            Self::Cylinder { radius, .. } => 2.0 * radius,
        }
    }

    /// Depth of the strut toward the center.
    pub fn depth(&self) -> f64 {
        match *self {
            Self::Rect { depth, .. } => depth,
            Self::Cylinder { radius, .. } => 2.0 * radius,
        }
    }
}

/// Frame cross-member settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    /// Spacing between neighbouring cross-members.
    pub separation: f64,
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self {
            separation: DEFAULT_FRAME_SEPARATION,
        }
    }
}

// =============================================================================
// DOME CONFIG
// =============================================================================

/// Everything `draw` needs to build a dome.
///
/// # Example
///
/// ```rust
/// use geodesic_dome::{BaseSolid, DomeConfig};
///
/// let config = DomeConfig {
///     frequency: 2,
///     solid: BaseSolid::Icosahedron,
///     ..DomeConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.center().z, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomeConfig {
    pub frequency: u32,
    pub solid: BaseSolid,
    /// Semi-axes `(rx, ry, rz)`.
    pub radii: DVec3,
    pub fraction_num: u32,
    pub fraction_den: u32,
    pub tolerance: f64,
    pub hub: HubKind,
    pub strut: StrutKind,
    pub draw_struts: bool,
    /// Emit the clipped tessellated triangles as faces.
    pub draw_faces: bool,
    /// Emit the faces of the unsubdivided base solid.
    pub draw_base_faces: bool,
    pub frame: Option<FrameSpec>,
    pub flatten_base: bool,
    /// Height of the base frame plates; `0` disables them.
    pub base_frame_height: f64,
}

impl Default for DomeConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            solid: BaseSolid::Octahedron,
            radii: DVec3::splat(DEFAULT_RADIUS),
            fraction_num: DEFAULT_FRACTION_NUM,
            fraction_den: DEFAULT_FRACTION_DEN,
            tolerance: DEFAULT_TOLERANCE,
            hub: HubKind::default_cylinder(),
            strut: StrutKind::default_rect(),
            draw_struts: true,
            draw_faces: false,
            draw_base_faces: false,
            frame: None,
            flatten_base: false,
            base_frame_height: 0.0,
        }
    }
}

impl DomeConfig {
    /// Fraction of the vertical extent kept above the clip plane.
    pub fn fraction(&self) -> f64 {
        self.fraction_num as f64 / self.fraction_den as f64
    }

    /// Dome center. The clip plane is `z = 0`; the center is raised or
    /// lowered so that `fraction` of the ellipsoid lies above it.
    pub fn center(&self) -> DVec3 {
        DVec3::new(0.0, 0.0, self.radii.z * (2.0 * self.fraction() - 1.0))
    }

    /// Checks every field, reporting the first offending one.
    pub fn validate(&self) -> Result<(), DomeError> {
        if self.frequency < 1 {
            return Err(DomeError::invalid("frequency", "must be at least 1"));
        }
        if self.frequency > MAX_FREQUENCY {
            return Err(DomeError::invalid(
                "frequency",
                format!("must be at most {MAX_FREQUENCY}, got {}", self.frequency),
            ));
        }
        for (field, value) in [
            ("radius_x", self.radii.x),
            ("radius_y", self.radii.y),
            ("radius_z", self.radii.z),
        ] {
            positive(field, value)?;
        }
        if self.fraction_den == 0 {
            return Err(DomeError::invalid("fraction_den", "must not be zero"));
        }
        if self.fraction_num == 0 || self.fraction_num > self.fraction_den {
            return Err(DomeError::invalid(
                "fraction_num",
                format!(
                    "fraction {}/{} must lie in (0, 1]",
                    self.fraction_num, self.fraction_den
                ),
            ));
        }
        positive("tolerance", self.tolerance)?;

        match self.hub {
            HubKind::None => {}
            HubKind::Sphere { radius } => positive("sphere_hub_radius", radius)?,
            HubKind::Cylinder {
                outer_radius,
                thickness,
                depth,
            } => {
                positive("cylinder_hub_outer_radius", outer_radius)?;
                positive("cylinder_hub_thickness", thickness)?;
                positive("cylinder_hub_depth", depth)?;
                if thickness >= outer_radius {
                    return Err(DomeError::invalid(
                        "cylinder_hub_thickness",
                        format!("{thickness} leaves no bore in a hub of radius {outer_radius}"),
                    ));
                }
            }
        }

        match self.strut {
            StrutKind::Rect {
                dist_from_hub,
                thickness,
                depth,
            } => {
                non_negative("strut_dist_from_hub", dist_from_hub)?;
                positive("strut_thickness", thickness)?;
                positive("strut_depth", depth)?;
            }
            StrutKind::Cylinder {
                radius,
                offset,
                extension,
            } => {
                positive("cylinder_strut_radius", radius)?;
                finite("cylinder_strut_offset", offset)?;
                finite("cylinder_strut_extension", extension)?;
            }
        }

        if let Some(frame) = self.frame {
            positive("frame_separation", frame.separation)?;
            // members closer than one strut width overlap their neighbours
            let width = self.strut.thickness();
            if frame.separation < width {
                return Err(DomeError::invalid(
                    "frame_separation",
                    format!(
                        "{} is narrower than the strut width {width}",
                        frame.separation
                    ),
                ));
            }
        }
        non_negative("base_frame_height", self.base_frame_height)
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), DomeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomeError::invalid(
            field,
            format!("must be a finite number, got {value}"),
        ))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), DomeError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(DomeError::invalid(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), DomeError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(DomeError::invalid(
            field,
            format!("must be positive, got {value}"),
        ))
    }
}
