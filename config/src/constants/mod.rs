//! # Configuration Constants
//!
//! Centralized constants for the dome pipeline. Tolerances, default dome
//! dimensions and the circle resolution used when solids are meshed are
//! all defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Dome**: Default frequency, radius and fraction
//! - **Hubs & Struts**: Default member dimensions
//! - **Resolution**: Circle fragment counts for exported meshes
//! - **Colors**: Material colors used by mesh export

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons in the vector kernel.
///
/// A line whose direction has a dot product with a plane normal below this
/// value is treated as parallel to the plane.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Default merge tolerance for dome points and struts.
///
/// Two lattice points closer than this distance are the same hub. Points
/// whose z lies above `-DEFAULT_TOLERANCE` count as part of the dome.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TOLERANCE;
///
/// let z = -0.3;
/// assert!(z >= -DEFAULT_TOLERANCE);
/// ```
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Fraction of a strut length below which two consecutive z values belong
/// to the same base ring when flattening.
pub const BASE_RING_STEP_RATIO: f64 = 0.25;

// =============================================================================
// DOME CONSTANTS
// =============================================================================

/// Default subdivision frequency.
pub const DEFAULT_FREQUENCY: u32 = 3;

/// Largest accepted subdivision frequency.
///
/// A frequency of 64 on an icosahedron already produces ~80k raw lattice
/// points; the O(n) dedup scan makes anything larger impractical.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_FREQUENCY;
///
/// let requested = 12;
/// assert!(requested <= MAX_FREQUENCY);
/// ```
pub const MAX_FREQUENCY: u32 = 64;

/// Default radius along every axis.
pub const DEFAULT_RADIUS: f64 = 150.0;

/// Default dome fraction numerator (half sphere).
pub const DEFAULT_FRACTION_NUM: u32 = 1;

/// Default dome fraction denominator (half sphere).
pub const DEFAULT_FRACTION_DEN: u32 = 2;

/// Tilt of the icosahedron about the Y axis, in radians.
///
/// `atan(1/phi)` (about 31.7 degrees) puts one vertex on the pole so that
/// the vertex rings are level.
///
/// # Example
///
/// ```rust
/// use config::constants::ICOSAHEDRON_TILT;
///
/// let degrees = ICOSAHEDRON_TILT.to_degrees();
/// assert!((degrees - 31.7).abs() < 0.05);
/// ```
pub const ICOSAHEDRON_TILT: f64 = 0.553_574_358_897_045_3;

// =============================================================================
// HUB & STRUT CONSTANTS
// =============================================================================

/// Default radius of a sphere hub.
pub const DEFAULT_SPHERE_HUB_RADIUS: f64 = 2.25;

/// Default outer radius of a cylinder hub.
pub const DEFAULT_CYLINDER_HUB_OUTER_RADIUS: f64 = 2.25;

/// Default wall thickness of a cylinder hub.
pub const DEFAULT_CYLINDER_HUB_THICKNESS: f64 = 0.25;

/// Default depth of a cylinder hub, measured inward along the radial vector.
pub const DEFAULT_CYLINDER_HUB_DEPTH: f64 = 4.0;

/// Default distance a rectangular strut stops short of its hub.
pub const DEFAULT_STRUT_DIST_FROM_HUB: f64 = 3.0;

/// Default width of a rectangular strut.
pub const DEFAULT_STRUT_THICKNESS: f64 = 1.5;

/// Default depth of a rectangular strut toward the dome center.
pub const DEFAULT_STRUT_DEPTH: f64 = 3.5;

/// Default radius of a cylindrical strut.
pub const DEFAULT_CYLINDER_STRUT_RADIUS: f64 = 0.75;

/// Default spacing between frame cross-members.
pub const DEFAULT_FRAME_SEPARATION: f64 = 16.0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default minimum fragment angle in degrees for hub and strut circles.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FA;
///
/// // Maximum fragments from angle: 360 / fa
/// let max_from_angle = 360.0 / DEFAULT_FA; // = 30 fragments
/// ```
pub const DEFAULT_FA: f64 = 12.0;

/// Default minimum fragment edge length for hub and strut circles.
pub const DEFAULT_FS: f64 = 0.5;

/// Minimum number of fragments for any circular shape.
pub const MIN_FRAGMENTS: u32 = 5;

/// Maximum number of fragments for any circular shape.
pub const MAX_FRAGMENTS: u32 = 256;

/// Default segment count for export meshes when no radius is known.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 16;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Wood color used for struts and frame members (RGBA, [0.0, 1.0]).
pub const STRUT_COLOR: [f32; 4] = [1.0, 0.843, 0.0, 1.0];

/// Darker wood used for frame cross-members.
pub const FRAME_COLOR: [f32; 4] = [0.804, 0.667, 0.490, 1.0];

/// Color of the base frame plates.
pub const BASE_FRAME_COLOR: [f32; 4] = [0.545, 0.271, 0.075, 1.0];

/// Metal color used for hubs.
pub const HUB_COLOR: [f32; 4] = [0.75, 0.75, 0.78, 1.0];

/// Default color of tessellated faces (light gray).
pub const FACE_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the number of fragments for a hub or strut circle.
///
/// - If `fn_value > 0`: use it (clamped to MIN_FRAGMENTS..MAX_FRAGMENTS)
/// - Otherwise: `ceil(min(360/fa, 2*PI*r/fs))`, clamped the same way
///
/// # Example
///
/// ```rust
/// use config::constants::{compute_fragments, DEFAULT_FA, DEFAULT_FS};
///
/// let fragments = compute_fragments(2.25, 24.0, DEFAULT_FA, DEFAULT_FS);
/// assert_eq!(fragments, 24);
///
/// let fragments = compute_fragments(2.25, 0.0, DEFAULT_FA, DEFAULT_FS);
/// assert!(fragments >= 5);
/// ```
pub fn compute_fragments(radius: f64, fn_value: f64, fa_value: f64, fs_value: f64) -> u32 {
    let fragments = if fn_value > 0.0 {
        fn_value as u32
    } else {
        let from_angle = 360.0 / fa_value;
        let from_size = (2.0 * std::f64::consts::PI * radius) / fs_value;
        from_angle.min(from_size).ceil() as u32
    };

    fragments.clamp(MIN_FRAGMENTS, MAX_FRAGMENTS)
}

// =============================================================================
// EXPORT SETTINGS
// =============================================================================

/// Immutable snapshot of mesh export settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ExportConfig;
/// let config = ExportConfig::default();
/// assert!(config.weld_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportConfig {
    /// Distance under which exported vertices are welded together.
    pub weld_tolerance: f64,
    /// Fixed circle segment count; `0` derives it from each radius.
    pub segments: u32,
}

impl ExportConfig {
    /// Builds export settings, rejecting a non-positive weld tolerance or a
    /// fixed segment count too small to form a polygon.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ExportConfig;
    /// let cfg = ExportConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.segments, 24);
    /// ```
    pub fn new(weld_tolerance: f64, segments: u32) -> Result<Self, ConfigError> {
        if weld_tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(weld_tolerance));
        }
        if segments != 0 && segments < 3 {
            return Err(ConfigError::InvalidSegments(segments));
        }
        Ok(Self {
            weld_tolerance,
            segments,
        })
    }

    /// Segment count for a circle of the given radius.
    pub fn segments_for(&self, radius: f64) -> u32 {
        compute_fragments(radius, self.segments as f64, DEFAULT_FA, DEFAULT_FS)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            weld_tolerance: 1.0e-6,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Error returned when invalid export settings are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the weld tolerance is zero or negative.
    InvalidTolerance(f64),
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "weld tolerance must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be 0 or >= 3: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
