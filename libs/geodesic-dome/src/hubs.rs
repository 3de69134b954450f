//! # Hub Generator
//!
//! One hub per node, oriented along the node's radial direction.

use crate::params::HubKind;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A hub instance.
///
/// Sphere hubs share one master mesh translated to `position`. Cylinder hubs
/// are tubes whose axis runs from `position` inward along `-orientation` by
/// the hub depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HubPlacement {
    pub position: DVec3,
    /// Unit radial vector from the dome center.
    pub orientation: DVec3,
    pub kind: HubKind,
}

impl HubPlacement {
    /// End of the cylinder axis inside the dome, `position` for other kinds.
    pub fn inner_end(&self) -> DVec3 {
        match self.kind {
            HubKind::Cylinder { depth, .. } => self.position - self.orientation * depth,
            _ => self.position,
        }
    }
}

/// Places a hub of `kind` at every node. Empty for [`HubKind::None`].
///
/// # Example
///
/// ```rust
/// use geodesic_dome::hubs::generate_hubs;
/// use geodesic_dome::HubKind;
/// use glam::DVec3;
///
/// let nodes = [DVec3::new(0.0, 0.0, 50.0), DVec3::new(50.0, 0.0, 0.0)];
/// let hubs = generate_hubs(&nodes, DVec3::ZERO, HubKind::default_sphere());
/// assert_eq!(hubs.len(), 2);
/// assert_eq!(hubs[1].orientation, DVec3::X);
/// assert!(generate_hubs(&nodes, DVec3::ZERO, HubKind::None).is_empty());
/// ```
pub fn generate_hubs(nodes: &[DVec3], center: DVec3, kind: HubKind) -> Vec<HubPlacement> {
    if kind == HubKind::None {
        return Vec::new();
    }
    nodes
        .iter()
        .map(|&position| HubPlacement {
            position,
            orientation: (position - center).try_normalize().unwrap_or(DVec3::Z),
            kind,
        })
        .collect()
}
