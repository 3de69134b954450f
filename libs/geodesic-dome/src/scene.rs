//! # Scene Sink
//!
//! The seam between the geometry pipeline and whatever renders or stores
//! it. [`crate::DomeGeometry::emit`] drives a sink; the mesh exporter and
//! the recording sink used in tests are the two implementations shipped
//! here.

use crate::hubs::HubPlacement;
use crate::struts::CylinderStrut;
use config::constants::{BASE_FRAME_COLOR, FRAME_COLOR, STRUT_COLOR};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// What a hexahedral solid represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Strut,
    FrameMember,
    BaseFrame,
}

impl Material {
    /// RGBA display color.
    pub fn color(self) -> [f32; 4] {
        match self {
            Self::Strut => STRUT_COLOR,
            Self::FrameMember => FRAME_COLOR,
            Self::BaseFrame => BASE_FRAME_COLOR,
        }
    }
}

/// Receives the generated shapes.
pub trait SceneSink {
    /// A hexahedron: outer quad `0..4` then inner quad `4..8`.
    fn add_solid(&mut self, corners: &[DVec3; 8], material: Material);

    fn add_cylinder(&mut self, cylinder: &CylinderStrut);

    fn add_hub(&mut self, hub: &HubPlacement);

    /// A planar polygon, at least three vertices.
    fn add_face(&mut self, polygon: &[DVec3]);
}

/// Sink that keeps every call, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub solids: Vec<([DVec3; 8], Material)>,
    pub cylinders: Vec<CylinderStrut>,
    pub hubs: Vec<HubPlacement>,
    pub faces: Vec<Vec<DVec3>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of solids tagged with `material`.
    pub fn count(&self, material: Material) -> usize {
        self.solids.iter().filter(|(_, m)| *m == material).count()
    }
}

impl SceneSink for RecordingSink {
    fn add_solid(&mut self, corners: &[DVec3; 8], material: Material) {
        self.solids.push((*corners, material));
    }

    fn add_cylinder(&mut self, cylinder: &CylinderStrut) {
        self.cylinders.push(*cylinder);
    }

    fn add_hub(&mut self, hub: &HubPlacement) {
        self.hubs.push(*hub);
    }

    fn add_face(&mut self, polygon: &[DVec3]) {
        self.faces.push(polygon.to_vec());
    }
}
