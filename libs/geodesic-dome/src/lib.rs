//! # Geodesic Dome
//!
//! Geometry core of the dome generator. Turns a handful of parameters
//! (frequency, base solid, radii, dome fraction, tolerance) into nodes,
//! struts, triangles and the oriented solids that build the dome.
//!
//! ## Architecture
//!
//! ```text
//! DomeConfig → polyhedron → tessellate → clip → strut_graph
//!            → flatten → hubs / struts / frame → DomeGeometry → SceneSink
//! ```
//!
//! Everything is computed in f64 with a single positional tolerance
//! (`DomeConfig::tolerance`) for point identity and the clip plane.
//!
//! ## Usage
//!
//! ```rust
//! use geodesic_dome::scene::RecordingSink;
//! use geodesic_dome::{draw, BaseSolid, DomeConfig};
//!
//! let dome = draw(&DomeConfig {
//!     frequency: 1,
//!     solid: BaseSolid::Octahedron,
//!     ..DomeConfig::default()
//! })
//! .unwrap();
//! assert_eq!(dome.nodes.len(), 5);
//!
//! let mut sink = RecordingSink::new();
//! dome.emit(&mut sink);
//! assert_eq!(sink.hubs.len(), 5);
//! ```

pub mod clip;
pub mod dome;
pub mod ellipsoid;
pub mod error;
pub mod export;
pub mod flatten;
pub mod frame;
pub mod hubs;
pub mod mesh;
pub mod params;
pub mod polyhedron;
pub mod primitives;
pub mod scene;
pub mod strut_graph;
pub mod struts;
pub mod tessellate;
pub mod topology;
pub mod vector;

pub use dome::{draw, DomeGeometry};
pub use error::DomeError;
pub use params::{BaseSolid, DomeConfig, FrameSpec, HubKind, StrutKind};
pub use scene::{Material, SceneSink};
pub use topology::{StrutEdge, TriangleRecord};
