//! # Config Crate
//!
//! Centralized configuration constants for the geodesic dome pipeline.
//! Default dome dimensions, tolerances and mesh export resolution live here
//! so the geometry core, the settings loader and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_TOLERANCE, DEFAULT_FREQUENCY};
//!
//! // Two lattice points closer than the tolerance are the same node
//! let gap: f64 = 0.2;
//! assert!(gap < DEFAULT_TOLERANCE);
//!
//! // The default dome is a 3-frequency subdivision
//! assert_eq!(DEFAULT_FREQUENCY, 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Shared Defaults**: The settings loader falls back to the same values as `DomeConfig::default`
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
