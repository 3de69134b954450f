//! # Primitives
//!
//! Mesh generation for hub spheres and for the oriented tubes used by
//! cylinder hubs and round struts.

pub mod cylinder;
pub mod sphere;

pub use cylinder::create_tube;
pub use sphere::create_sphere;
