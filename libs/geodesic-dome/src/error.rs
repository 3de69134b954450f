//! # Dome Errors
//!
//! Error types for dome generation.

use thiserror::Error;

/// Errors that can occur while generating a dome.
#[derive(Debug, Error, PartialEq)]
pub enum DomeError {
    /// A configuration value is out of range. Raised before any geometry is
    /// computed.
    #[error("Invalid configuration for `{field}`: {message}")]
    InvalidConfiguration { field: &'static str, message: String },

    /// Geometry that cannot produce a solid (zero-length axis, zero radius).
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },
}

impl DomeError {
    /// Creates an invalid configuration error for `field`.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Name of the offending configuration field, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfiguration { field, .. } => Some(*field),
            Self::DegenerateGeometry { .. } => None,
        }
    }
}
