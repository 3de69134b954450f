//! # Settings Errors

use geodesic_dome::DomeError;
use thiserror::Error;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    /// A non-blank line without a `:` separator.
    #[error("Line {line}: expected `key:value`, got `{text}`")]
    Malformed { line: usize, text: String },

    #[error("Line {line}: invalid value `{value}` for `{key}`")]
    BadValue {
        line: usize,
        key: String,
        value: String,
    },

    /// More than one key of a selector group is set.
    #[error("Conflicting {group} selectors: {}", keys.join(", "))]
    SelectorConflict {
        group: &'static str,
        keys: Vec<&'static str>,
    },

    /// Keys of a selector group are present but none is set.
    #[error("No {group} selected")]
    SelectorMissing { group: &'static str },

    /// The loaded parameters failed validation.
    #[error(transparent)]
    Invalid(#[from] DomeError),
}

impl SettingsError {
    /// Creates a bad value error.
    pub fn bad_value(line: usize, key: &str, value: &str) -> Self {
        Self::BadValue {
            line,
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
