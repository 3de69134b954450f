//! # Dome Settings
//!
//! Reads and writes dome parameters in a plain line format, one
//! `key:value` pair per line:
//!
//! ```text
//! g_frequency:3
//! ps8:1
//! ht_cyl:1
//! cyl_hub_outer_radius:2.25
//! ```
//!
//! Missing keys keep their [`DomeConfig::default`] values. Selector groups
//! (base solid, strut type, hub type) accept at most one set key. Saving
//! writes every key in a fixed order, so a saved file always loads back to
//! the same configuration.
//!
//! ## Usage
//!
//! ```rust
//! use dome_settings::{parse, render};
//! use geodesic_dome::{BaseSolid, DomeConfig};
//!
//! let config = parse("g_frequency:2\nps20:1\n").unwrap();
//! assert_eq!(config.frequency, 2);
//! assert_eq!(config.solid, BaseSolid::Icosahedron);
//!
//! assert_eq!(parse(&render(&config)).unwrap(), config);
//! ```

pub mod error;
pub mod format;
pub mod keys;

pub use error::SettingsError;
pub use format::{parse, render};

use geodesic_dome::DomeConfig;
use std::fs;
use std::path::Path;

/// Loads and validates a settings file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<DomeConfig, SettingsError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let config = parse(&text)?;
    log::debug!("loaded dome settings from {}", path.display());
    Ok(config)
}

/// Writes every key of `config` to `path`.
pub fn save<P: AsRef<Path>>(config: &DomeConfig, path: P) -> Result<(), SettingsError> {
    fs::write(path, render(config))?;
    Ok(())
}
