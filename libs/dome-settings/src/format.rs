//! # Settings Format
//!
//! `parse` turns `key:value` lines into a validated [`DomeConfig`]; `render`
//! writes one back. Both `\n` and `\r\n` line endings are accepted.

use crate::error::SettingsError;
use crate::keys;
use config::constants::{
    DEFAULT_CYLINDER_HUB_DEPTH, DEFAULT_CYLINDER_HUB_OUTER_RADIUS,
    DEFAULT_CYLINDER_HUB_THICKNESS, DEFAULT_CYLINDER_STRUT_RADIUS, DEFAULT_FRAME_SEPARATION,
    DEFAULT_SPHERE_HUB_RADIUS, DEFAULT_STRUT_DEPTH, DEFAULT_STRUT_DIST_FROM_HUB,
    DEFAULT_STRUT_THICKNESS,
};
use geodesic_dome::{BaseSolid, DomeConfig, FrameSpec, HubKind, StrutKind};
use glam::DVec3;
use std::collections::HashMap;
use std::str::FromStr;

// =============================================================================
// PARSING
// =============================================================================

/// Parses settings text and validates the result.
///
/// # Errors
///
/// A [`SettingsError`] naming the offending line, key or selector group, or
/// [`SettingsError::Invalid`] when the values fail [`DomeConfig::validate`].
pub fn parse(text: &str) -> Result<DomeConfig, SettingsError> {
    let entries = Entries::read(text)?;
    let defaults = DomeConfig::default();

    let solid = entries
        .select(
            "base solid",
            &[
                (keys::TETRAHEDRON, BaseSolid::Tetrahedron),
                (keys::OCTAHEDRON, BaseSolid::Octahedron),
                (keys::ICOSAHEDRON, BaseSolid::Icosahedron),
            ],
        )?
        .unwrap_or(defaults.solid);

    let radii = DVec3::new(
        entries.number(keys::RADIUS_X)?.unwrap_or(defaults.radii.x),
        entries.number(keys::RADIUS_Y)?.unwrap_or(defaults.radii.y),
        entries.number(keys::RADIUS_Z)?.unwrap_or(defaults.radii.z),
    );

    let frame = match entries.flag(keys::DRAW_FRAME)? {
        Some(true) => Some(FrameSpec {
            separation: entries
                .number(keys::FRAME_SEPARATION)?
                .unwrap_or(DEFAULT_FRAME_SEPARATION),
        }),
        Some(false) => None,
        None => defaults.frame,
    };

    let config = DomeConfig {
        frequency: entries.number(keys::FREQUENCY)?.unwrap_or(defaults.frequency),
        solid,
        radii,
        fraction_num: entries
            .number(keys::FRACTION_NUM)?
            .unwrap_or(defaults.fraction_num),
        fraction_den: entries
            .number(keys::FRACTION_DEN)?
            .unwrap_or(defaults.fraction_den),
        tolerance: entries.number(keys::TOLERANCE)?.unwrap_or(defaults.tolerance),
        hub: read_hub(&entries, defaults.hub)?,
        strut: read_strut(&entries, defaults.strut)?,
        draw_struts: entries
            .flag(keys::DRAW_STRUTS)?
            .unwrap_or(defaults.draw_struts),
        draw_faces: entries.flag(keys::DRAW_FACES)?.unwrap_or(defaults.draw_faces),
        draw_base_faces: entries
            .flag(keys::DRAW_BASE_FACES)?
            .unwrap_or(defaults.draw_base_faces),
        frame,
        flatten_base: entries
            .flag(keys::FLATTEN_BASE)?
            .unwrap_or(defaults.flatten_base),
        base_frame_height: entries
            .number(keys::BASE_FRAME_HEIGHT)?
            .unwrap_or(defaults.base_frame_height),
    };

    config.validate()?;
    Ok(config)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum HubChoice {
    None,
    Sphere,
    Cylinder,
}

fn read_hub(entries: &Entries<'_>, fallback: HubKind) -> Result<HubKind, SettingsError> {
    let choice = entries
        .select(
            "hub type",
            &[
                (keys::HUB_SPHERE, HubChoice::Sphere),
                (keys::HUB_CYLINDER, HubChoice::Cylinder),
                (keys::HUB_NONE, HubChoice::None),
            ],
        )?
        .unwrap_or(match fallback {
            HubKind::None => HubChoice::None,
            HubKind::Sphere { .. } => HubChoice::Sphere,
            HubKind::Cylinder { .. } => HubChoice::Cylinder,
        });

    if entries.flag(keys::DRAW_HUBS)? == Some(false) {
        return Ok(HubKind::None);
    }

    Ok(match choice {
        HubChoice::None => HubKind::None,
        HubChoice::Sphere => HubKind::Sphere {
            radius: entries
                .number(keys::SPHERE_HUB_RADIUS)?
                .unwrap_or(DEFAULT_SPHERE_HUB_RADIUS),
        },
        HubChoice::Cylinder => HubKind::Cylinder {
            outer_radius: entries
                .number(keys::CYLINDER_HUB_OUTER_RADIUS)?
                .unwrap_or(DEFAULT_CYLINDER_HUB_OUTER_RADIUS),
            thickness: entries
                .number(keys::CYLINDER_HUB_THICKNESS)?
                .unwrap_or(DEFAULT_CYLINDER_HUB_THICKNESS),
            depth: entries
                .number(keys::CYLINDER_HUB_DEPTH)?
                .unwrap_or(DEFAULT_CYLINDER_HUB_DEPTH),
        },
    })
}

fn read_strut(entries: &Entries<'_>, fallback: StrutKind) -> Result<StrutKind, SettingsError> {
    let round = entries
        .select(
            "strut type",
            &[(keys::STRUT_RECT, false), (keys::STRUT_CYLINDER, true)],
        )?
        .unwrap_or(matches!(fallback, StrutKind::Cylinder { .. }));

    Ok(if round {
        StrutKind::Cylinder {
            radius: entries
                .number(keys::CYLINDER_STRUT_RADIUS)?
                .unwrap_or(DEFAULT_CYLINDER_STRUT_RADIUS),
            offset: entries.number(keys::CYLINDER_STRUT_OFFSET)?.unwrap_or(0.0),
            extension: entries
                .number(keys::CYLINDER_STRUT_EXTENSION)?
                .unwrap_or(0.0),
        }
    } else {
        StrutKind::Rect {
            dist_from_hub: entries
                .number(keys::RECT_STRUT_DIST)?
                .unwrap_or(DEFAULT_STRUT_DIST_FROM_HUB),
            thickness: entries
                .number(keys::RECT_STRUT_THICKNESS)?
                .unwrap_or(DEFAULT_STRUT_THICKNESS),
            depth: entries
                .number(keys::RECT_STRUT_DEPTH)?
                .unwrap_or(DEFAULT_STRUT_DEPTH),
        }
    })
}

struct Entry<'a> {
    line: usize,
    value: &'a str,
}

/// Known keys of one settings text. A repeated key keeps its last value.
struct Entries<'a> {
    map: HashMap<&'a str, Entry<'a>>,
}

impl<'a> Entries<'a> {
    fn read(text: &'a str) -> Result<Self, SettingsError> {
        let mut map = HashMap::new();
        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim_end_matches('\r').trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                return Err(SettingsError::Malformed {
                    line: line_no,
                    text: line.to_string(),
                });
            };
            let key = key.trim();
            if !keys::is_known(key) {
                log::warn!("settings line {line_no}: unknown key `{key}` ignored");
                continue;
            }
            map.insert(
                key,
                Entry {
                    line: line_no,
                    value: value.trim(),
                },
            );
        }
        Ok(Self { map })
    }

    fn number<T: FromStr>(&self, key: &'static str) -> Result<Option<T>, SettingsError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(entry) => entry
                .value
                .parse()
                .map(Some)
                .map_err(|_| SettingsError::bad_value(entry.line, key, entry.value)),
        }
    }

    fn flag(&self, key: &'static str) -> Result<Option<bool>, SettingsError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(entry) => parse_flag(entry.value)
                .map(Some)
                .ok_or_else(|| SettingsError::bad_value(entry.line, key, entry.value)),
        }
    }

    /// Resolves a selector group. `None` when no key of the group appears.
    fn select<T: Copy>(
        &self,
        group: &'static str,
        options: &[(&'static str, T)],
    ) -> Result<Option<T>, SettingsError> {
        let mut present = false;
        let mut chosen = Vec::new();
        for &(key, value) in options {
            if let Some(set) = self.flag(key)? {
                present = true;
                if set {
                    chosen.push((key, value));
                }
            }
        }
        match chosen.as_slice() {
            [] if present => Err(SettingsError::SelectorMissing { group }),
            [] => Ok(None),
            [(_, value)] => Ok(Some(*value)),
            _ => Err(SettingsError::SelectorConflict {
                group,
                keys: chosen.iter().map(|(key, _)| *key).collect(),
            }),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" => Some(true),
        "0" => Some(false),
        v if v.eq_ignore_ascii_case("true") => Some(true),
        v if v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Writes every key of `config`, in [`keys::ALL`] order.
///
/// Dimensions of the hub and strut variants that are not selected are
/// written with their defaults.
///
/// # Example
///
/// ```rust
/// use dome_settings::render;
/// use geodesic_dome::DomeConfig;
///
/// let text = render(&DomeConfig::default());
/// assert!(text.starts_with("g_frequency:3\n"));
/// assert!(text.contains("ht_cyl:1\n"));
/// ```
pub fn render(config: &DomeConfig) -> String {
    let sphere_radius = match config.hub {
        HubKind::Sphere { radius } => radius,
        _ => DEFAULT_SPHERE_HUB_RADIUS,
    };
    let (hub_outer, hub_thickness, hub_depth) = match config.hub {
        HubKind::Cylinder {
            outer_radius,
            thickness,
            depth,
        } => (outer_radius, thickness, depth),
        _ => (
            DEFAULT_CYLINDER_HUB_OUTER_RADIUS,
            DEFAULT_CYLINDER_HUB_THICKNESS,
            DEFAULT_CYLINDER_HUB_DEPTH,
        ),
    };
    let (rect_dist, rect_thickness, rect_depth) = match config.strut {
        StrutKind::Rect {
            dist_from_hub,
            thickness,
            depth,
        } => (dist_from_hub, thickness, depth),
        StrutKind::Cylinder { .. } => (
            DEFAULT_STRUT_DIST_FROM_HUB,
            DEFAULT_STRUT_THICKNESS,
            DEFAULT_STRUT_DEPTH,
        ),
    };
    let (rod_radius, rod_offset, rod_extension) = match config.strut {
        StrutKind::Cylinder {
            radius,
            offset,
            extension,
        } => (radius, offset, extension),
        StrutKind::Rect { .. } => (DEFAULT_CYLINDER_STRUT_RADIUS, 0.0, 0.0),
    };
    let round = matches!(config.strut, StrutKind::Cylinder { .. });

    let values = [
        config.frequency.to_string(),
        config.fraction_num.to_string(),
        config.fraction_den.to_string(),
        config.radii.x.to_string(),
        config.radii.y.to_string(),
        config.radii.z.to_string(),
        config.tolerance.to_string(),
        flag(config.draw_struts),
        flag(config.hub != HubKind::None),
        flag(config.draw_faces),
        flag(config.draw_base_faces),
        flag(config.solid == BaseSolid::Tetrahedron),
        flag(config.solid == BaseSolid::Octahedron),
        flag(config.solid == BaseSolid::Icosahedron),
        flag(!round),
        flag(round),
        flag(matches!(config.hub, HubKind::Sphere { .. })),
        flag(matches!(config.hub, HubKind::Cylinder { .. })),
        flag(config.hub == HubKind::None),
        sphere_radius.to_string(),
        hub_outer.to_string(),
        hub_thickness.to_string(),
        hub_depth.to_string(),
        rect_dist.to_string(),
        rect_thickness.to_string(),
        rect_depth.to_string(),
        rod_radius.to_string(),
        rod_offset.to_string(),
        rod_extension.to_string(),
        flag(config.frame.is_some()),
        config
            .frame
            .map_or(DEFAULT_FRAME_SEPARATION, |frame| frame.separation)
            .to_string(),
        flag(config.flatten_base),
        config.base_frame_height.to_string(),
    ];

    let mut out = String::new();
    for (key, value) in keys::ALL.iter().zip(values) {
        out.push_str(key);
        out.push(':');
        out.push_str(&value);
        out.push('\n');
    }
    out
}

fn flag(set: bool) -> String {
    if set { "1" } else { "0" }.to_string()
}
