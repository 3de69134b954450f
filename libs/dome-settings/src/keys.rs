//! Setting key names, in the order `render` writes them.

pub const FREQUENCY: &str = "g_frequency";
pub const FRACTION_NUM: &str = "g_fraction_num";
pub const FRACTION_DEN: &str = "g_fraction_den";
pub const RADIUS_X: &str = "g_radius_x";
pub const RADIUS_Y: &str = "g_radius_y";
pub const RADIUS_Z: &str = "g_radius_z";
pub const TOLERANCE: &str = "g_tolerance";
pub const DRAW_STRUTS: &str = "draw_struts";
pub const DRAW_HUBS: &str = "draw_hubs";
pub const DRAW_FACES: &str = "draw_faces";
pub const DRAW_BASE_FACES: &str = "draw_base_faces";
pub const TETRAHEDRON: &str = "ps4";
pub const OCTAHEDRON: &str = "ps8";
pub const ICOSAHEDRON: &str = "ps20";
pub const STRUT_RECT: &str = "st_rect";
pub const STRUT_CYLINDER: &str = "st_cyl";
pub const HUB_SPHERE: &str = "ht_sph";
pub const HUB_CYLINDER: &str = "ht_cyl";
pub const HUB_NONE: &str = "ht_non";
pub const SPHERE_HUB_RADIUS: &str = "sph_hub_radius";
pub const CYLINDER_HUB_OUTER_RADIUS: &str = "cyl_hub_outer_radius";
pub const CYLINDER_HUB_THICKNESS: &str = "cyl_hub_thickness";
pub const CYLINDER_HUB_DEPTH: &str = "cyl_hub_depth";
pub const RECT_STRUT_DIST: &str = "rect_strut_dist";
pub const RECT_STRUT_THICKNESS: &str = "rect_strut_thickness";
pub const RECT_STRUT_DEPTH: &str = "rect_strut_depth";
pub const CYLINDER_STRUT_RADIUS: &str = "cyl_strut_radius";
pub const CYLINDER_STRUT_OFFSET: &str = "cyl_strut_offset";
pub const CYLINDER_STRUT_EXTENSION: &str = "cyl_strut_extension";
pub const DRAW_FRAME: &str = "draw_frame";
pub const FRAME_SEPARATION: &str = "frame_separation";
pub const FLATTEN_BASE: &str = "flatten_base";
pub const BASE_FRAME_HEIGHT: &str = "base_frame_height";

pub const ALL: [&str; 33] = [
    FREQUENCY,
    FRACTION_NUM,
    FRACTION_DEN,
    RADIUS_X,
    RADIUS_Y,
    RADIUS_Z,
    TOLERANCE,
    DRAW_STRUTS,
    DRAW_HUBS,
    DRAW_FACES,
    DRAW_BASE_FACES,
    TETRAHEDRON,
    OCTAHEDRON,
    ICOSAHEDRON,
    STRUT_RECT,
    STRUT_CYLINDER,
    HUB_SPHERE,
    HUB_CYLINDER,
    HUB_NONE,
    SPHERE_HUB_RADIUS,
    CYLINDER_HUB_OUTER_RADIUS,
    CYLINDER_HUB_THICKNESS,
    CYLINDER_HUB_DEPTH,
    RECT_STRUT_DIST,
    RECT_STRUT_THICKNESS,
    RECT_STRUT_DEPTH,
    CYLINDER_STRUT_RADIUS,
    CYLINDER_STRUT_OFFSET,
    CYLINDER_STRUT_EXTENSION,
    DRAW_FRAME,
    FRAME_SEPARATION,
    FLATTEN_BASE,
    BASE_FRAME_HEIGHT,
];

/// Whether `key` is one this crate understands.
pub fn is_known(key: &str) -> bool {
    ALL.contains(&key)
}
