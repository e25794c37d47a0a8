//! Shared geometry constants and math for content rendering

/// Marker geometry constants
pub mod marker {
    /// Stroke thickness for cross markers, relative to marker size
    pub const CROSS_THICKNESS: f32 = 0.2;
    /// Shadow/outline thickness in pixels
    pub const OUTLINE: f32 = 2.0;
    /// Shadow alpha (0-255)
    pub const SHADOW_ALPHA: u8 = 220;
}

/// Label geometry constants
pub mod label {
    /// Default font size in surface units
    pub const FONT_SIZE: f32 = 12.0;
    /// Average glyph advance as a fraction of the font size
    pub const GLYPH_ADVANCE: f32 = 0.5;
    /// Line height as a multiple of the font size
    pub const LINE_HEIGHT: f32 = 1.25;
    /// Inner padding around the text, in surface units
    pub const PADDING: f32 = 4.0;
    /// Border stroke width
    pub const BORDER: f32 = 1.0;
}

/// Surface frame constants
pub mod frame {
    /// Stroke width of the plot area outline
    pub const THICKNESS: f32 = 1.0;
}

/// Ellipse bezier approximation constant: 4/3 * (sqrt(2) - 1)
pub const BEZIER_K: f32 = 0.552_284_8;

/// Normalize min/max coordinates from arbitrary start/end points
#[inline]
pub fn normalize_rect(x1: f32, y1: f32, x2: f32, y2: f32) -> (f32, f32, f32, f32) {
    let (min_x, max_x) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
    let (min_y, max_y) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
    (min_x, min_y, max_x, max_y)
}

/// Calculate ellipse center and radii from bounding box
#[inline]
pub fn ellipse_from_bounds(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> (f32, f32, f32, f32) {
    let cx = (min_x + max_x) * 0.5;
    let cy = (min_y + max_y) * 0.5;
    let rx = ((max_x - min_x) * 0.5).max(1.0);
    let ry = ((max_y - min_y) * 0.5).max(1.0);
    (cx, cy, rx, ry)
}
