//! Image rendering for content layers using tiny-skia
//!
//! These functions paint labels, markers and the plot frame onto an
//! `RgbaImage`. Surface coordinates are shifted by `origin` so that the
//! origin lands on pixel (0, 0).

use image::RgbaImage;
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

use super::geometry::{self, frame, label, marker, BEZIER_K};
use crate::config::ShapeColor;
use crate::content::{ContentLayer, LabelLayer, MarkerLayer, MarkerShape};
use crate::domain::{Point, Rect};

/// Convert RgbaImage to Pixmap, apply drawing function, and copy back
fn with_pixmap(img: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) {
    let (w, h) = (img.width(), img.height());
    let Some(size) = tiny_skia::IntSize::from_wh(w, h) else {
        return;
    };
    let Some(mut pixmap) = Pixmap::from_vec(img.as_raw().clone(), size) else {
        return;
    };

    f(&mut pixmap);

    // Copy back
    img.copy_from_slice(pixmap.data());
}

fn solid(color: ShapeColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.into());
    paint.anti_alias = true;
    paint
}

fn shadow_paint() -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, marker::SHADOW_ALPHA);
    paint.anti_alias = true;
    paint
}

fn round_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

/// Build an ellipse path using cubic bezier curves
fn build_ellipse_path(cx: f32, cy: f32, rx: f32, ry: f32) -> Option<Path> {
    let kx = rx * BEZIER_K;
    let ky = ry * BEZIER_K;

    let mut pb = PathBuilder::new();

    // Start at top
    pb.move_to(cx, cy - ry);

    // Top to right
    pb.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);

    // Right to bottom
    pb.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);

    // Bottom to left
    pb.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);

    // Left to top
    pb.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);

    pb.close();
    pb.finish()
}

/// Build a closed axis-aligned box path
fn build_box_path(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(min_x, min_y);
    pb.line_to(max_x, min_y);
    pb.line_to(max_x, max_y);
    pb.line_to(min_x, max_y);
    pb.close();
    pb.finish()
}

/// Build a diamond inscribed in the given box
fn build_diamond_path(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<Path> {
    let cx = (min_x + max_x) * 0.5;
    let cy = (min_y + max_y) * 0.5;
    let mut pb = PathBuilder::new();
    pb.move_to(cx, min_y);
    pb.line_to(max_x, cy);
    pb.line_to(cx, max_y);
    pb.line_to(min_x, cy);
    pb.close();
    pb.finish()
}

/// Build the two diagonals of the given box as open strokes
fn build_cross_path(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(min_x, min_y);
    pb.line_to(max_x, max_y);
    pb.move_to(max_x, min_y);
    pb.line_to(min_x, max_y);
    pb.finish()
}

/// Map a surface-space rectangle to pixel coordinates
fn to_pixels(rect: Rect, origin: Point) -> (f32, f32, f32, f32) {
    geometry::normalize_rect(
        rect.left - origin.x,
        rect.top - origin.y,
        rect.right - origin.x,
        rect.bottom - origin.y,
    )
}

/// Paint a marker with optional shadow
pub fn paint_marker(pixmap: &mut Pixmap, layer: &MarkerLayer, origin: Point) {
    let (min_x, min_y, max_x, max_y) = to_pixels(layer.bounds(), origin);

    let path = match layer.shape {
        MarkerShape::Circle => {
            let (cx, cy, rx, ry) = geometry::ellipse_from_bounds(min_x, min_y, max_x, max_y);
            build_ellipse_path(cx, cy, rx, ry)
        }
        MarkerShape::Square => build_box_path(min_x, min_y, max_x, max_y),
        MarkerShape::Diamond => build_diamond_path(min_x, min_y, max_x, max_y),
        MarkerShape::Cross => build_cross_path(min_x, min_y, max_x, max_y),
    };
    let Some(path) = path else {
        return;
    };

    let paint = solid(layer.color);
    if layer.shape.is_filled() {
        // Draw shadow/border first as an outline around the fill
        if layer.shadow {
            let stroke = round_stroke(marker::OUTLINE * 2.0);
            pixmap.stroke_path(&path, &shadow_paint(), &stroke, Transform::identity(), None);
        }
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    } else {
        let thickness = (layer.size * marker::CROSS_THICKNESS).max(1.0);
        if layer.shadow {
            let stroke = round_stroke(thickness + marker::OUTLINE * 2.0);
            pixmap.stroke_path(&path, &shadow_paint(), &stroke, Transform::identity(), None);
        }
        pixmap.stroke_path(&path, &paint, &round_stroke(thickness), Transform::identity(), None);
    }
}

/// Paint a label callout: filled box with a border in the text color
pub fn paint_label(pixmap: &mut Pixmap, layer: &LabelLayer, origin: Point) {
    let (min_x, min_y, max_x, max_y) = to_pixels(layer.bounds(), origin);
    let Some(path) = build_box_path(min_x, min_y, max_x, max_y) else {
        return;
    };

    pixmap.fill_path(
        &path,
        &solid(layer.background),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    pixmap.stroke_path(
        &path,
        &solid(layer.text_color),
        &round_stroke(label::BORDER),
        Transform::identity(),
        None,
    );
}

/// Draw content layers onto an image, in order
pub fn draw_layers_on_image(img: &mut RgbaImage, layers: &[&dyn ContentLayer], origin: Point) {
    if layers.is_empty() {
        return;
    }

    with_pixmap(img, |pixmap| {
        for layer in layers {
            layer.paint(pixmap, origin);
        }
    });
}

/// Stroke the outline of the plot area
pub fn draw_frame_on_image(img: &mut RgbaImage, plot_area: Rect, color: ShapeColor) {
    with_pixmap(img, |pixmap| {
        let (min_x, min_y, max_x, max_y) = to_pixels(plot_area, Point::ORIGIN);
        if let Some(path) = build_box_path(min_x, min_y, max_x, max_y) {
            let mut paint = solid(color);
            paint.anti_alias = false;
            let stroke = Stroke {
                width: frame::THICKNESS,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LabelAlign;

    fn blank(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn test_marker_painted_at_position() {
        let mut img = blank(40, 40);
        let mut marker = MarkerLayer::new(MarkerShape::Square, 10.0).with_color(ShapeColor::BLACK);
        marker.set_position(Point::new(20.0, 20.0));

        draw_layers_on_image(&mut img, &[&marker], Point::ORIGIN);
        assert_eq!(img.get_pixel(20, 20).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_origin_shifts_layers() {
        let mut img = blank(40, 40);
        let mut marker = MarkerLayer::new(MarkerShape::Square, 10.0).with_color(ShapeColor::BLACK);
        marker.set_position(Point::new(120.0, 120.0));

        draw_layers_on_image(&mut img, &[&marker], Point::new(100.0, 100.0));
        assert_eq!(img.get_pixel(20, 20).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_label_fills_background() {
        let mut img = blank(60, 40);
        let mut label = LabelLayer::new("ab")
            .with_align(LabelAlign::TopLeft)
            .with_colors(ShapeColor::BLACK, ShapeColor::BLACK);
        label.set_position(Point::new(10.0, 10.0));

        draw_layers_on_image(&mut img, &[&label], Point::ORIGIN);
        assert_eq!(img.get_pixel(15, 15).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(55, 35).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_offscreen_marker_is_ignored() {
        let mut img = blank(10, 10);
        let mut marker = MarkerLayer::new(MarkerShape::Circle, 4.0);
        marker.set_position(Point::new(500.0, 500.0));

        draw_layers_on_image(&mut img, &[&marker], Point::ORIGIN);
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }
}
