//! Point markers (circle, square, diamond, cross)

use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

use super::ContentLayer;
use crate::config::ShapeColor;
use crate::domain::{Point, Rect, Size, Vector};
use crate::render;

/// Marker glyph drawn at the annotation position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Diamond,
    Cross,
}

impl MarkerShape {
    /// Get the next marker shape in the cycle
    pub fn next(self) -> Self {
        match self {
            MarkerShape::Circle => MarkerShape::Square,
            MarkerShape::Square => MarkerShape::Diamond,
            MarkerShape::Diamond => MarkerShape::Cross,
            MarkerShape::Cross => MarkerShape::Circle,
        }
    }

    /// Whether the shape is filled (cross is stroked)
    pub fn is_filled(self) -> bool {
        !matches!(self, MarkerShape::Cross)
    }
}

/// A marker centred on its position
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerLayer {
    pub shape: MarkerShape,
    /// Edge length of the marker's bounding square in surface units
    pub size: f32,
    pub color: ShapeColor,
    /// Whether to draw shadow/border
    pub shadow: bool,
    position: Point,
}

impl MarkerLayer {
    pub fn new(shape: MarkerShape, size: f32) -> Self {
        Self {
            shape,
            size,
            color: ShapeColor::default(),
            shadow: false,
            position: Point::ORIGIN,
        }
    }

    pub fn with_color(mut self, color: ShapeColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }
}

impl ContentLayer for MarkerLayer {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn size(&self) -> Size {
        Size::new(self.size, self.size)
    }

    fn bounds(&self) -> Rect {
        let half = self.size * 0.5;
        Rect::from_origin_size(self.position - Vector::new(half, half), self.size())
    }

    fn paint(&self, pixmap: &mut Pixmap, origin: Point) {
        render::image::paint_marker(pixmap, self, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_shape_cycle() {
        let mut shape = MarkerShape::default();
        for _ in 0..4 {
            shape = shape.next();
        }
        assert_eq!(shape, MarkerShape::Circle);
        assert!(!MarkerShape::Cross.is_filled());
    }

    #[test]
    fn test_marker_bounds_centred() {
        let mut marker = MarkerLayer::new(MarkerShape::Square, 8.0);
        marker.set_position(Point::new(20.0, 20.0));
        assert_eq!(marker.bounds(), Rect::new(16.0, 16.0, 24.0, 24.0));
        assert_eq!(marker.bounds().center(), marker.position());
    }
}
