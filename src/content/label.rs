//! Text label callouts
//!
//! Labels are measured with a fixed average glyph advance; text is never
//! shaped. The painted callout is the label's box with a border.

use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

use super::ContentLayer;
use crate::config::ShapeColor;
use crate::domain::{Point, Rect, Size, Vector};
use crate::render::{self, geometry::label};

/// Which point of the label box sits at the label position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelAlign {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl LabelAlign {
    /// Fractional location of the alignment point inside the box
    pub fn fraction(self) -> (f32, f32) {
        match self {
            LabelAlign::TopLeft => (0.0, 0.0),
            LabelAlign::Top => (0.5, 0.0),
            LabelAlign::TopRight => (1.0, 0.0),
            LabelAlign::Left => (0.0, 0.5),
            LabelAlign::Center => (0.5, 0.5),
            LabelAlign::Right => (1.0, 0.5),
            LabelAlign::BottomLeft => (0.0, 1.0),
            LabelAlign::Bottom => (0.5, 1.0),
            LabelAlign::BottomRight => (1.0, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelLayer {
    pub text: String,
    pub font_size: f32,
    pub align: LabelAlign,
    pub text_color: ShapeColor,
    pub background: ShapeColor,
    position: Point,
}

impl LabelLayer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: label::FONT_SIZE,
            align: LabelAlign::default(),
            text_color: ShapeColor::BLACK,
            background: ShapeColor::WHITE,
            position: Point::ORIGIN,
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_align(mut self, align: LabelAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_colors(mut self, text_color: ShapeColor, background: ShapeColor) -> Self {
        self.text_color = text_color;
        self.background = background;
        self
    }
}

impl ContentLayer for LabelLayer {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn size(&self) -> Size {
        let chars = self.text.chars().count() as f32;
        Size::new(
            chars * self.font_size * label::GLYPH_ADVANCE + label::PADDING * 2.0,
            self.font_size * label::LINE_HEIGHT + label::PADDING * 2.0,
        )
    }

    fn bounds(&self) -> Rect {
        let size = self.size();
        let (fx, fy) = self.align.fraction();
        let origin = self.position - Vector::new(size.width * fx, size.height * fy);
        Rect::from_origin_size(origin, size)
    }

    fn paint(&self, pixmap: &mut Pixmap, origin: Point) {
        render::image::paint_label(pixmap, self, origin);
    }
}
