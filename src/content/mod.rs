//! Drawable content elements owned by annotations
//!
//! This module provides:
//! - The `ContentLayer` trait: anything with a settable position that can
//!   paint itself onto a pixmap
//! - Text labels and point markers
//! - `Layer`, a unified type for storing either in one collection

pub mod label;
pub mod marker;

pub use label::{LabelAlign, LabelLayer};
pub use marker::{MarkerLayer, MarkerShape};

use tiny_skia::Pixmap;

use crate::domain::{Point, Rect, Size};

/// A drawable element placed within a host surface's coordinate space
pub trait ContentLayer {
    /// Current position in surface space
    fn position(&self) -> Point;

    fn set_position(&mut self, position: Point);

    fn size(&self) -> Size;

    /// Surface-space box covered by the element at its current position
    fn bounds(&self) -> Rect;

    /// Paint onto `pixmap`, where surface point `origin` maps to pixel (0, 0)
    fn paint(&self, pixmap: &mut Pixmap, origin: Point);
}

impl<T: ContentLayer + ?Sized> ContentLayer for Box<T> {
    fn position(&self) -> Point {
        (**self).position()
    }

    fn set_position(&mut self, position: Point) {
        (**self).set_position(position)
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn paint(&self, pixmap: &mut Pixmap, origin: Point) {
        (**self).paint(pixmap, origin)
    }
}

/// Unified content type so one surface can host labels and markers together
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    Label(LabelLayer),
    Marker(MarkerLayer),
}

impl Layer {
    fn inner(&self) -> &dyn ContentLayer {
        match self {
            Layer::Label(label) => label,
            Layer::Marker(marker) => marker,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ContentLayer {
        match self {
            Layer::Label(label) => label,
            Layer::Marker(marker) => marker,
        }
    }
}

impl ContentLayer for Layer {
    fn position(&self) -> Point {
        self.inner().position()
    }

    fn set_position(&mut self, position: Point) {
        self.inner_mut().set_position(position)
    }

    fn size(&self) -> Size {
        self.inner().size()
    }

    fn bounds(&self) -> Rect {
        self.inner().bounds()
    }

    fn paint(&self, pixmap: &mut Pixmap, origin: Point) {
        self.inner().paint(pixmap, origin)
    }
}

impl From<LabelLayer> for Layer {
    fn from(label: LabelLayer) -> Self {
        Layer::Label(label)
    }
}

impl From<MarkerLayer> for Layer {
    fn from(marker: MarkerLayer) -> Self {
        Layer::Marker(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_delegates_position() {
        let mut layer = Layer::from(MarkerLayer::new(MarkerShape::Circle, 10.0));
        layer.set_position(Point::new(3.0, 4.0));
        assert_eq!(layer.position(), Point::new(3.0, 4.0));
        assert_eq!(layer.bounds(), Rect::new(-2.0, -1.0, 8.0, 9.0));
    }

    #[test]
    fn test_boxed_layer() {
        let mut boxed: Box<dyn ContentLayer> = Box::new(LabelLayer::new("peak"));
        boxed.set_position(Point::new(1.0, 2.0));
        assert_eq!(boxed.position(), Point::new(1.0, 2.0));
        assert!(boxed.size().width > 0.0);
    }
}
