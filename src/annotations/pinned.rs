//! Annotation pinned to a surface-space point

use crate::content::{ContentLayer, Layer};
use crate::domain::{Annotation, AnnotationBase, Point};

/// Anchored at a fixed point in the host's surface space
#[derive(Debug)]
pub struct PinnedAnnotation<C = Layer> {
    base: AnnotationBase<C>,
    anchor: Point,
}

impl<C: ContentLayer> PinnedAnnotation<C> {
    pub fn new(anchor: Point) -> Self {
        Self {
            base: AnnotationBase::new(),
            anchor,
        }
    }

    pub fn with_content(mut self, content: C) -> Self {
        self.base.set_content(content);
        self
    }

    pub fn with_displacement(mut self, dx: f32, dy: f32) -> Self {
        self.base.set_displacement(dx, dy);
        self
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }
}

impl<C: ContentLayer> Annotation for PinnedAnnotation<C> {
    type Content = C;

    fn base(&self) -> &AnnotationBase<C> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AnnotationBase<C> {
        &mut self.base
    }

    fn position_content_layer(&mut self) {
        if self.base.host().is_none() {
            return;
        }
        self.base.place(self.anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LabelLayer, MarkerLayer, MarkerShape};
    use crate::domain::Size;
    use crate::surface::Surface;

    #[test]
    fn test_anchor_with_displacement() {
        let surface = Surface::new(Size::new(100.0, 100.0));
        let mut a = PinnedAnnotation::new(Point::new(10.0, 20.0))
            .with_content(MarkerLayer::new(MarkerShape::Cross, 6.0))
            .with_displacement(5.0, -5.0);
        surface.attach(&mut a);
        assert_eq!(a.content().map(|c| c.position()), Some(Point::new(15.0, 15.0)));

        a.set_displacement(0.0, 0.0);
        a.position_content_layer();
        assert_eq!(a.content().map(|c| c.position()), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_reassigned_content_positioned_on_request() {
        let surface = Surface::new(Size::new(100.0, 100.0));
        let mut a = PinnedAnnotation::new(Point::new(30.0, 30.0)).with_content(LabelLayer::new("a"));
        surface.attach(&mut a);

        a.set_content(LabelLayer::new("b"));
        assert_eq!(a.content().map(|c| c.position()), Some(Point::ORIGIN));
        surface.layout([&mut a]);
        assert_eq!(a.content().map(|c| c.position()), Some(Point::new(30.0, 30.0)));
        assert_eq!(a.content().map(|c| c.text.as_str()), Some("b"));
    }

    #[test]
    fn test_unattached_does_not_move() {
        let mut a = PinnedAnnotation::new(Point::new(30.0, 30.0))
            .with_content(MarkerLayer::new(MarkerShape::Circle, 4.0));
        a.position_content_layer();
        a.position_content_layer();
        assert_eq!(a.content().map(|c| c.position()), Some(Point::ORIGIN));
        assert!(a.host().is_none());
    }
}
