//! Annotation anchored relative to the plot area bounds

use crate::content::{ContentLayer, Layer};
use crate::domain::{Annotation, AnnotationBase};

/// Anchored at a fractional location inside the host's plot area:
/// (0, 0) is the top-left corner, (1, 1) the bottom-right.
#[derive(Debug)]
pub struct AlignedAnnotation<C = Layer> {
    base: AnnotationBase<C>,
    fx: f32,
    fy: f32,
}

impl<C: ContentLayer> AlignedAnnotation<C> {
    pub fn new(fx: f32, fy: f32) -> Self {
        Self {
            base: AnnotationBase::new(),
            fx,
            fy,
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

    pub fn fraction(&self) -> (f32, f32) {
        (self.fx, self.fy)
    }

    pub fn set_fraction(&mut self, fx: f32, fy: f32) {
        self.fx = fx;
        self.fy = fy;
    }
}

impl<C: ContentLayer> Annotation for AlignedAnnotation<C> {
    type Content = C;

    fn base(&self) -> &AnnotationBase<C> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AnnotationBase<C> {
        &mut self.base
    }

    fn position_content_layer(&mut self) {
        let Some(host) = self.base.host() else {
            return;
        };
        let anchor = host.plot_area().point_at(self.fx, self.fy);
        self.base.place(anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LabelAlign, LabelLayer};
    use crate::domain::{Point, Rect, Size};
    use crate::surface::Surface;

    #[test]
    fn test_top_right_legend() {
        let surface = Surface::new(Size::new(200.0, 100.0))
            .with_plot_area(Rect::new(20.0, 10.0, 180.0, 90.0));
        let mut legend = AlignedAnnotation::new(1.0, 0.0)
            .with_content(LabelLayer::new("series A").with_align(LabelAlign::TopRight))
            .with_displacement(-4.0, 4.0);
        surface.attach(&mut legend);

        let label = legend.content().unwrap();
        assert_eq!(label.position(), Point::new(176.0, 14.0));
        assert_eq!(label.bounds().right, 176.0);
        assert_eq!(label.bounds().top, 14.0);
    }

    #[test]
    fn test_follows_plot_area() {
        let surface = Surface::new(Size::new(100.0, 100.0));
        let mut a = AlignedAnnotation::new(0.5, 0.5).with_content(LabelLayer::new("x"));
        surface.attach(&mut a);
        assert_eq!(a.content().map(|c| c.position()), Some(Point::new(50.0, 50.0)));

        surface.set_plot_area(Rect::new(0.0, 0.0, 40.0, 20.0));
        surface.layout([&mut a]);
        assert_eq!(a.content().map(|c| c.position()), Some(Point::new(20.0, 10.0)));
        assert_eq!(a.fraction(), (0.5, 0.5));
    }
}
