//! Annotation anchored at a data coordinate

use crate::content::{ContentLayer, Layer};
use crate::domain::{Annotation, AnnotationBase, Point};

/// Anchored at a point in the host's data space
#[derive(Debug)]
pub struct DataAnnotation<C = Layer> {
    base: AnnotationBase<C>,
    point: Point,
}

impl<C: ContentLayer> DataAnnotation<C> {
    pub fn new(point: Point) -> Self {
        Self {
            base: AnnotationBase::new(),
            point,
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

    pub fn point(&self) -> Point {
        self.point
    }

    /// Change the data point. Does not reposition.
    pub fn set_point(&mut self, point: Point) {
        self.point = point;
    }
}

impl<C: ContentLayer> Annotation for DataAnnotation<C> {
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
        let anchor = host.data_to_surface(self.point);
        if let Some(placed) = self.base.place(anchor) {
            log::trace!("Data point {:?} placed at {:?} on {}", self.point, placed, host.id());
        }
    }
}
