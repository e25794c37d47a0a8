//! The annotation positioning contract
//!
//! An annotation owns one content element, holds a weak handle to the
//! surface hosting it and carries a displacement. Concrete annotations
//! decide where the anchor is; the content ends up at `anchor + displacement`.

use std::rc::Rc;

use super::geometry::{Point, Vector};
use super::host::HostRef;
use crate::content::ContentLayer;
use crate::surface::SurfaceFrame;

/// State shared by every annotation: owned content, host handle, displacement
#[derive(Debug)]
pub struct AnnotationBase<C> {
    content: Option<C>,
    host: HostRef,
    displacement: Vector,
}

impl<C> Default for AnnotationBase<C> {
    fn default() -> Self {
        Self {
            content: None,
            host: HostRef::empty(),
            displacement: Vector::ZERO,
        }
    }
}

impl<C> AnnotationBase<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: C) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut C> {
        self.content.as_mut()
    }

    /// Take ownership of `content`, dropping the previously owned element.
    /// Does not reposition.
    pub fn set_content(&mut self, content: C) {
        self.content = Some(content);
    }

    /// Like [`set_content`](Self::set_content) but hands the previous
    /// element back to the caller instead of dropping it
    pub fn replace_content(&mut self, content: C) -> Option<C> {
        self.content.replace(content)
    }

    pub fn take_content(&mut self) -> Option<C> {
        self.content.take()
    }

    /// The hosting surface, if attached and still alive
    pub fn host(&self) -> Option<Rc<SurfaceFrame>> {
        self.host.get()
    }

    pub fn host_ref(&self) -> &HostRef {
        &self.host
    }

    /// Store the host handle. Does not move or reparent the content.
    pub fn set_host(&mut self, host: HostRef) {
        self.host = host;
    }

    pub fn clear_host(&mut self) {
        self.host.clear();
    }

    pub fn displacement(&self) -> Vector {
        self.displacement
    }

    /// Stored verbatim, including non-finite values
    pub fn set_displacement(&mut self, dx: f32, dy: f32) {
        self.displacement = Vector::new(dx, dy);
    }
}

impl<C: ContentLayer> AnnotationBase<C> {
    /// Move the content to `anchor + displacement`.
    ///
    /// Returns the final position, or `None` when there is no content.
    pub fn place(&mut self, anchor: Point) -> Option<Point> {
        let target = anchor + self.displacement;
        let content = self.content.as_mut()?;
        content.set_position(target);
        Some(target)
    }
}

/// A positionable piece of content anchored inside a hosting surface.
///
/// Every implementor must provide [`position_content_layer`]; there is no
/// default body, so a variant that forgets it does not compile:
///
/// ```compile_fail
/// use chart_annotation::content::MarkerLayer;
/// use chart_annotation::domain::{Annotation, AnnotationBase};
///
/// struct Unpositioned {
///     base: AnnotationBase<MarkerLayer>,
/// }
///
/// impl Annotation for Unpositioned {
///     type Content = MarkerLayer;
///
///     fn base(&self) -> &AnnotationBase<MarkerLayer> {
///         &self.base
///     }
///
///     fn base_mut(&mut self) -> &mut AnnotationBase<MarkerLayer> {
///         &mut self.base
///     }
/// }
/// ```
///
/// The bare base state cannot be positioned either:
///
/// ```compile_fail
/// use chart_annotation::content::MarkerLayer;
/// use chart_annotation::domain::{Annotation, AnnotationBase};
///
/// let mut base = AnnotationBase::<MarkerLayer>::new();
/// base.position_content_layer();
/// ```
///
/// [`position_content_layer`]: Annotation::position_content_layer
pub trait Annotation {
    type Content: ContentLayer;

    fn base(&self) -> &AnnotationBase<Self::Content>;

    fn base_mut(&mut self) -> &mut AnnotationBase<Self::Content>;

    /// Resolve the anchor against the host and move the content to
    /// `anchor + displacement`.
    ///
    /// Implementations must be a no-op when there is no live host, must not
    /// touch the host handle, and must give the same result when called
    /// again with unchanged inputs.
    fn position_content_layer(&mut self);

    fn content(&self) -> Option<&Self::Content> {
        self.base().content()
    }

    fn content_mut(&mut self) -> Option<&mut Self::Content> {
        self.base_mut().content_mut()
    }

    fn set_content(&mut self, content: Self::Content) {
        self.base_mut().set_content(content);
    }

    fn host(&self) -> Option<Rc<SurfaceFrame>> {
        self.base().host()
    }

    fn host_ref(&self) -> &HostRef {
        self.base().host_ref()
    }

    fn set_host(&mut self, host: HostRef) {
        self.base_mut().set_host(host);
    }

    fn clear_host(&mut self) {
        self.base_mut().clear_host();
    }

    fn displacement(&self) -> Vector {
        self.base().displacement()
    }

    fn set_displacement(&mut self, dx: f32, dy: f32) {
        self.base_mut().set_displacement(dx, dy);
    }
}
