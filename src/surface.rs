//! Drawing surface that hosts annotations
//!
//! A `Surface` owns its frame (identity plus geometry) behind an `Rc`.
//! Annotations only ever see the frame through a weak [`HostRef`], so the
//! surface never owns annotations and annotations never keep the surface
//! alive. When the surface is dropped the frame is marked dead first, which
//! empties every outstanding handle even if someone still holds the `Rc`.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Result, bail};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::config::ShapeColor;
use crate::content::ContentLayer;
use crate::domain::{Annotation, HostRef, Point, Rect, Size, SurfaceId};
use crate::render;

/// Largest image edge `Surface::render` will allocate
const MAX_RENDER_EDGE: f32 = 16384.0;

/// Frame outline color
const FRAME_COLOR: ShapeColor = ShapeColor {
    r: 0.6,
    g: 0.6,
    b: 0.6,
};

/// Data ranges shown in the plot area. y grows upward in data space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataWindow {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Default for DataWindow {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }
}

impl DataWindow {
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

/// Linear map of `v` from `[from_a, from_b]` onto `[to_a, to_b]`.
/// A degenerate source range maps to the middle of the target.
fn remap(v: f32, from_a: f32, from_b: f32, to_a: f32, to_b: f32) -> f32 {
    if from_a == from_b {
        return (to_a + to_b) * 0.5;
    }
    to_a + (v - from_a) / (from_b - from_a) * (to_b - to_a)
}

/// Shared, weakly referenced part of a surface
#[derive(Debug)]
pub struct SurfaceFrame {
    id: SurfaceId,
    live: Cell<bool>,
    size: Cell<Size>,
    plot_area: Cell<Rect>,
    data_window: Cell<DataWindow>,
}

impl SurfaceFrame {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// False once the owning `Surface` has been dropped
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn size(&self) -> Size {
        self.size.get()
    }

    pub fn plot_area(&self) -> Rect {
        self.plot_area.get()
    }

    pub fn data_window(&self) -> DataWindow {
        self.data_window.get()
    }

    /// Convert a data-space point to surface space.
    ///
    /// `(x_min, y_min)` lands on the bottom-left corner of the plot area and
    /// `(x_max, y_max)` on the top-right.
    pub fn data_to_surface(&self, p: Point) -> Point {
        let area = self.plot_area();
        let window = self.data_window();
        Point::new(
            remap(p.x, window.x_min, window.x_max, area.left, area.right),
            remap(p.y, window.y_min, window.y_max, area.bottom, area.top),
        )
    }

    /// Inverse of [`data_to_surface`](Self::data_to_surface)
    pub fn surface_to_data(&self, p: Point) -> Point {
        let area = self.plot_area();
        let window = self.data_window();
        Point::new(
            remap(p.x, area.left, area.right, window.x_min, window.x_max),
            remap(p.y, area.bottom, area.top, window.y_min, window.y_max),
        )
    }
}

/// A drawing surface: the host side of the annotation relationship
#[derive(Debug)]
pub struct Surface {
    frame: Rc<SurfaceFrame>,
}

impl Surface {
    /// Create a surface whose plot area covers the whole of `size`
    pub fn new(size: Size) -> Self {
        let frame = SurfaceFrame {
            id: SurfaceId::next(),
            live: Cell::new(true),
            size: Cell::new(size),
            plot_area: Cell::new(Rect::from_origin_size(Point::ORIGIN, size)),
            data_window: Cell::new(DataWindow::default()),
        };
        log::debug!("Created {} ({}x{})", frame.id, size.width, size.height);
        Self {
            frame: Rc::new(frame),
        }
    }

    pub fn with_plot_area(self, plot_area: Rect) -> Self {
        self.set_plot_area(plot_area);
        self
    }

    pub fn with_data_window(self, window: DataWindow) -> Self {
        self.set_data_window(window);
        self
    }

    pub fn id(&self) -> SurfaceId {
        self.frame.id
    }

    pub fn frame(&self) -> &Rc<SurfaceFrame> {
        &self.frame
    }

    /// A fresh weak handle to this surface
    pub fn handle(&self) -> HostRef {
        HostRef::new(&self.frame)
    }

    pub fn size(&self) -> Size {
        self.frame.size()
    }

    pub fn set_size(&self, size: Size) {
        self.frame.size.set(size);
    }

    pub fn plot_area(&self) -> Rect {
        self.frame.plot_area()
    }

    /// Change the plot area. Hosted annotations move on the next `layout`.
    pub fn set_plot_area(&self, plot_area: Rect) {
        self.frame.plot_area.set(plot_area);
    }

    pub fn data_window(&self) -> DataWindow {
        self.frame.data_window()
    }

    /// Change the data window. Hosted annotations move on the next `layout`.
    pub fn set_data_window(&self, window: DataWindow) {
        self.frame.data_window.set(window);
    }

    /// Whether `annotation` is currently hosted by this surface
    pub fn is_hosting<A: Annotation + ?Sized>(&self, annotation: &A) -> bool {
        annotation.host_ref().refers_to(&self.frame)
    }

    /// Host `annotation` on this surface and position it
    pub fn attach<A: Annotation + ?Sized>(&self, annotation: &mut A) {
        annotation.set_host(self.handle());
        log::debug!("Attached annotation to {}", self.id());
        annotation.position_content_layer();
    }

    /// Stop hosting `annotation`.
    ///
    /// Returns false and leaves the annotation untouched if it is hosted
    /// elsewhere or not at all.
    pub fn detach<A: Annotation + ?Sized>(&self, annotation: &mut A) -> bool {
        if !self.is_hosting(annotation) {
            return false;
        }
        annotation.clear_host();
        log::debug!("Detached annotation from {}", self.id());
        true
    }

    /// Layout pass: reposition every annotation hosted by this surface.
    ///
    /// Annotations hosted elsewhere are skipped. Returns how many were
    /// repositioned.
    pub fn layout<'a, A, I>(&self, annotations: I) -> usize
    where
        A: Annotation + ?Sized + 'a,
        I: IntoIterator<Item = &'a mut A>,
    {
        let mut positioned = 0;
        for annotation in annotations {
            if self.is_hosting(&*annotation) {
                annotation.position_content_layer();
                positioned += 1;
            }
        }
        log::debug!("Layout of {} positioned {} annotations", self.id(), positioned);
        positioned
    }

    /// Render the surface: background, plot frame, then the content of each
    /// hosted annotation in iteration order
    pub fn render<'a, A, I>(&self, annotations: I, background: ShapeColor) -> Result<RgbaImage>
    where
        A: Annotation + ?Sized + 'a,
        I: IntoIterator<Item = &'a A>,
    {
        let size = self.size();
        let (w, h) = (size.width.ceil(), size.height.ceil());
        if !(w >= 1.0 && h >= 1.0 && w <= MAX_RENDER_EDGE && h <= MAX_RENDER_EDGE) {
            bail!(
                "Cannot render {} with size {}x{}",
                self.id(),
                size.width,
                size.height
            );
        }

        let mut img = RgbaImage::from_pixel(w as u32, h as u32, Rgba(background.to_rgba_u8()));
        render::image::draw_frame_on_image(&mut img, self.plot_area(), FRAME_COLOR);

        let layers: Vec<&dyn ContentLayer> = annotations
            .into_iter()
            .filter(|annotation| self.is_hosting(*annotation))
            .filter_map(|annotation| annotation.content())
            .map(|content| content as &dyn ContentLayer)
            .collect();
        render::image::draw_layers_on_image(&mut img, &layers, Point::ORIGIN);

        Ok(img)
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        // Empty every HostRef before the frame can be observed again
        self.frame.live.set(false);
        log::debug!("Dropped {}", self.frame.id);
    }
}
