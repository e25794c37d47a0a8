//! Anchored annotations for 2D chart drawing surfaces
//!
//! An annotation owns a piece of content (a label or marker), keeps a weak
//! handle to the surface hosting it, and applies a displacement on top of an
//! anchor that each annotation variant resolves its own way. Surfaces decide
//! when to reposition; annotations decide where.

pub mod annotations;
pub mod config;
pub mod content;
pub mod domain;
pub mod render;
pub mod surface;

pub use annotations::{AlignedAnnotation, DataAnnotation, PinnedAnnotation};
pub use config::{AnnotationConfig, ShapeColor};
pub use content::{ContentLayer, LabelAlign, LabelLayer, Layer, MarkerLayer, MarkerShape};
pub use domain::{Annotation, AnnotationBase, HostRef, Point, Rect, Size, SurfaceId, Vector};
pub use surface::{DataWindow, Surface, SurfaceFrame};
