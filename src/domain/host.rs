//! Non-owning handle from an annotation back to the surface hosting it

use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::surface::SurfaceFrame;

/// Process-unique identity of a surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        SurfaceId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Weak reference to a hosting surface.
///
/// Holding a `HostRef` never keeps the surface alive. Once the surface is
/// dropped every handle to it reads as empty, so there is no way to observe
/// a dangling host.
#[derive(Clone, Default)]
pub struct HostRef(Weak<SurfaceFrame>);

impl HostRef {
    pub(crate) fn new(frame: &Rc<SurfaceFrame>) -> Self {
        HostRef(Rc::downgrade(frame))
    }

    /// An empty handle, equivalent to `HostRef::default()`
    pub fn empty() -> Self {
        Self::default()
    }

    /// The live surface frame, or `None` if empty or the surface is gone
    pub fn get(&self) -> Option<Rc<SurfaceFrame>> {
        self.0.upgrade().filter(|frame| frame.is_live())
    }

    pub fn is_attached(&self) -> bool {
        self.get().is_some()
    }

    pub fn id(&self) -> Option<SurfaceId> {
        self.get().map(|frame| frame.id())
    }

    /// Whether this handle points at the given live frame
    pub fn refers_to(&self, frame: &Rc<SurfaceFrame>) -> bool {
        self.is_attached() && std::ptr::eq(self.0.as_ptr(), Rc::as_ptr(frame))
    }

    pub fn clear(&mut self) {
        self.0 = Weak::new();
    }
}

/// Two handles are equal when they point at the same live surface or are
/// both empty. A handle whose surface was dropped compares as empty.
impl PartialEq for HostRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl fmt::Debug for HostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => f.debug_tuple("HostRef").field(&id).finish(),
            None => f.write_str("HostRef(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Size;
    use crate::surface::Surface;

    #[test]
    fn test_empty_handle() {
        let host = HostRef::empty();
        assert!(!host.is_attached());
        assert!(host.get().is_none());
        assert_eq!(host, HostRef::default());
        assert_eq!(format!("{:?}", host), "HostRef(empty)");
    }

    #[test]
    fn test_handle_does_not_keep_surface_alive() {
        let surface = Surface::new(Size::new(100.0, 100.0));
        let host = surface.handle();
        assert_eq!(host.id(), Some(surface.id()));
        assert!(host.refers_to(surface.frame()));

        drop(surface);
        assert!(!host.is_attached());
        assert!(host.get().is_none());
        assert_eq!(host, HostRef::empty());
    }

    #[test]
    fn test_handles_to_distinct_surfaces_differ() {
        let a = Surface::new(Size::new(10.0, 10.0));
        let b = Surface::new(Size::new(10.0, 10.0));
        assert_ne!(a.handle(), b.handle());
        assert_eq!(a.handle(), a.handle());
        assert!(!a.handle().refers_to(b.frame()));
    }

    #[test]
    fn test_clear() {
        let surface = Surface::new(Size::new(10.0, 10.0));
        let mut host = surface.handle();
        host.clear();
        assert!(!host.is_attached());
        assert!(surface.handle().is_attached());
    }
}
