//! Pure domain types with minimal dependencies
//!
//! This module contains the geometry, the non-owning host handle and the
//! annotation positioning contract. Nothing here draws anything.

pub mod annotation;
pub mod geometry;
pub mod host;

pub use annotation::*;
pub use geometry::*;
pub use host::*;
