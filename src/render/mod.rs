//! Content rendering module
//!
//! This module contains:
//! - Geometry constants shared by marker and label painting
//! - Image rendering using tiny-skia (for saving to file)

pub mod geometry;
pub mod image;
