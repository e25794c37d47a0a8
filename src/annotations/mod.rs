//! Concrete annotation variants
//!
//! Each variant only differs in how it resolves its anchor against the host:
//! - `DataAnnotation`: a data-space point mapped through the data window
//! - `PinnedAnnotation`: a fixed surface-space point
//! - `AlignedAnnotation`: a fractional location inside the plot area

pub mod aligned;
pub mod data;
pub mod pinned;

pub use aligned::AlignedAnnotation;
pub use data::DataAnnotation;
pub use pinned::PinnedAnnotation;
