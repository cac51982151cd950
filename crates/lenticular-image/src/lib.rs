#![deny(missing_docs)]
//! Image types for generating and manipulating interlaced composites

/// image representation for the interlacing pipeline.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
