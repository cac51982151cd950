#![deny(missing_docs)]
//! Image processing operations for lenticular interlacing

/// The view-interlacing transform and its configuration.
pub mod interlace;

/// Pixel interpolation modes for image resampling.
pub mod interpolation;

/// Image resizing operations.
pub mod resize;
