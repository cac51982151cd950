use std::path::PathBuf;

use lenticular_image::ImageError;
use lenticular_imgproc::interlace::InterlaceError;
use lenticular_io::IoError;

/// An error type for the view provider.
#[derive(thiserror::Error, Debug)]
pub enum ViewError {
    /// Error when an expected source image is missing.
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),

    /// Error when the mode selector does not match a known mode.
    #[error("Unsupported view mode: {0}")]
    UnsupportedMode(String),

    /// Error when a file-backed mode is missing its source location.
    #[error("Mode '{0}' requires a source directory, base name and extension")]
    MissingSource(&'static str),

    /// Error when the calibration highlight index is out of range.
    #[error("Highlight index {highlight} is out of range for {n_views} views")]
    HighlightOutOfRange {
        /// The requested highlight index.
        highlight: usize,
        /// The number of views of the layout.
        n_views: usize,
    },

    /// Error from reading a source image.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Error from the underlying image operations.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error from the interlacing layout.
    #[error(transparent)]
    Interlace(#[from] InterlaceError),
}
