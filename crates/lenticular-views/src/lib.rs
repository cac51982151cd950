#![deny(missing_docs)]
//! View providers feeding the lenticular interlacer
//!
//! A view is one of N source images representing a distinct viewpoint to be
//! shown through the optical overlay. This crate builds the ordered set of
//! views the interlacer consumes, either synthetically (calibration and
//! alignment patterns) or from numbered image files on disk.

/// Error types for the view provider.
pub mod error;

/// View generation modes and their source locations.
pub mod mode;

/// Loading and generating view sets.
pub mod provider;

pub use crate::error::ViewError;
pub use crate::mode::{SourceSpec, ViewMode};
pub use crate::provider::{load_views, ViewSet};
