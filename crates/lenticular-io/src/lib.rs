#![deny(missing_docs)]
//! Image reading and writing for the lenticular interlacing pipeline

/// Error types for the io module.
pub mod error;

/// High-level read functions dispatching on the file extension.
pub mod functional;

/// JPEG image encoding and decoding.
pub mod jpeg;

/// PNG image encoding and decoding.
pub mod png;

pub use crate::error::IoError;
