#![deny(missing_docs)]
//! Lenticular and parallax-barrier image interlacing in Rust
//!
//! Re-exports the member crates under one namespace: image containers,
//! the interlacing transform, file io and the view providers.

#[doc(inline)]
pub use lenticular_image as image;

#[doc(inline)]
pub use lenticular_imgproc as imgproc;

#[doc(inline)]
pub use lenticular_io as io;

#[doc(inline)]
pub use lenticular_views as views;
