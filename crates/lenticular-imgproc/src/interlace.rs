//! Interlace a set of views into a single composite image.
//!
//! The composite is meant to sit behind a multi-view optical overlay (a
//! lenticular sheet or a parallax barrier) that maps each screen column to one
//! viewing angle. Column `c` of the composite is sourced from view
//! `c % n_views`, so that each eye sees only the columns of its own view.

use lenticular_image::{Image, ImageError, ImageSize};

use crate::interpolation::InterpolationMode;
use crate::resize::resize_fast;

/// An error type for the interlacing transform.
#[derive(thiserror::Error, Debug)]
pub enum InterlaceError {
    /// The view count and the screen resolution cannot form a valid layout.
    #[error(
        "Invalid layout: {n_views} views cannot be interlaced into a {screen_width}x{screen_height} screen"
    )]
    InvalidConfiguration {
        /// The number of views requested.
        n_views: usize,
        /// The screen width in pixels.
        screen_width: usize,
        /// The screen height in pixels.
        screen_height: usize,
    },

    /// The number of views handed over does not match the layout.
    #[error("Expected {expected} views, got {got}")]
    ViewCountMismatch {
        /// The number of views the layout expects.
        expected: usize,
        /// The number of views received.
        got: usize,
    },

    /// A view's dimensions do not match the layout.
    #[error("View {view_index} has height {got}, expected {expected}")]
    InvalidViewShape {
        /// The index of the offending view.
        view_index: usize,
        /// The expected view height in pixels.
        expected: usize,
        /// The actual view height in pixels.
        got: usize,
    },

    /// Error from the underlying image operations.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Geometry of an interlaced composite.
///
/// An explicit, validated configuration passed into both the view provider
/// and the interlacer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterlaceLayout {
    /// Number of views cycled across the screen columns.
    pub n_views: usize,
    /// Full resolution of the target screen in pixels.
    pub screen_size: ImageSize,
}

impl InterlaceLayout {
    /// Create a validated layout.
    ///
    /// # Errors
    ///
    /// Returns [`InterlaceError::InvalidConfiguration`] when `n_views` is
    /// zero, the screen height is zero, or the screen is narrower than the
    /// number of views (some views would receive zero output columns).
    pub fn new(n_views: usize, screen_size: ImageSize) -> Result<Self, InterlaceError> {
        let layout = Self {
            n_views,
            screen_size,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Check the layout invariants.
    pub fn validate(&self) -> Result<(), InterlaceError> {
        if self.n_views == 0
            || self.screen_size.height == 0
            || self.screen_size.width < self.n_views
        {
            return Err(InterlaceError::InvalidConfiguration {
                n_views: self.n_views,
                screen_width: self.screen_size.width,
                screen_height: self.screen_size.height,
            });
        }
        Ok(())
    }

    /// Sub-resolution each view is resized to before the column scatter.
    ///
    /// The width is the floored share of the screen width; the height is the
    /// full screen height (the interlacer never resamples vertically).
    pub fn view_size(&self) -> ImageSize {
        ImageSize {
            width: self.screen_size.width / self.n_views,
            height: self.screen_size.height,
        }
    }

    /// Number of trailing screen columns the scatter cannot fill.
    ///
    /// Non-zero only when the screen width is not an exact multiple of the
    /// view count; see [`interlace`] for the boundary policy.
    pub fn unfilled_columns(&self) -> usize {
        self.screen_size.width % self.n_views
    }
}

/// Interlace a set of views into a composite image.
///
/// Each view is resized to [`InterlaceLayout::view_size`] and its columns are
/// scattered into the composite at a stride of `n_views`: output column
/// `n + k * n_views` receives column `k` of resized view `n`. The composite
/// is freshly allocated on every call; the function is a pure function of its
/// inputs and holds no state between runs.
///
/// When the screen width is not an exact multiple of the view count, the
/// trailing `screen_width % n_views` columns of the last partial cycle stay
/// black: the floored sub-width leaves no source column for them. A warning
/// is logged so the truncation does not pass silently.
///
/// # Arguments
///
/// * `views` - The views to interlace, in interlacing order. Each view must
///   have the full screen height.
/// * `layout` - The validated composite geometry.
/// * `interpolation` - The interpolation mode used to resize the views.
///
/// # Example
///
/// ```
/// use lenticular_image::{Image, ImageSize};
/// use lenticular_imgproc::interlace::{interlace, InterlaceLayout};
/// use lenticular_imgproc::interpolation::InterpolationMode;
///
/// let layout = InterlaceLayout::new(
///     2,
///     ImageSize {
///         width: 8,
///         height: 4,
///     },
/// )
/// .unwrap();
///
/// let views = vec![
///     Image::<u8, 3>::from_size_val(layout.view_size(), 0).unwrap(),
///     Image::<u8, 3>::from_size_val(layout.view_size(), 255).unwrap(),
/// ];
///
/// let composite = interlace(&views, &layout, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(composite.size().width, 8);
/// assert_eq!(*composite.get_pixel(0, 0, 0).unwrap(), 0);
/// assert_eq!(*composite.get_pixel(1, 0, 0).unwrap(), 255);
/// ```
///
/// # Errors
///
/// Returns [`InterlaceError::ViewCountMismatch`] when `views.len()` differs
/// from the layout, and [`InterlaceError::InvalidViewShape`] when a view's
/// height differs from the screen height.
pub fn interlace(
    views: &[Image<u8, 3>],
    layout: &InterlaceLayout,
    interpolation: InterpolationMode,
) -> Result<Image<u8, 3>, InterlaceError> {
    layout.validate()?;

    if views.len() != layout.n_views {
        return Err(InterlaceError::ViewCountMismatch {
            expected: layout.n_views,
            got: views.len(),
        });
    }

    for (view_index, view) in views.iter().enumerate() {
        if view.height() != layout.screen_size.height {
            return Err(InterlaceError::InvalidViewShape {
                view_index,
                expected: layout.screen_size.height,
                got: view.height(),
            });
        }
    }

    if layout.unfilled_columns() != 0 {
        log::warn!(
            "screen width {} is not a multiple of {} views; the trailing {} columns stay black",
            layout.screen_size.width,
            layout.n_views,
            layout.unfilled_columns()
        );
    }

    let mut composite = Image::from_size_val(layout.screen_size, 0u8)?;
    let mut resized = Image::from_size_val(layout.view_size(), 0u8)?;

    for (n, view) in views.iter().enumerate() {
        resize_fast(view, &mut resized, interpolation)?;
        scatter_columns(&resized, &mut composite, n, layout.n_views);
    }

    Ok(composite)
}

/// Copy every column `k` of `src` into column `offset + k * stride` of `dst`.
///
/// Columns that would land past the destination width are dropped.
fn scatter_columns(src: &Image<u8, 3>, dst: &mut Image<u8, 3>, offset: usize, stride: usize) {
    let (src_width, src_height) = (src.width(), src.height());
    let dst_width = dst.width();
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for y in 0..src_height {
        let src_row = y * src_width * 3;
        let dst_row = y * dst_width * 3;
        for k in 0..src_width {
            let dst_col = offset + k * stride;
            if dst_col >= dst_width {
                break;
            }
            let s = src_row + k * 3;
            let d = dst_row + dst_col * 3;
            dst_data[d..d + 3].copy_from_slice(&src_data[s..s + 3]);
        }
    }
}
