use std::path::Path;

use lenticular_image::{Image, ImageError, ImageSize};
use lenticular_imgproc::interlace::InterlaceLayout;
use lenticular_imgproc::interpolation::InterpolationMode;
use lenticular_imgproc::resize::resize_fast;
use lenticular_io::functional::read_image_any_rgb8;
use lenticular_io::IoError;

use crate::error::ViewError;
use crate::mode::{SourceSpec, ViewMode};

/// The views to interlace, in interlacing order.
pub type ViewSet = Vec<Image<u8, 3>>;

/// Solid primaries cycled across the alternating-color views: red, blue, green.
const COLOR_CYCLE: [[u8; 3]; 3] = [[255, 0, 0], [0, 0, 255], [0, 255, 0]];

/// Load or generate the views selected by `mode`.
///
/// Every returned view has the full screen height and three channels, ready
/// for the interlacer. Synthetic modes generate their views directly at the
/// per-view sub-resolution; file-backed modes resize their sources to the
/// full screen resolution and leave the horizontal squeeze to the interlacer.
///
/// # Errors
///
/// File-backed modes fail with [`ViewError::SourceNotFound`] when a numbered
/// file is missing; calibration fails with [`ViewError::HighlightOutOfRange`]
/// when the highlight index does not address a view.
pub fn load_views(mode: &ViewMode, layout: &InterlaceLayout) -> Result<ViewSet, ViewError> {
    layout.validate()?;
    match mode {
        ViewMode::Calibration { highlight } => {
            let highlight = highlight.unwrap_or(layout.n_views / 2);
            calibration_views(layout, highlight)
        }
        ViewMode::AlternatingColor => alternating_color_views(layout),
        ViewMode::ReferenceGrid(source) => reference_grid_views(layout, source),
        ViewMode::Sequence(source) => sequence_views(layout, source),
    }
}

fn calibration_views(layout: &InterlaceLayout, highlight: usize) -> Result<ViewSet, ViewError> {
    if highlight >= layout.n_views {
        return Err(ViewError::HighlightOutOfRange {
            highlight,
            n_views: layout.n_views,
        });
    }

    let size = layout.view_size();
    (0..layout.n_views)
        .map(|i| {
            let value = if i == highlight { 255 } else { 0 };
            Image::from_size_val(size, value).map_err(ViewError::from)
        })
        .collect()
}

fn alternating_color_views(layout: &InterlaceLayout) -> Result<ViewSet, ViewError> {
    let size = layout.view_size();
    (0..layout.n_views)
        .map(|i| solid_color(size, COLOR_CYCLE[i % 3]).map_err(ViewError::from))
        .collect()
}

fn solid_color(size: ImageSize, rgb: [u8; 3]) -> Result<Image<u8, 3>, ImageError> {
    let mut data = Vec::with_capacity(size.width * size.height * 3);
    for _ in 0..size.width * size.height {
        data.extend_from_slice(&rgb);
    }
    Image::new(size, data)
}

fn sequence_views(layout: &InterlaceLayout, source: &SourceSpec) -> Result<ViewSet, ViewError> {
    let mut views = Vec::with_capacity(layout.n_views);
    for i in 0..layout.n_views {
        log::info!("Loading frame {} of {}...", i + 1, layout.n_views);
        let view = read_source_image(&source.numbered_path(i + 1))?;
        views.push(resize_to(&view, layout.screen_size)?);
    }
    Ok(views)
}

fn reference_grid_views(
    layout: &InterlaceLayout,
    source: &SourceSpec,
) -> Result<ViewSet, ViewError> {
    let n_views = layout.n_views;
    // grid just large enough for one cell per view; 5 views give the classic 2x3
    let grid_rows = (n_views as f64).sqrt().floor() as usize;
    let grid_cols = n_views.div_ceil(grid_rows);

    let mut views = Vec::with_capacity(n_views);
    let mut tile_size: Option<ImageSize> = None;

    for i in 0..n_views {
        log::info!("Loading frame {} of {}...", i + 1, n_views);
        let tile = read_source_image(&source.numbered_path(i + 1))?;

        // all tiles must share one size so the cells line up
        let expected = *tile_size.get_or_insert(tile.size());
        if tile.size() != expected {
            return Err(ViewError::Image(ImageError::InvalidImageSize(
                tile.width(),
                tile.height(),
                expected.width,
                expected.height,
            )));
        }

        let canvas_size = ImageSize {
            width: grid_cols * expected.width,
            height: grid_rows * expected.height,
        };
        let mut canvas = Image::from_size_val(canvas_size, 0u8)?;

        // cells fill top-to-bottom, then left-to-right
        let cell_row = i % grid_rows;
        let cell_col = i / grid_rows;
        blit(
            &tile,
            &mut canvas,
            cell_col * expected.width,
            cell_row * expected.height,
        );

        views.push(resize_to(&canvas, layout.screen_size)?);
    }
    Ok(views)
}

/// Copy `src` into `dst` with its top-left corner at (x0, y0).
///
/// The caller guarantees the source fits inside the destination.
fn blit(src: &Image<u8, 3>, dst: &mut Image<u8, 3>, x0: usize, y0: usize) {
    let (src_width, src_height) = (src.width(), src.height());
    let dst_width = dst.width();
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for y in 0..src_height {
        let s = y * src_width * 3;
        let d = ((y0 + y) * dst_width + x0) * 3;
        dst_data[d..d + src_width * 3].copy_from_slice(&src_data[s..s + src_width * 3]);
    }
}

fn resize_to(src: &Image<u8, 3>, size: ImageSize) -> Result<Image<u8, 3>, ViewError> {
    if src.size() == size {
        return Ok(src.clone());
    }
    let mut resized = Image::from_size_val(size, 0u8)?;
    resize_fast(src, &mut resized, InterpolationMode::Bilinear)?;
    Ok(resized)
}

fn read_source_image(path: &Path) -> Result<Image<u8, 3>, ViewError> {
    match read_image_any_rgb8(path) {
        Err(IoError::FileDoesNotExist(p)) => Err(ViewError::SourceNotFound(p)),
        other => other.map_err(ViewError::from),
    }
}

#[cfg(test)]
mod tests {
    use lenticular_image::ImageSize;
    use lenticular_imgproc::interlace::InterlaceLayout;

    use super::load_views;
    use crate::error::ViewError;
    use crate::mode::ViewMode;

    fn layout() -> InterlaceLayout {
        InterlaceLayout::new(
            5,
            ImageSize {
                width: 20,
                height: 4,
            },
        )
        .unwrap()
    }

    #[test]
    fn calibration_highlights_the_centre_view() -> Result<(), ViewError> {
        let views = load_views(&ViewMode::Calibration { highlight: None }, &layout())?;
        assert_eq!(views.len(), 5);

        for (i, view) in views.iter().enumerate() {
            assert_eq!(view.size(), layout().view_size());
            let expected = if i == 2 { 255 } else { 0 };
            assert!(view.as_slice().iter().all(|&x| x == expected));
        }
        Ok(())
    }

    #[test]
    fn calibration_explicit_highlight() -> Result<(), ViewError> {
        let views = load_views(&ViewMode::Calibration { highlight: Some(4) }, &layout())?;
        assert!(views[4].as_slice().iter().all(|&x| x == 255));
        assert!(views[0].as_slice().iter().all(|&x| x == 0));
        Ok(())
    }

    #[test]
    fn calibration_highlight_out_of_range() {
        let res = load_views(&ViewMode::Calibration { highlight: Some(5) }, &layout());
        assert!(matches!(
            res,
            Err(ViewError::HighlightOutOfRange {
                highlight: 5,
                n_views: 5
            })
        ));
    }

    #[test]
    fn alternating_color_cycles_red_blue_green() -> Result<(), ViewError> {
        let views = load_views(&ViewMode::AlternatingColor, &layout())?;
        let expected = [
            [255, 0, 0],
            [0, 0, 255],
            [0, 255, 0],
            [255, 0, 0],
            [0, 0, 255],
        ];

        for (view, rgb) in views.iter().zip(expected.iter()) {
            for pixel in view.as_slice().chunks_exact(3) {
                assert_eq!(pixel, rgb.as_slice());
            }
        }
        Ok(())
    }
}
