use fast_image_resize as fr;
use lenticular_image::{Image, ImageError};

use crate::interpolation::InterpolationMode;

/// Resize an image to a new size using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// The function resizes an image to the size of the destination container
/// using the specified interpolation mode. It supports only 3-channel images
/// with u8 data; the value range is preserved (u8 in, u8 out, no
/// normalization round trip).
///
/// # Arguments
///
/// * `src` - The input image container with 3 channels.
/// * `dst` - The output image container with 3 channels, pre-allocated at the target size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use lenticular_image::{Image, ImageSize};
/// use lenticular_imgproc::interpolation::InterpolationMode;
/// use lenticular_imgproc::resize::resize_fast;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<u8, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(&image, &mut image_resized, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
///
/// # Errors
///
/// The function returns an error if either image has a zero dimension or the
/// underlying resizer rejects the buffers.
pub fn resize_fast(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.width() == 0 || src.height() == 0 || dst.width() == 0 || dst.height() == 0 {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let src_image = fr::images::ImageRef::new(
        src.width() as u32,
        src.height() as u32,
        src.as_slice(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let (dst_width, dst_height) = (dst.width() as u32, dst.height() as u32);
    let mut dst_image = fr::images::Image::from_slice_u8(
        dst_width,
        dst_height,
        dst.as_slice_mut(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let resize_alg = match interpolation {
        InterpolationMode::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
        InterpolationMode::Nearest => fr::ResizeAlg::Nearest,
    };

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &fr::ResizeOptions::new().resize_alg(resize_alg),
        )
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    Ok(())
}
