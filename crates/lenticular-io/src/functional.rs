use std::path::Path;

use lenticular_image::Image;

use crate::error::IoError;
use crate::jpeg::read_image_jpeg_rgb8;
use crate::png::read_image_png_rgb8;

/// Reads a RGB8 image from the given file path, dispatching on the extension.
///
/// Supported extensions are `png`, `jpg` and `jpeg` (case-insensitive).
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A RGB image with three channels (rgb8).
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] when the file is missing and
/// [`IoError::InvalidFileExtension`] when the extension is not supported.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

    match extension.as_str() {
        "png" => read_image_png_rgb8(file_path),
        "jpg" | "jpeg" => read_image_jpeg_rgb8(file_path),
        _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::read_image_any_rgb8;
    use crate::error::IoError;
    use crate::png::write_image_png_rgb8;
    use lenticular_image::{Image, ImageSize};

    #[test]
    fn read_any_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("any.png");

        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 4,
                height: 2,
            },
            42u8,
        )?;
        write_image_png_rgb8(&file_path, &image)?;

        let image_back = read_image_any_rgb8(&file_path)?;
        assert_eq!(image_back.as_slice(), image.as_slice());
        Ok(())
    }

    #[test]
    fn read_any_unknown_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.bmp");
        std::fs::write(&file_path, b"bmp?")?;

        let res = read_image_any_rgb8(&file_path);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
        Ok(())
    }

    #[test]
    fn read_any_missing() {
        let res = read_image_any_rgb8("missing.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }
}
