/// Interpolation mode used when resampling views.
///
/// The filter choice affects visual quality but not correctness of the
/// interlacing pattern; both modes are deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Bilinear interpolation between adjacent pixels.
    Bilinear,
    /// Nearest neighbor interpolation (no interpolation).
    Nearest,
}
