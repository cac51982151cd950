use std::path::PathBuf;

use crate::error::ViewError;

/// Location of a numbered image sequence on disk.
///
/// The sequence is 1-indexed and shares a common base name and extension:
/// `{dir}/{base}-01.{ext}`, `{dir}/{base}-02.{ext}`, and so on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSpec {
    /// Directory holding the numbered files.
    pub dir: PathBuf,
    /// Base name shared by the numbered files.
    pub base: String,
    /// File extension shared by the numbered files.
    pub ext: String,
}

impl SourceSpec {
    /// Path of the `index`-th file of the sequence (1-indexed).
    pub fn numbered_path(&self, index: usize) -> PathBuf {
        self.dir
            .join(format!("{}-{:02}.{}", self.base, index, self.ext))
    }
}

/// Source of the views to interlace, one variant per generation mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// All views black except one all-white view, used to locate a single
    /// viewing channel under the overlay.
    Calibration {
        /// Index of the white view; defaults to the centre view.
        highlight: Option<usize>,
    },
    /// Solid primary colors cycling red, blue, green across the views, used
    /// to align the overlay with the screen pixels.
    AlternatingColor,
    /// Numbered reference images tiled into a grid, one cell per view, used
    /// to measure crosstalk between views.
    ReferenceGrid(SourceSpec),
    /// Arbitrary numbered image files sharing a base name.
    Sequence(SourceSpec),
}

impl ViewMode {
    /// Build a mode from its selector string and mode-specific source options.
    ///
    /// Selectors are `calibration`, `alternating-color`, `reference-grid` and
    /// `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnsupportedMode`] for an unknown selector and
    /// [`ViewError::MissingSource`] when a file-backed mode has no source.
    pub fn from_selector(
        selector: &str,
        source: Option<SourceSpec>,
        highlight: Option<usize>,
    ) -> Result<Self, ViewError> {
        match selector {
            "calibration" => Ok(ViewMode::Calibration { highlight }),
            "alternating-color" => Ok(ViewMode::AlternatingColor),
            "reference-grid" => source
                .map(ViewMode::ReferenceGrid)
                .ok_or(ViewError::MissingSource("reference-grid")),
            "sequence" => source
                .map(ViewMode::Sequence)
                .ok_or(ViewError::MissingSource("sequence")),
            other => Err(ViewError::UnsupportedMode(other.to_string())),
        }
    }

    /// Stem used to name the interlaced output file.
    pub fn output_stem(&self) -> &str {
        match self {
            ViewMode::Calibration { .. } => "calibration",
            ViewMode::AlternatingColor => "alternating-color",
            ViewMode::ReferenceGrid(_) => "reference-grid",
            ViewMode::Sequence(source) => &source.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{SourceSpec, ViewMode};
    use crate::error::ViewError;

    fn source() -> SourceSpec {
        SourceSpec {
            dir: PathBuf::from("/tmp/views"),
            base: "ferrari".to_string(),
            ext: "jpg".to_string(),
        }
    }

    #[test]
    fn numbered_path() {
        assert_eq!(
            source().numbered_path(3),
            PathBuf::from("/tmp/views/ferrari-03.jpg")
        );
    }

    #[test]
    fn selector_round_trip() -> Result<(), ViewError> {
        assert_eq!(
            ViewMode::from_selector("calibration", None, Some(1))?,
            ViewMode::Calibration { highlight: Some(1) }
        );
        assert_eq!(
            ViewMode::from_selector("alternating-color", None, None)?,
            ViewMode::AlternatingColor
        );
        assert_eq!(
            ViewMode::from_selector("sequence", Some(source()), None)?,
            ViewMode::Sequence(source())
        );
        Ok(())
    }

    #[test]
    fn unknown_selector() {
        let res = ViewMode::from_selector("plasma", None, None);
        assert!(matches!(res, Err(ViewError::UnsupportedMode(m)) if m == "plasma"));
    }

    #[test]
    fn file_backed_mode_needs_source() {
        let res = ViewMode::from_selector("sequence", None, None);
        assert!(matches!(res, Err(ViewError::MissingSource("sequence"))));
    }

    #[test]
    fn output_stem() {
        assert_eq!(
            ViewMode::Calibration { highlight: None }.output_stem(),
            "calibration"
        );
        assert_eq!(ViewMode::Sequence(source()).output_stem(), "ferrari");
    }
}
