//! Stage-tagged pipeline error types.

use crate::StoryloomError;

/// The pipeline stage a failure is attributed to.
///
/// Segmentation failures happen before any image call and are attributed
/// to the text stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum Stage {
    /// Narrative text generation (including page segmentation)
    #[display("text")]
    Text,
    /// Cover image generation
    #[display("cover image")]
    Cover,
    /// Background image generation for one page (1-based)
    #[display("page {} image", _0)]
    PageImage(usize),
}

/// Pipeline error tagging a source error with the stage that failed.
///
/// The tag lets a caller present a precise retry prompt without inspecting
/// the source error.
///
/// # Examples
///
/// ```
/// use storyloom_error::{ImageError, ImageErrorKind, PipelineError, Stage};
///
/// let err = PipelineError::new(
///     Stage::Cover,
///     ImageError::new(ImageErrorKind::Http("timed out".to_string())),
/// );
/// assert_eq!(err.stage, Stage::Cover);
/// assert!(format!("{}", err).contains("cover image"));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Story generation failed at {} stage: {}", stage, source)]
pub struct PipelineError {
    /// The stage that failed
    pub stage: Stage,
    /// The underlying failure
    pub source: Box<StoryloomError>,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(stage: Stage, source: impl Into<StoryloomError>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage,
            source: Box::new(source.into()),
            line: location.line(),
            file: location.file(),
        }
    }
}
