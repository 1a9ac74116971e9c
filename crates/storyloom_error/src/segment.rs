//! Page segmentation error types.

/// Specific error conditions for narrative page segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SegmentErrorKind {
    /// The backend returned too little content to fill any page
    #[display("Narrative has {} sentences, cannot fill {} pages", sentences, target)]
    InsufficientContent {
        /// Sentences found in the raw narrative
        sentences: usize,
        /// Requested page count
        target: usize,
    },
    /// The requested page count is zero
    #[display("Target page count must be at least 1")]
    ZeroPageCount,
}

/// Error type for segmentation operations.
///
/// # Examples
///
/// ```
/// use storyloom_error::{SegmentError, SegmentErrorKind};
///
/// let err = SegmentError::new(SegmentErrorKind::InsufficientContent {
///     sentences: 0,
///     target: 3,
/// });
/// assert!(format!("{}", err).contains("3 pages"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Segment Error: {} at line {} in {}", kind, line, file)]
pub struct SegmentError {
    /// The specific error condition
    pub kind: SegmentErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SegmentError {
    /// Create a new SegmentError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SegmentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
