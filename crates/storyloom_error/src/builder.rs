//! Builder validation error types.

/// Specific error conditions raised while building a story request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required field was never set
    #[display("Required field '{}' is missing", _0)]
    MissingField(&'static str),
    /// A field was set to an empty value
    #[display("Field '{}' cannot be empty", _0)]
    EmptyField(&'static str),
    /// More distinct themes than the request allows
    #[display("At most {} themes are allowed, got {}", limit, got)]
    TooManyThemes {
        /// Maximum number of distinct themes
        limit: usize,
        /// Number of distinct themes supplied
        got: usize,
    },
}

/// Error type for builder validation failures.
///
/// # Examples
///
/// ```
/// use storyloom_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::new(BuilderErrorKind::MissingField("mood"));
/// assert!(format!("{}", err).contains("mood"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    /// The specific error condition
    pub kind: BuilderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl BuilderError {
    /// Create a new BuilderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
