//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, ImageError, PipelineError, SegmentError, TextError};

/// This is the foundation error enum. One variant per error domain in the
/// Storyloom workspace.
///
/// # Examples
///
/// ```
/// use storyloom_error::{StoryloomError, ConfigError};
///
/// let config_err = ConfigError::new("STORYLOOM_API_KEY not set");
/// let err: StoryloomError = config_err.into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryloomErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Request builder validation error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Text backend error
    #[from(TextError)]
    Text(TextError),
    /// Image backend error
    #[from(ImageError)]
    Image(ImageError),
    /// Page segmentation error
    #[from(SegmentError)]
    Segment(SegmentError),
    /// Stage-tagged pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Storyloom error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyloom_error::{StoryloomResult, SegmentError, SegmentErrorKind};
///
/// fn might_fail() -> StoryloomResult<()> {
///     Err(SegmentError::new(SegmentErrorKind::ZeroPageCount))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyloom Error: {}", _0)]
pub struct StoryloomError(Box<StoryloomErrorKind>);

impl StoryloomError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryloomErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryloomErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StoryloomErrorKind
impl<T> From<T> for StoryloomError
where
    T: Into<StoryloomErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyloom operations.
///
/// # Examples
///
/// ```
/// use storyloom_error::{StoryloomResult, TextError, TextErrorKind};
///
/// fn fetch_narrative() -> StoryloomResult<String> {
///     Err(TextError::new(TextErrorKind::Http("connection refused".to_string())))?
/// }
/// ```
pub type StoryloomResult<T> = std::result::Result<T, StoryloomError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageErrorKind, TextErrorKind};

    #[test]
    fn transport_failures_roll_up_through_the_backend_kinds() {
        let text: StoryloomError =
            TextError::new(TextErrorKind::Http("connection refused".to_string())).into();
        assert!(matches!(text.kind(), StoryloomErrorKind::Text(_)));

        let image: StoryloomError =
            ImageError::new(ImageErrorKind::Http("connection reset".to_string())).into();
        assert!(matches!(image.kind(), StoryloomErrorKind::Image(_)));
    }
}
