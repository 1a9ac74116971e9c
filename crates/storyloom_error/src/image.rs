//! Image backend error types.

/// Specific error conditions for the image-synthesis backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageErrorKind {
    /// Transport-level failure before an HTTP status was received
    #[display("Request failed: {}", _0)]
    Http(String),
    /// Backend returned a non-2xx, non-429 status
    #[display("Image backend returned status {}: {}", status, body)]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },
    /// Backend signalled rate limiting (HTTP 429); retryable
    #[display("Image backend rate limited: {}", _0)]
    RateLimited(String),
    /// Rate-limit retries were exhausted without a successful attempt
    #[display("Image backend still rate limited after {} attempts", attempts)]
    RateLimitExhausted {
        /// Total attempts made, including the first
        attempts: usize,
    },
    /// Backend returned 2xx but the response could not be parsed
    #[display("Malformed image backend response: {}", _0)]
    MalformedResponse(String),
    /// Backend returned 2xx with an empty image list
    #[display("Image backend returned no images")]
    EmptyResult,
}

impl ImageErrorKind {
    /// Whether this condition is worth retrying with backoff.
    ///
    /// Only rate limiting is retryable; auth failures, malformed prompts
    /// and server errors fail immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

/// Error type for image generation operations.
///
/// # Examples
///
/// ```
/// use storyloom_error::{ImageError, ImageErrorKind};
///
/// let err = ImageError::new(ImageErrorKind::EmptyResult);
/// assert!(format!("{}", err).contains("no images"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The specific error condition
    pub kind: ImageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
