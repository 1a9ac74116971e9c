//! Text backend error types.

/// Specific error conditions for the chat-completion backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TextErrorKind {
    /// Transport-level failure before an HTTP status was received
    #[display("Request failed: {}", _0)]
    Http(String),
    /// Backend returned a non-2xx status
    #[display("Text backend returned status {}: {}", status, body)]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },
    /// Backend returned 2xx but the response shape was unexpected
    #[display("Malformed text backend response: {}", _0)]
    MalformedResponse(String),
}

/// Error type for text generation operations.
///
/// # Examples
///
/// ```
/// use storyloom_error::{TextError, TextErrorKind};
///
/// let err = TextError::new(TextErrorKind::Api {
///     status: 500,
///     body: "internal error".to_string(),
/// });
/// assert!(format!("{}", err).contains("500"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Text Error: {} at line {} in {}", kind, line, file)]
pub struct TextError {
    /// The specific error condition
    pub kind: TextErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TextError {
    /// Create a new TextError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TextErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
