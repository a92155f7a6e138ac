//! Model provider errors.

/// Model provider-specific error conditions.
///
/// Every failure on the request path — transport, API rejection, body
/// decoding, response shapes the extractor cannot normalize — lands in one
/// of these variants so callers handle a single error type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Transport-level failure (connection, TLS, timeout)
    #[display("Request failed: {}", _0)]
    Request(String),

    /// The API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body returned with the error
        message: String,
    },

    /// The response body could not be decoded
    #[display("Parse error: {}", _0)]
    Parse(String),

    /// The response shape could not be normalized to text
    #[display("Unsupported response shape: {}", _0)]
    UnsupportedResponseShape(String),

    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::Request("connection refused".to_string()));
/// assert!(format!("{}", err).contains("connection refused"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
