//! Pipeline error types.

/// Specific error conditions for pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The analysis response lacks the required marker phrases
    #[display("Prompt analysis response does not contain the necessary information")]
    AnalysisIncomplete,
    /// One or more extracted scripts failed syntax validation
    #[display("Generated {} scripts contain syntax errors", stage)]
    InvalidGeneratedCode {
        /// Name of the stage whose batch was rejected
        stage: String,
    },
    /// The user prompt has fewer words than the intake minimum
    #[display("Prompt has {} words, need at least {}", words, minimum)]
    PromptTooShort {
        /// Observed word count
        words: usize,
        /// Required minimum word count
        minimum: usize,
    },
    /// Request construction failed
    #[display("Configuration error: {}", _0)]
    ConfigurationError(String),
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use vasari_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::AnalysisIncomplete);
/// assert!(format!("{}", err).contains("analysis"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
