//! Generated-script handling errors.

/// Specific error conditions for script validation setup.
///
/// Per-script execution failures are not errors at this level: the executor
/// records them as outcomes and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ScriptErrorKind {
    /// The syntax parser could not be constructed
    #[display("Parser setup failed: {}", _0)]
    Parser(String),
}

/// Error type for script handling operations.
///
/// # Examples
///
/// ```
/// use vasari_error::{ScriptError, ScriptErrorKind};
///
/// let err = ScriptError::new(ScriptErrorKind::Parser("grammar version mismatch".to_string()));
/// assert!(format!("{}", err).contains("grammar"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Script Error: {} at line {} in {}", kind, line, file)]
pub struct ScriptError {
    /// The specific error condition
    pub kind: ScriptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScriptError {
    /// Create a new ScriptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
