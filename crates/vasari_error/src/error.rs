//! Top-level error wrapper types.

use crate::{ConfigError, ModelsError, PipelineError, ScriptError};

/// The foundation error enum. Each workspace crate contributes a variant
/// for its own failure class.
///
/// # Examples
///
/// ```
/// use vasari_error::{ConfigError, VasariError};
///
/// let config_err = ConfigError::new("ANTHROPIC_API_KEY is not set");
/// let err: VasariError = config_err.into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VasariErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Generated-script handling error
    #[from(ScriptError)]
    Script(ScriptError),
}

/// Vasari error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vasari_error::{ConfigError, VasariResult};
///
/// fn might_fail() -> VasariResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vasari Error: {}", _0)]
pub struct VasariError(Box<VasariErrorKind>);

impl VasariError {
    /// Create a new error from a kind.
    pub fn new(kind: VasariErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VasariErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VasariErrorKind
impl<T> From<T> for VasariError
where
    T: Into<VasariErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vasari operations.
///
/// # Examples
///
/// ```
/// use vasari_error::{ConfigError, VasariResult};
///
/// fn load_key() -> VasariResult<String> {
///     Err(ConfigError::new("no credential in environment"))?
/// }
/// ```
pub type VasariResult<T> = std::result::Result<T, VasariError>;
