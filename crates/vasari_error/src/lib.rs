//! Error types for the Vasari MVP generator.
//!
//! Each concern gets a kind enum plus a wrapper struct that captures the
//! source location of the failure. Everything folds into [`VasariError`]
//! through `From` conversions, so call sites use `?` freely.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod models;
mod pipeline;
mod script;

pub use config::ConfigError;
pub use error::{VasariError, VasariErrorKind, VasariResult};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use script::{ScriptError, ScriptErrorKind};
