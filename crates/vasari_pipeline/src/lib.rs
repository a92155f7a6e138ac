//! Generation pipeline for the Vasari MVP generator.
//!
//! The pipeline turns one validated sentence into a scaffolded MVP web
//! application by sequencing five model calls and executing the Python
//! scripts the model emits. Each call blocks before the next begins;
//! extraction, validation, and execution run between the script-bearing
//! calls and their successors.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod executor;
mod extraction;
mod intake;
mod pipeline;
mod validate;

pub use executor::{DEFAULT_INTERPRETER, DEFAULT_SCRATCH_PATH, ScriptExecutor};
pub use extraction::{ScriptBatch, extract_scripts, extract_text};
pub use intake::{MIN_PROMPT_WORDS, Prompt};
pub use pipeline::Pipeline;
pub use validate::ScriptValidator;
