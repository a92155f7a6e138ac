//! Driver trait and execution records for the Vasari MVP generator.
//!
//! The [`ModelDriver`] trait is the seam between the generation pipeline and
//! the model providers; the record types capture what each pipeline run did.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::ModelDriver;
pub use types::{
    ExecutionOutcome, ExecutionStatus, PipelineExecution, Stage, StageExecution,
};
