//! Execution record types for the generation pipeline.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The five ordered stages of the generation pipeline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Stage {
    /// Analyze the user prompt into components and requirements
    #[display("analysis")]
    Analyze,
    /// Choose a tech stack from the analysis
    #[display("tech stack selection")]
    SelectStack,
    /// Outline the project for the chosen stack
    #[display("outline")]
    Outline,
    /// Generate and run project-structure scripts
    #[display("structure")]
    StructureScripts,
    /// Generate and run code-population scripts
    #[display("code")]
    CodeScripts,
}

impl Stage {
    /// Token budget for this stage's model call.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Stage::Analyze => 200,
            Stage::SelectStack => 100,
            Stage::Outline => 400,
            Stage::StructureScripts => 1000,
            Stage::CodeScripts => 2000,
        }
    }
}

/// Result of executing a single generated script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// The script process exited successfully
    Succeeded,
    /// The script failed to launch or exited non-zero
    Failed(String),
}

/// Per-script execution record.
///
/// Failures are recorded, not retried, and never abort sibling scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    /// Zero-based position of the script in its batch
    pub index: usize,
    /// What happened when the script ran
    pub status: ExecutionStatus,
}

impl ExecutionOutcome {
    /// Whether the script ran to a successful exit.
    pub fn succeeded(&self) -> bool {
        matches!(self.status, ExecutionStatus::Succeeded)
    }
}

/// Record of one completed pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageExecution {
    /// Which stage ran
    pub stage: Stage,
    /// The full prompt sent to the model
    pub prompt: String,
    /// The normalized response text
    pub response: String,
    /// Zero-based position in the pipeline
    pub sequence_number: usize,
}

/// Record of one full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineExecution {
    /// Per-stage records in execution order
    pub stage_executions: Vec<StageExecution>,
    /// Outcomes of the structure-script batch
    pub structure_outcomes: Vec<ExecutionOutcome>,
    /// Outcomes of the code-script batch
    pub code_outcomes: Vec<ExecutionOutcome>,
    /// Wall-clock time for the whole run
    pub elapsed: Duration,
}
