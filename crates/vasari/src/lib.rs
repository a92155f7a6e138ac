//! Unified interface for the Vasari MVP generator.
//!
//! Re-exports the public API of the workspace crates: core types, the
//! model driver trait and Anthropic client, and the generation pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use vasari_core::{
    ContentBlock, ContentPart, GenerateRequest, GenerateRequestBuilder, Message, MessageBuilder,
    Role, StageResponse,
};
pub use vasari_error::{
    ConfigError, ModelsError, ModelsErrorKind, PipelineError, PipelineErrorKind, ScriptError,
    ScriptErrorKind, VasariError, VasariErrorKind, VasariResult,
};
pub use vasari_interface::{
    ExecutionOutcome, ExecutionStatus, ModelDriver, PipelineExecution, Stage, StageExecution,
};
pub use vasari_models::AnthropicClient;
pub use vasari_pipeline::{
    DEFAULT_INTERPRETER, DEFAULT_SCRATCH_PATH, MIN_PROMPT_WORDS, Pipeline, Prompt, ScriptBatch,
    ScriptExecutor, ScriptValidator, extract_scripts, extract_text,
};
