//! The five-stage generation pipeline.
//!
//! Each stage wraps the previous stage's normalized output in its own
//! instruction and blocks on one model call; the two script-bearing stages
//! then extract, validate, and execute what the model returned. No stage
//! retries or rolls back a prior stage.

use crate::{Prompt, ScriptBatch, ScriptExecutor, ScriptValidator, extract_scripts, extract_text};
use std::time::Instant;
use tracing::{error, info, instrument};
use vasari_core::{GenerateRequestBuilder, Message};
use vasari_error::{PipelineError, PipelineErrorKind, VasariResult};
use vasari_interface::{ModelDriver, PipelineExecution, Stage, StageExecution};

/// Fence tag marking executable segments in script-bearing responses.
const SCRIPT_FENCE_TAG: &str = "python";

/// Drives the full prompt-to-application generation run.
pub struct Pipeline<D: ModelDriver> {
    driver: D,
    executor: ScriptExecutor,
}

impl<D: ModelDriver> Pipeline<D> {
    /// Create a pipeline with the given model driver and a default
    /// script executor.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            executor: ScriptExecutor::default(),
        }
    }

    /// Replace the script executor (scratch path, interpreter).
    pub fn with_executor(mut self, executor: ScriptExecutor) -> Self {
        self.executor = executor;
        self
    }

    /// Get a reference to the underlying model driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run all five stages for one validated prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if a model call fails, the analysis response
    /// lacks its required markers, a response cannot be normalized, or a
    /// script batch fails syntax validation. Per-script execution
    /// failures are recorded in the run record instead.
    #[instrument(skip(self, prompt), fields(provider = self.driver.provider_name(), model = self.driver.model_name()))]
    pub async fn execute(&self, prompt: &Prompt) -> VasariResult<PipelineExecution> {
        let started = Instant::now();
        let mut stage_executions = Vec::new();

        info!("Analyzing prompt");
        let analysis = self
            .run_stage(Stage::Analyze, analysis_prompt(prompt.text()), &mut stage_executions)
            .await?;
        let lowered = analysis.to_lowercase();
        if !lowered.contains("key components") || !lowered.contains("requirements") {
            error!(stage = %Stage::Analyze, response = %analysis, "Analysis response is missing required markers");
            return Err(PipelineError::new(PipelineErrorKind::AnalysisIncomplete).into());
        }
        info!(preview = %preview(&analysis), "Prompt analysis completed");

        info!("Determining tech stack");
        let tech_stack = self
            .run_stage(Stage::SelectStack, stack_prompt(&analysis), &mut stage_executions)
            .await?;

        info!("Outlining steps for MVP creation");
        let outline = self
            .run_stage(Stage::Outline, outline_prompt(&tech_stack), &mut stage_executions)
            .await?;
        info!(preview = %preview(&outline), "MVP creation steps outlined");

        info!("Generating project structure scripts");
        let structure_text = self
            .run_stage(
                Stage::StructureScripts,
                structure_prompt(&outline),
                &mut stage_executions,
            )
            .await?;
        let structure_batch = self.accept_batch(Stage::StructureScripts, &structure_text)?;
        info!(scripts = structure_batch.len(), "Project structure scripts generated");
        let structure_outcomes = self.executor.execute(&structure_batch).await;

        info!("Generating code and configurations");
        let code_text = self
            .run_stage(
                Stage::CodeScripts,
                code_prompt(&tech_stack, prompt.text()),
                &mut stage_executions,
            )
            .await?;
        let code_batch = self.accept_batch(Stage::CodeScripts, &code_text)?;
        info!(scripts = code_batch.len(), "Code and configurations generated");
        let code_outcomes = self.executor.execute(&code_batch).await;

        let elapsed = started.elapsed();
        info!(elapsed_secs = elapsed.as_secs_f64(), "MVP web application generated");

        Ok(PipelineExecution {
            stage_executions,
            structure_outcomes,
            code_outcomes,
            elapsed,
        })
    }

    /// Send one stage's prompt as a single user message and record the
    /// normalized response.
    async fn run_stage(
        &self,
        stage: Stage,
        prompt: String,
        stage_executions: &mut Vec<StageExecution>,
    ) -> VasariResult<String> {
        let request = GenerateRequestBuilder::default()
            .messages(vec![Message::user(prompt.clone())])
            .max_tokens(stage.max_tokens())
            .model(self.driver.model_name().to_string())
            .build()
            .map_err(|e| {
                PipelineError::new(PipelineErrorKind::ConfigurationError(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        let response = self.driver.generate(&request).await?;
        let text = extract_text(&response)?;

        stage_executions.push(StageExecution {
            stage,
            prompt,
            response: text.clone(),
            sequence_number: stage_executions.len(),
        });

        Ok(text)
    }

    /// Extract and validate one stage's script batch.
    fn accept_batch(&self, stage: Stage, text: &str) -> VasariResult<ScriptBatch> {
        let batch = extract_scripts(text, SCRIPT_FENCE_TAG);
        let mut validator = ScriptValidator::new()?;
        if !validator.validate(&batch) {
            return Err(PipelineError::new(PipelineErrorKind::InvalidGeneratedCode {
                stage: stage.to_string(),
            })
            .into());
        }
        Ok(batch)
    }
}

/// First 100 characters of a response, for log context.
fn preview(text: &str) -> String {
    text.chars().take(100).collect()
}

fn analysis_prompt(prompt: &str) -> String {
    format!(
        "This is a one-shot opportunity to analyze the following prompt and identify the key \
         components and requirements for the web application. The instructions you provide will \
         be used directly to create the project, so it's crucial to be comprehensive and \
         accurate:\n{prompt}"
    )
}

fn stack_prompt(analysis: &str) -> String {
    format!(
        "This is a one-shot opportunity to determine the most suitable tech stack for the web \
         application based on the following analysis. The chosen tech stack will be used directly \
         to create the project, so ensure the recommendation is precise and well-justified:\n\
         {analysis}"
    )
}

fn outline_prompt(tech_stack: &str) -> String {
    format!(
        "This is a one-shot opportunity to outline the steps needed to create the MVP web \
         application using the {tech_stack} tech stack. Include all necessary directories, \
         files, and configurations. The instructions provided will be used directly to structure \
         the project, so detail and accuracy are paramount:"
    )
}

fn structure_prompt(outline: &str) -> String {
    format!(
        "This is a one-shot opportunity to generate Python scripts for creating the project \
         structure, directories, and files based on the following detailed outline. The scripts \
         generated will be executed to form the project's foundation, so ensure they are \
         accurate and executable:\n{outline}"
    )
}

fn code_prompt(tech_stack: &str, prompt: &str) -> String {
    format!(
        "This is a one-shot opportunity to populate the created files with the appropriate code \
         and configurations based on the {tech_stack} tech stack and the specific requirements \
         of the web application. The code generated will be used directly in the project, so \
         precision and completeness are crucial:\n{prompt}"
    )
}
