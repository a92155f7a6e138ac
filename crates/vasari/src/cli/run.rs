//! Generation command handler.

use std::io::Write;
use vasari_error::{ConfigError, VasariResult};
use vasari_interface::{ExecutionOutcome, ModelDriver};
use vasari_models::AnthropicClient;
use vasari_pipeline::{Pipeline, Prompt, ScriptExecutor};

const DEFAULT_MODEL: &str = "claude-3-opus-20240229";

/// Run the full generation pipeline for one product description.
///
/// The description comes from the argument when given, otherwise from an
/// interactive loop that re-prompts until the intake invariant holds. The
/// model is never called for an undersized sentence.
pub async fn run_generate(
    prompt_arg: Option<&str>,
    model: Option<&str>,
    interpreter: Option<&str>,
) -> VasariResult<()> {
    let api_key = std::env::var("ANTHROPIC_API_KEY")
        .map_err(|_| ConfigError::new("ANTHROPIC_API_KEY is not set"))?;

    let model = model
        .map(str::to_string)
        .or_else(|| std::env::var("VASARI_MODEL").ok())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let prompt = match prompt_arg {
        Some(text) => Prompt::parse(text)?,
        None => read_prompt()?,
    };

    tracing::info!(model = %model, words = prompt.word_count(), "Starting generation");

    let client = AnthropicClient::new(api_key, model);
    let mut pipeline = Pipeline::new(client);
    if let Some(interpreter) = interpreter {
        pipeline = pipeline.with_executor(ScriptExecutor::new().with_interpreter(interpreter));
    }

    let execution = pipeline.execute(&prompt).await?;

    // Print execution summary
    println!("\nGeneration Summary:");
    println!("===================");
    println!("Model: {}", pipeline.driver().model_name());
    println!();

    for stage_execution in &execution.stage_executions {
        println!(
            "Stage {}: {} ({} characters)",
            stage_execution.sequence_number + 1,
            stage_execution.stage,
            stage_execution.response.len()
        );
    }

    println!();
    print_outcomes("Structure scripts", &execution.structure_outcomes);
    print_outcomes("Code scripts", &execution.code_outcomes);
    println!("Elapsed: {:.2} seconds", execution.elapsed.as_secs_f64());

    Ok(())
}

fn print_outcomes(label: &str, outcomes: &[ExecutionOutcome]) {
    let succeeded = outcomes.iter().filter(|o| o.succeeded()).count();
    println!(
        "{}: {} succeeded, {} failed",
        label,
        succeeded,
        outcomes.len() - succeeded
    );
}

/// Interactive intake loop: re-prompts until the word-count invariant is
/// satisfied.
fn read_prompt() -> VasariResult<Prompt> {
    loop {
        print!("Enter a >= 5 word sentence to generate the MVP web application: ");
        std::io::stdout()
            .flush()
            .map_err(|e| ConfigError::new(format!("Failed to flush stdout: {}", e)))?;

        let mut line = String::new();
        let bytes = std::io::stdin()
            .read_line(&mut line)
            .map_err(|e| ConfigError::new(format!("Failed to read input: {}", e)))?;
        if bytes == 0 {
            return Err(ConfigError::new("Input stream closed before a prompt was entered").into());
        }

        match Prompt::parse(&line) {
            Ok(prompt) => return Ok(prompt),
            Err(_) => {
                println!("Prompt is too short. Please provide a more detailed sentence.");
            }
        }
    }
}
