//! Vasari CLI binary.
//!
//! Generates a runnable MVP web application from a one-sentence product
//! description by sequencing model calls and executing the generated
//! scripts.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_generate};

    // Load environment overrides (ANTHROPIC_API_KEY, VASARI_MODEL)
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Generate {
            prompt,
            model,
            interpreter,
        } => {
            run_generate(prompt.as_deref(), model.as_deref(), interpreter.as_deref()).await?;
        }
    }

    Ok(())
}
