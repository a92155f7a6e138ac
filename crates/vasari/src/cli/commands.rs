//! Command definitions for the Vasari CLI.

use clap::{Parser, Subcommand};

/// Generate a runnable MVP web application from one sentence.
#[derive(Parser)]
#[command(name = "vasari", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an MVP web application from a product description
    Generate {
        /// Product description (>= 5 words); prompted for interactively
        /// when omitted
        prompt: Option<String>,

        /// Model identifier (defaults to VASARI_MODEL or the built-in
        /// default)
        #[arg(short, long)]
        model: Option<String>,

        /// Interpreter used to run generated scripts
        #[arg(short, long)]
        interpreter: Option<String>,
    },
}
