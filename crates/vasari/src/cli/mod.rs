//! Command-line interface modules.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::run_generate;
