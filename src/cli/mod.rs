//! Command-line interface.

pub mod output;
pub mod run;

use clap::Parser;

/// Sandboxed - execute commands with environment variables from the keyring.
#[derive(Parser)]
#[command(
    name = "sandboxed",
    about = "Execute commands with environment variables from keyring",
    version
)]
pub struct Cli {
    /// Command to execute
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute a parsed invocation.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    run::execute(&cli.command)
}
