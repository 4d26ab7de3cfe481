//! Sandboxed - run commands with secrets injected from the OS keyring.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sandboxed::cli::output;
use sandboxed::cli::{execute, Cli};
use sandboxed::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SANDBOXED_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sandboxed=debug")
        } else {
            EnvFilter::new("sandboxed=warn")
        }
    });

    // Diagnostics go to stderr; stdout belongs to the child process
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::TemplateRead { .. } => Some("check that .env.template is readable"),
            Error::Spawn { .. } => Some("ensure the shell interpreter is available"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
