//! Command execution.
//!
//! Runs the user's command through the platform shell with resolved
//! secrets overlaid on the ambient environment, and propagates the
//! child's outcome. Standard streams are inherited, so output and
//! interleaving match a direct shell invocation.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::core::store::{self, SecretStore};
use crate::core::{resolver, template};
use crate::error::{Error, Result};

/// Platform command interpreter and its "run this command line" switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpreter {
    pub program: &'static str,
    pub flag: &'static str,
}

/// Interpreter for the host platform.
pub fn interpreter() -> Interpreter {
    interpreter_for(cfg!(windows))
}

/// Interpreter for a platform family.
///
/// Kept separate from [`interpreter`] so both conventions are testable
/// on any host.
fn interpreter_for(windows: bool) -> Interpreter {
    if windows {
        Interpreter {
            program: "powershell.exe",
            flag: "-Command",
        }
    } else {
        Interpreter {
            program: "/bin/sh",
            flag: "-c",
        }
    }
}

/// Execute a command with secrets from the OS keyring.
///
/// Top-level pipeline entry point: locate `.env.template` in the current
/// working directory, parse declared names, resolve them against the
/// keyring, then run the command with the merged environment.
///
/// # Errors
///
/// Returns `Error::TemplateRead` if a template exists but cannot be read,
/// `Error::Spawn` if the interpreter cannot be started, or
/// `Error::CommandFailed` if the child exits non-zero.
pub fn execute(command: &str) -> Result<()> {
    let store = store::default_backend();
    execute_in(Path::new("."), command, &store)
}

/// Execute a command, discovering the template in a given directory.
///
/// The resolved secret overlay is computed before the child is spawned;
/// a missing template is a normal path and yields an empty overlay.
pub fn execute_in(dir: &Path, command: &str, store: &dyn SecretStore) -> Result<()> {
    let resolved = match template::locate(dir) {
        None => {
            info!("no .env.template found; running without additional environment variables");
            Vec::new()
        }
        Some(path) => {
            info!(path = %path.display(), "found template");
            let names = template::parse(&path)?;
            debug!(names = ?names, "parsed declared variable names");

            let resolved = resolver::resolve(store, &names);
            info!(
                declared = names.len(),
                resolved = resolved.len(),
                "resolved secrets from store"
            );
            resolved
        }
    };

    run_command(command, &resolved)
}

/// Spawn a command through the platform shell and wait for it.
///
/// The command string is passed as a single opaque argument to the
/// interpreter; quoting, pipes, and redirection are the shell's business.
/// `env` is overlaid on the ambient environment, resolved values winning
/// on collision.
pub fn run_command(command: &str, env: &[(String, String)]) -> Result<()> {
    let shell = interpreter();

    info!(shell = shell.program, command = %command, "executing command");

    let status = Command::new(shell.program)
        .arg(shell.flag)
        .arg(command)
        .envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .status()
        .map_err(|source| Error::Spawn {
            command: command.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            command: command.to_string(),
            // No exit code means the child was killed by a signal
            code: status.code().unwrap_or(1),
        })
    }
}
