//! Run command.
//!
//! Joins the raw arguments into a single command line and hands it to
//! the execution pipeline. The joined string is passed to the shell
//! verbatim; no quoting or tokenization happens here.

use crate::core::runner;
use crate::error::Result;

/// Run a command with secrets injected as environment variables.
pub fn execute(command: &[String]) -> Result<()> {
    let command = command.join(" ");
    runner::execute(&command)
}
