//! Template file discovery and parsing.
//!
//! A `.env.template` declares which environment variable names a project
//! expects, without their values. Only the key portion of `KEY=VALUE`
//! lines is significant here; values, quoting, and export syntax are not
//! interpreted.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const TEMPLATE_FILE: &str = ".env.template";

/// Find the template file in a directory.
///
/// Looks for `.env.template` directly in `dir`, with no parent or
/// subdirectory search.
///
/// # Returns
///
/// The path to the template file, or `None` if it doesn't exist.
pub fn locate(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(TEMPLATE_FILE);

    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Parse a template file and extract declared variable names.
///
/// Lines are trimmed, then empty lines and `#` comments are skipped.
/// A line declares a variable when everything before the first `=` is a
/// valid name: an uppercase letter or underscore followed by uppercase
/// letters, digits, or underscores. Anything else is silently ignored.
///
/// Duplicate names collapse to their first occurrence; output order is
/// first-occurrence order in the file.
///
/// # Errors
///
/// Returns `Error::TemplateRead` if the file cannot be read.
pub fn parse(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_names(&contents))
}

/// Extract declared names from template text.
fn parse_names(contents: &str) -> Vec<String> {
    let mut names = Vec::new();

    for line in contents.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, _)) = line.split_once('=') {
            if is_valid_name(key) && !names.iter().any(|n| n == key) {
                names.push(key.to_string());
            }
        }
    }

    names
}

/// Check that a key matches the variable name convention:
/// starts with A-Z or underscore, followed by A-Z, 0-9, or underscores.
fn is_valid_name(key: &str) -> bool {
    let mut chars = key.chars();

    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
