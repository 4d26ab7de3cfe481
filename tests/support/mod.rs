//! Test support utilities for sandboxed integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;

use std::fs;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Each test gets its own temporary project dir. No process-global state
/// is mutated; child processes use `.current_dir()` so tests can safely
/// run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        Self { dir }
    }

    /// Create a test environment with a `.env.template` present.
    pub fn with_template(contents: &str) -> Self {
        let t = Self::new();
        fs::write(t.dir.path().join(".env.template"), contents)
            .expect("failed to write .env.template");
        t
    }
}
