//! Sandboxed - run commands with secrets injected from the OS keyring.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Run a command through the pipeline
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── template      # .env.template discovery and parsing
//!     ├── store/        # Credential store backends
//!     │   ├── mod       # SecretStore trait
//!     │   ├── keyring   # OS keyring implementation
//!     │   └── memory    # In-memory store for tests
//!     ├── resolver      # Variable name -> secret value resolution
//!     └── runner        # Shell selection, spawn, exit propagation
//! ```
//!
//! # Features
//!
//! - Declares variable *names* in a checked-in `.env.template`
//! - Pulls variable *values* from the system keyring at run time
//! - Transparent stdio passthrough to the spawned command
//! - Exit code propagation from the child process

pub mod cli;
pub mod core;
pub mod error;
