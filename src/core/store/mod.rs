//! Credential store backends.
//!
//! Abstracts secret retrieval behind a single lookup capability so the
//! resolver can run against the real OS keyring or a test double.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module

mod keyring;

#[cfg(test)]
pub(crate) mod memory;

pub use self::keyring::Keyring;

/// Secret retrieval trait.
///
/// The store is read-only from this crate's perspective: one lookup per
/// variable name, no create/update/delete, no enumeration.
pub trait SecretStore {
    /// Look up the secret value for a variable name.
    ///
    /// # Returns
    ///
    /// The stored value, or `None` if the store has no entry for `name`.
    /// Store-level failures also surface as `None`; absence and retrieval
    /// errors are deliberately not distinguished at this boundary.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The store backend used by the binary: the OS keyring.
pub fn default_backend() -> Keyring {
    Keyring::new()
}
