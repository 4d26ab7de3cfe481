//! OS keyring backend.
//!
//! Queries the platform credential store (macOS Keychain, Windows
//! Credential Manager, Secret Service on Linux) under a fixed service
//! namespace shared by all projects.

use keyring::Entry;
use tracing::debug;

use super::SecretStore;

/// Keyring-backed secret store.
pub struct Keyring {
    service: String,
}

impl Keyring {
    /// Service name for all sandboxed entries in the keyring.
    const SERVICE_NAME: &'static str = "sandboxed";

    /// Create a new keyring backend.
    pub fn new() -> Self {
        Self {
            service: Self::SERVICE_NAME.to_string(),
        }
    }
}

impl Default for Keyring {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore for Keyring {
    fn lookup(&self, name: &str) -> Option<String> {
        let entry = match Entry::new(&self.service, name) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(name = %name, error = %e, "could not open keyring entry; treating as absent");
                return None;
            }
        };

        match entry.get_password() {
            Ok(value) => {
                debug!(name = %name, "found secret in keyring");
                Some(value)
            }
            Err(keyring::Error::NoEntry) => {
                debug!(name = %name, "secret not found in keyring");
                None
            }
            Err(e) => {
                // Absence and store failure are contractually identical,
                // but the distinction is still visible at debug level.
                debug!(name = %name, error = %e, "keyring lookup failed; treating as absent");
                None
            }
        }
    }
}
