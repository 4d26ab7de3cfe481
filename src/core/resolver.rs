//! Secret resolution.
//!
//! Maps declared variable names to secret values from the credential
//! store. Absence is a normal outcome, never an error: names the store
//! has no value for are simply left out of the result.

use crate::core::store::SecretStore;

/// Resolve declared names against a secret store.
///
/// Performs one independent lookup per name, in declaration order.
///
/// # Arguments
///
/// * `store` - Credential store to query
/// * `names` - Declared variable names from the template
///
/// # Returns
///
/// Vector of (name, value) pairs for names the store had a value for.
/// Missing names are simply absent; no sentinel entries.
pub fn resolve(store: &dyn SecretStore, names: &[String]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for name in names {
        if let Some(value) = store.lookup(name) {
            pairs.push((name.clone(), value));
        }
    }

    pairs
}
