//! In-memory store double for tests.
//!
//! Deterministic stand-in for the OS keyring that also records lookups,
//! so tests can assert how the store was driven.

use std::cell::RefCell;
use std::collections::HashMap;

use super::SecretStore;

pub(crate) struct Memory {
    values: HashMap<String, String>,
    lookups: RefCell<Vec<String>>,
}

impl Memory {
    pub(crate) fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Number of lookups performed against this store.
    pub(crate) fn lookup_count(&self) -> usize {
        self.lookups.borrow().len()
    }
}

impl SecretStore for Memory {
    fn lookup(&self, name: &str) -> Option<String> {
        self.lookups.borrow_mut().push(name.to_string());
        self.values.get(name).cloned()
    }
}
