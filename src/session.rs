//! Persisted session token lookup.
//!
//! Browser storage is global mutable state; everything here goes through the
//! [`SessionStore`] seam so the decision logic can be exercised on the host
//! with [`MemoryStore`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::BootstrapError;

/// Storage key the login flow writes the token under.
pub const SESSION_TOKEN_KEY: &str = "JWT";

/// Read access to origin-scoped key-value storage.
pub trait SessionStore {
    /// `Ok(None)` means the key is absent; `Err` means the store itself could
    /// not be read.
    fn get(&self, key: &str) -> Result<Option<String>, BootstrapError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, BootstrapError> {
        (**self).get(key)
    }
}

/// What counts as "a token is stored".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPresence {
    /// The key exists and its value is not the empty string.
    #[default]
    NonEmpty,
    /// The key exists, whatever its value.
    KeyExists,
}

impl TokenPresence {
    pub fn is_present(self, token: Option<&str>) -> bool {
        match (self, token) {
            (_, None) => false,
            (TokenPresence::NonEmpty, Some(t)) => !t.is_empty(),
            (TokenPresence::KeyExists, Some(_)) => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TokenPresence::NonEmpty => "non_empty",
            TokenPresence::KeyExists => "key_exists",
        }
    }
}

/// In-process store, mainly for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BootstrapError> {
        Ok(self.entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_policy_treats_empty_string_as_absent() {
        let p = TokenPresence::NonEmpty;
        assert!(!p.is_present(None));
        assert!(!p.is_present(Some("")));
        assert!(p.is_present(Some("abc.def.ghi")));
        assert!(p.is_present(Some("  ")));
    }

    #[test]
    fn key_exists_policy_accepts_empty_string() {
        let p = TokenPresence::KeyExists;
        assert!(!p.is_present(None));
        assert!(p.is_present(Some("")));
        assert!(p.is_present(Some("x")));
    }

    #[test]
    fn memory_store_round_trips_and_removes() {
        let mut store = MemoryStore::new().with_entry(SESSION_TOKEN_KEY, "t");
        assert_eq!(store.get(SESSION_TOKEN_KEY), Ok(Some("t".to_string())));
        assert_eq!(store.get("other"), Ok(None));

        store.remove(SESSION_TOKEN_KEY);
        assert_eq!(store.get(SESSION_TOKEN_KEY), Ok(None));
    }

    #[test]
    fn presence_labels_match_serde_names() {
        for p in [TokenPresence::NonEmpty, TokenPresence::KeyExists] {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.label()));
        }
    }
}
