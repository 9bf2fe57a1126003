//! The API key as an explicit capability.
//!
//! There is no ambient key: the editor owns a [`CredentialStore`] and hands
//! a [`Credential`] clone to each generation job at dispatch time. Changing
//! the store afterwards only affects jobs dispatched later.

use std::fmt;
use std::sync::Arc;

/// Environment variable [`CredentialStore::from_env`] reads.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// A non-blank API key. Debug output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(Arc<str>);

impl Credential {
    /// `None` for blank input.
    pub fn new(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() {
            None
        } else {
            Some(Credential(Arc::from(key)))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Lifecycle of the session key: `Unset → Set → Cleared`, with `Set`
/// reachable again from either end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CredentialState {
    #[default]
    Unset,
    Set(Credential),
    Cleared,
}

/// In-memory holder of the session key. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    state: CredentialState,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded from `GEMINI_API_KEY` when it is present and non-blank.
    pub fn from_env() -> Self {
        let mut store = Self::new();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            store.set(&key);
        }
        store
    }

    /// Store a key. A blank key clears the store instead. Returns whether a
    /// key is now set.
    pub fn set(&mut self, key: &str) -> bool {
        match Credential::new(key) {
            Some(credential) => {
                log::debug!("credential set");
                self.state = CredentialState::Set(credential);
                true
            }
            None => {
                self.clear();
                false
            }
        }
    }

    pub fn clear(&mut self) {
        if self.state != CredentialState::Unset {
            log::debug!("credential cleared");
            self.state = CredentialState::Cleared;
        }
    }

    /// The key to hand to a job, if one is set.
    pub fn current(&self) -> Option<Credential> {
        match &self.state {
            CredentialState::Set(credential) => Some(credential.clone()),
            CredentialState::Unset | CredentialState::Cleared => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self.state, CredentialState::Set(_))
    }

    pub fn state(&self) -> &CredentialState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lifecycle() {
        let mut store = CredentialStore::new();
        assert_eq!(*store.state(), CredentialState::Unset);
        assert!(store.current().is_none());

        assert!(store.set("  abc123 "));
        assert_eq!(store.current().map(|c| c.expose().to_string()), Some("abc123".into()));

        store.clear();
        assert_eq!(*store.state(), CredentialState::Cleared);
        assert!(!store.is_set());
    }

    #[test]
    fn blank_key_clears() {
        let mut store = CredentialStore::new();
        store.set("abc");
        assert!(!store.set("   "));
        assert_eq!(*store.state(), CredentialState::Cleared);
    }

    #[test]
    fn clearing_unset_store_stays_unset() {
        let mut store = CredentialStore::new();
        store.clear();
        assert_eq!(*store.state(), CredentialState::Unset);
    }

    #[test]
    fn captured_key_survives_later_changes() {
        let mut store = CredentialStore::new();
        store.set("first");
        let captured = store.current().unwrap();
        store.set("second");
        assert_eq!(captured.expose(), "first");
    }

    #[test]
    fn debug_is_redacted() {
        let credential = Credential::new("secret").unwrap();
        assert_eq!(format!("{credential:?}"), "Credential(***)");
    }
}
