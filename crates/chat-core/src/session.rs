//! Session identity: one opaque id correlating all turns from a visitor.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::Utc;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Minimal string key/value persistence seam. Browser hosts back this with
/// `localStorage`/`sessionStorage`; implementations swallow write failures.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

impl<T: StorageBackend + ?Sized> StorageBackend for Rc<T> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value)
    }
}

/// In-memory backend for tests and hosts without web storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Owns the visitor's session id. The id is created lazily, cached for the
/// page lifetime, and persisted best-effort; a storage write failure leaves
/// the session usable in memory for the current page load.
pub struct SessionStore {
    backend: Box<dyn StorageBackend>,
    key: String,
    current: RefCell<Option<String>>,
}

impl SessionStore {
    pub fn new(backend: impl StorageBackend + 'static, key: impl Into<String>) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.into(),
            current: RefCell::new(None),
        }
    }

    /// Returns the session id, generating and persisting one if none exists.
    /// Every call within a page lifetime returns the same id.
    pub fn get_or_create(&self) -> String {
        if let Some(id) = self.current.borrow().clone() {
            return id;
        }
        let id = self
            .backend
            .read(&self.key)
            .filter(|stored| !stored.is_empty())
            .unwrap_or_else(|| {
                let fresh = generate_session_id();
                self.backend.write(&self.key, &fresh);
                fresh
            });
        *self.current.borrow_mut() = Some(id.clone());
        id
    }

    /// Adopts a server-assigned id, overwriting the held one when it differs.
    /// Lets the server be the source of truth for session identity.
    pub fn adopt(&self, id: &str) {
        if id.is_empty() || self.current.borrow().as_deref() == Some(id) {
            return;
        }
        self.backend.write(&self.key, id);
        *self.current.borrow_mut() = Some(id.to_string());
    }
}

/// One-shot marker gating the first-open greeting. Backed by browsing-session
/// scoped storage so the greeting fires once per tab lifetime.
pub struct FirstOpenMarker {
    backend: Box<dyn StorageBackend>,
    key: String,
}

impl FirstOpenMarker {
    pub fn new(backend: impl StorageBackend + 'static, key: impl Into<String>) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.into(),
        }
    }

    /// Whether the greeting has not fired yet in this browsing session.
    pub fn pending(&self) -> bool {
        self.backend.read(&self.key).as_deref() != Some("1")
    }

    /// Returns `true` exactly once per storage scope, setting the marker.
    pub fn consume(&self) -> bool {
        if !self.pending() {
            return false;
        }
        self.backend.write(&self.key, "1");
        true
    }
}

/// Eight random bytes, hex encoded. Prefers the platform CSPRNG and falls
/// back to a clock-seeded PRNG when no entropy source is available.
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; 8];
    if OsRng.try_fill_bytes(&mut bytes).is_err() {
        let seed = Utc::now().timestamp_millis() as u64;
        StdRng::seed_from_u64(seed).fill_bytes(&mut bytes);
    }
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_hex_and_distinct() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn get_or_create_is_stable_within_a_page_lifetime() {
        let store = SessionStore::new(MemoryStorage::new(), "sid");
        let first = store.get_or_create();
        assert_eq!(store.get_or_create(), first);
    }

    #[test]
    fn id_survives_a_simulated_reload() {
        let storage = Rc::new(MemoryStorage::new());
        let first = SessionStore::new(storage.clone(), "sid").get_or_create();
        let reloaded = SessionStore::new(storage, "sid").get_or_create();
        assert_eq!(reloaded, first);
    }

    #[test]
    fn adopt_overwrites_and_persists() {
        let storage = Rc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone(), "sid");
        store.get_or_create();
        store.adopt("server-assigned");
        assert_eq!(store.get_or_create(), "server-assigned");
        assert_eq!(storage.read("sid").as_deref(), Some("server-assigned"));
    }

    #[test]
    fn adopt_ignores_empty_ids() {
        let store = SessionStore::new(MemoryStorage::new(), "sid");
        let original = store.get_or_create();
        store.adopt("");
        assert_eq!(store.get_or_create(), original);
    }

    #[test]
    fn first_open_marker_consumes_once_per_scope() {
        let storage = Rc::new(MemoryStorage::new());
        let marker = FirstOpenMarker::new(storage.clone(), "greeted");
        assert!(marker.pending());
        assert!(marker.consume());
        assert!(!marker.consume());
        assert!(!marker.pending());

        // Same scope, fresh page load: still consumed.
        let again = FirstOpenMarker::new(storage, "greeted");
        assert!(!again.consume());
    }
}
