//! Web storage backends for session identity and the greeting marker.

use realty_chat_core::StorageBackend;
use web_sys::Storage;

/// [`StorageBackend`] over a browser storage area. A host that denies storage
/// access degrades to an in-memory session for the current page load; writes
/// are best-effort and quota errors are swallowed.
pub struct WebStorage {
    storage: Option<Storage>,
}

impl WebStorage {
    /// Device-scoped storage; survives reloads.
    pub fn local() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }

    /// Browsing-session scoped storage; cleared when the tab closes.
    pub fn session() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.session_storage().ok().flatten()),
        }
    }
}

impl StorageBackend for WebStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.set_item(key, value);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn session_storage_round_trips() {
        let storage = WebStorage::session();
        storage.write("realty_test_marker", "1");
        assert_eq!(storage.read("realty_test_marker").as_deref(), Some("1"));
    }
}
