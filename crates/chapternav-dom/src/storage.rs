//! Session-storage-backed store.

use std::rc::Rc;

use chapternav::store::{KeyValueStore, NoopStore};
use web_sys::Storage;

/// Page-scoped persistent storage. Every failure reads as an empty slot and
/// every failed write is dropped; persistence is an enhancement, never a
/// dependency.
pub struct SessionStore {
    storage: Storage,
}

impl SessionStore {
    /// `None` when the browser refuses storage access (private browsing,
    /// storage disabled by policy).
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.session_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// The session store, or a no-op stand-in when storage is unavailable.
pub fn open_store() -> Rc<dyn KeyValueStore> {
    match SessionStore::open() {
        Some(store) => Rc::new(store),
        None => Rc::new(NoopStore),
    }
}
