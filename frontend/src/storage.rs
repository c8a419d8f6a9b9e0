use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{error, warn};

/// String key/value persistence for UI preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Reads and writes are skipped (and logged) when the
/// storage is unavailable, e.g. with cookies disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                warn!("local storage is not available");
                None
            }
            Err(err) => {
                error!("failed to open local storage: {err:?}");
                None
            }
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to read {key} from local storage: {err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.set_item(key, value) {
                error!("failed to write {key} to local storage: {err:?}");
            }
        }
    }
}

/// In-memory store. Clones share the same map, so a clone can stand in for a
/// page reload reading the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
