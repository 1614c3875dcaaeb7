//! Persistence Backend
//!
//! Key-value string storage behind a small capability trait. The trait stores
//! raw strings; serialization is the list store's responsibility, which keeps
//! the storage contract free of any encoding dependency and lets tests swap in
//! an in-memory fake.

/// Key-value string storage capability
pub trait KeyValueStore {
    /// Read a string value by key. Returns None if not found.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a string value under key, fully overwriting any prior value.
    fn set(&self, key: &str, value: &str);
}

/// Browser localStorage backend
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            // Quota exceeded or storage disabled; the in-memory list keeps working
            leptos::logging::warn!("[storage] failed to write {key}");
        }
    }
}

/// In-memory fake for tests. Clones share the same map so a test can hand one
/// handle to a store and inspect or reload through another.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>);

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }
}
