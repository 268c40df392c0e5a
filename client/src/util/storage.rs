//! Client-side token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow stores the access/refresh JWT pair in `localStorage` under
//! fixed keys. Readers go through [`TokenStore`] so auth decisions can be
//! exercised against an in-memory store outside the browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key holding the short-lived access JWT.
pub const ACCESS_TOKEN_KEY: &str = "access";
/// Key holding the refresh JWT.
pub const REFRESH_TOKEN_KEY: &str = "refresh";

/// Minimal key-value view of client storage.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Outside `hydrate` it behaves as an empty store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store.items.borrow_mut().insert((*key).to_owned(), (*value).to_owned());
        }
        store
    }
}

#[cfg(test)]
impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
