//! Client-side key/value persistence.
//!
//! Everything the client persists (credential token, dark-mode flag) goes
//! through [`KeyValueStore`] so the session and theme logic can be driven by
//! an in-memory store in unit tests and by `window.localStorage` in the
//! browser.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsValue;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), JsValue>;
    fn remove(&self, key: &str) -> Result<(), JsValue>;
}

/// `window.localStorage`.  Lookups go through the window every time so a
/// store created before the page finished loading still works.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        window
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("no local storage exists"))
    }

    /// True when localStorage can be reached (private mode / sandboxed
    /// iframes may refuse access).
    pub fn is_available() -> bool {
        Self::local_storage().is_ok()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), JsValue> {
        Self::local_storage()?.set_item(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), JsValue> {
        Self::local_storage()?.remove_item(key)
    }
}

/// Volatile store; used in tests and as a fallback when localStorage is
/// unavailable.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), JsValue> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), JsValue> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
