//! Credential token held on behalf of the signed-in user.
//!
//! The session is an explicit value owned by `AppState`; nothing else reads
//! the token key from storage directly.  Token presence is the only thing
//! checked - there is no signature or expiry validation on the client.

use std::fmt;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::constants::TOKEN_STORAGE_KEY;
use crate::storage::KeyValueStore;

#[derive(Clone)]
pub struct Session {
    store: Rc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Rc<dyn KeyValueStore> {
        Rc::clone(&self.store)
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) -> Result<(), JsValue> {
        self.store.set(TOKEN_STORAGE_KEY, token)
    }

    pub fn sign_out(&self) -> Result<(), JsValue> {
        self.store.remove(TOKEN_STORAGE_KEY)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the token itself.
        f.debug_struct("Session").field("authenticated", &self.is_authenticated()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn sign_in_then_out() {
        let session = Session::new(Rc::new(MemoryStorage::new()));
        assert!(!session.is_authenticated());

        session.sign_in("jwt-123").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("jwt-123"));

        session.sign_out().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn existing_token_is_picked_up() {
        let session = Session::new(Rc::new(MemoryStorage::with_item("token", "persisted")));
        assert!(session.is_authenticated());
    }

    #[test]
    fn empty_token_counts_as_signed_out() {
        let session = Session::new(Rc::new(MemoryStorage::with_item("token", "")));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn debug_output_hides_token() {
        let session = Session::new(Rc::new(MemoryStorage::with_item("token", "secret")));
        let printed = format!("{:?}", session);
        assert!(!printed.contains("secret"));
    }
}
