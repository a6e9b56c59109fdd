//! Light / dark display preference.

use wasm_bindgen::JsValue;

use crate::constants::DARK_MODE_STORAGE_KEY;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
}

pub const LIGHT: Palette = Palette { background: "#f9fafb", card: "#ffffff", text: "#111827" };
pub const DARK: Palette = Palette { background: "#020617", card: "#020617", text: "#e5e7eb" };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    /// Anything other than the literal `"true"` means light mode.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self { dark: store.get(DARK_MODE_STORAGE_KEY).as_deref() == Some("true") }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), JsValue> {
        store.set(DARK_MODE_STORAGE_KEY, if self.dark { "true" } else { "false" })
    }

    pub fn toggled(&self) -> Self {
        Self { dark: !self.dark }
    }

    pub fn palette(&self) -> Palette {
        if self.dark {
            DARK
        } else {
            LIGHT
        }
    }

    /// Label of the toggle button: names the mode you would switch to.
    pub fn toggle_label(&self) -> &'static str {
        if self.dark {
            "Light mode"
        } else {
            "Dark mode"
        }
    }
}
