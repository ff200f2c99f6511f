//! Browser-local settings persistence.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key holding the active language code.
pub const LANGUAGE_KEY: &str = "sportex_language";

/// Key written by the legacy `.language-switch` control. Never read by the
/// main switcher.
pub const LEGACY_LANGUAGE_KEY: &str = "preferredLanguage";

pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get(LANGUAGE_KEY), None);
        store.set(LANGUAGE_KEY, "ar");
        assert_eq!(store.get(LANGUAGE_KEY), Some("ar".to_string()));
        store.set(LANGUAGE_KEY, "de");
        assert_eq!(store.get(LANGUAGE_KEY), Some("de".to_string()));
    }
}
