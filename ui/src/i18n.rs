//! Translation registry for `sportex-ui`.
//!
//! Locale tables live as JSON under this crate's `i18n/` folder and are
//! embedded at compile time via `rust-embed`:
//!
//! ```text
//! i18n/
//!   en.json   (fallback/reference)
//!   ar.json
//!   de.json
//!   fr.json
//! ```
//!
//! Each file holds one language: the short code shown on the dropdown
//! trigger, the text direction, and a flat key → localized-string table
//! (values may carry markup). The registry performs no shape validation
//! beyond the JSON parse; consumers detect missing keys lazily and leave the
//! affected elements untouched.
//!
//! To add a new locale:
//! 1. Copy `i18n/en.json` to `i18n/<code>.json`.
//! 2. Translate each value (keep the keys identical) and set `code`/`dir`.
//! 3. Run tests to ensure completeness.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::Deserialize;

use crate::core::console;

/// Fallback language; always shipped.
pub const DEFAULT_LANG: &str = "en";

/// Presentation class carried by the body while an RTL language is active.
pub const RTL_CLASS: &str = "rtl-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

/// One registered language. Immutable once registered.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEntry {
    /// Short code shown on the dropdown trigger ("EN", "AR", …).
    #[serde(rename = "code")]
    pub display_code: String,
    pub dir: Direction,
    pub strings: HashMap<String, String>,
}

impl LanguageEntry {
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}

/// Embed all locale files under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Locales;

#[derive(Debug, Clone, Default)]
pub struct TranslationRegistry {
    entries: HashMap<String, LanguageEntry>,
}

impl TranslationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `code`.
    pub fn register(&mut self, code: impl Into<String>, entry: LanguageEntry) {
        self.entries.insert(code.into(), entry);
    }

    pub fn get(&self, code: &str) -> Option<&LanguageEntry> {
        self.entries.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered language codes, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<_> = self.entries.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Build a registry from the compiled-in locale files. The language code
    /// is the file stem; files that fail to parse are skipped with a logged
    /// error.
    pub fn embedded() -> Self {
        let mut registry = Self::new();
        for path in Locales::iter() {
            let Some(code) = path.strip_suffix(".json") else {
                continue;
            };
            let Some(file) = Locales::get(&path) else {
                continue;
            };
            match serde_json::from_slice::<LanguageEntry>(&file.data) {
                Ok(entry) => registry.register(code, entry),
                Err(err) => console::error(&format!("Skipping locale {path}: {err}")),
            }
        }
        registry
    }
}

/// Shared embedded registry for the page shell.
pub fn registry() -> &'static TranslationRegistry {
    static REGISTRY: Lazy<TranslationRegistry> = Lazy::new(TranslationRegistry::embedded);
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(display: &str, dir: Direction) -> LanguageEntry {
        LanguageEntry {
            display_code: display.to_string(),
            dir,
            strings: HashMap::new(),
        }
    }

    #[test]
    fn embedded_registry_has_all_site_languages() {
        assert_eq!(registry().codes(), ["ar", "de", "en", "fr"]);
    }

    #[test]
    fn fallback_language_is_embedded() {
        let entry = registry().get(DEFAULT_LANG).expect("en locale present");
        assert_eq!(entry.display_code, "EN");
        assert_eq!(entry.lookup("nav-home"), Some("Home"));
    }

    #[test]
    fn arabic_is_rtl() {
        let entry = registry().get("ar").expect("ar locale present");
        assert!(entry.dir.is_rtl());
        assert_eq!(entry.dir.as_str(), "rtl");
    }

    #[test]
    fn register_overwrites_existing_entry() {
        let mut reg = TranslationRegistry::new();
        reg.register("en", entry("EN", Direction::Ltr));
        reg.register("en", entry("EN-GB", Direction::Ltr));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("en").map(|e| e.display_code.as_str()), Some("EN-GB"));
    }

    #[test]
    fn missing_code_is_not_contained() {
        let reg = TranslationRegistry::new();
        assert!(reg.is_empty());
        assert!(!reg.contains("zz"));
        assert!(reg.get("zz").is_none());
    }
}
