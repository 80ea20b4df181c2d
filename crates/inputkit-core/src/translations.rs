//! Translation tables for widget labels.
//!
//! A table maps a language code to a set of message-key/text pairs. Tables
//! are host-supplied data (typically loaded from JSON) and are passed
//! explicitly into every lookup; there is no global table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Message key for the clear button label.
pub const LABEL_CLEAR_BUTTON: &str = "labelClearButton";

/// Language code tried when the active language has no entry.
pub const FALLBACK_LANGUAGE: &str = "en";

/// A translation table: language code → (message key → text).
///
/// [`Translations::default`] returns the builtin baseline table. Hosts
/// extend or replace it with [`Translations::insert`] or by deserializing
/// their own table; the serde form is the nested map itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    tables: BTreeMap<String, BTreeMap<String, String>>,
}

impl Translations {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Returns the builtin baseline table.
    ///
    /// Ships `en → {labelClearButton: "clear"}` and
    /// `ru → {labelClearButton: "стереть"}`.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert("en", LABEL_CLEAR_BUTTON, "clear");
        table.insert("ru", LABEL_CLEAR_BUTTON, "стереть");
        table
    }

    /// Inserts or replaces one entry.
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.tables
            .entry(language.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Adds one entry, consuming and returning the table.
    pub fn with(
        mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(language, key, text);
        self
    }

    /// Returns the exact entry for a language and key, if present.
    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.tables
            .get(language)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }

    /// Resolves a key for a language, applying the fallback chain:
    /// exact language, then [`FALLBACK_LANGUAGE`], then the key itself.
    pub fn lookup<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        self.get(language, key)
            .or_else(|| self.get(FALLBACK_LANGUAGE, key))
            .unwrap_or(key)
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::builtin()
    }
}
