//! Derived-state computations.
//!
//! Pure functions the renderer consults on every pass. Nothing here is
//! stored: both values are recomputed from their inputs each call, so they
//! can never drift out of sync with the field.

use inputkit_core::{Translations, LABEL_CLEAR_BUTTON};

/// Returns whether the clear button should render.
///
/// True exactly when clearing is enabled and the field has a value.
pub fn clear_button_visible(clear_enabled: bool, value: &str) -> bool {
    clear_enabled && !value.is_empty()
}

/// Resolves the clear button label for the active language.
///
/// The table's fallback chain applies when the language or key is missing.
pub fn clear_button_label<'a>(language: &str, translations: &'a Translations) -> &'a str {
    translations.lookup(language, LABEL_CLEAR_BUTTON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_button_hidden_when_disabled() {
        assert!(!clear_button_visible(false, ""));
        assert!(!clear_button_visible(false, "x"));
    }

    #[test]
    fn test_clear_button_hidden_when_empty() {
        assert!(!clear_button_visible(true, ""));
    }

    #[test]
    fn test_clear_button_visible_with_value() {
        assert!(clear_button_visible(true, "x"));
    }

    #[test]
    fn test_label_resolves_per_language() {
        let table = Translations::default();
        assert_eq!(clear_button_label("en", &table), "clear");
        assert_eq!(clear_button_label("ru", &table), "стереть");
    }

    #[test]
    fn test_label_falls_back_for_unknown_language() {
        let table = Translations::default();
        assert_eq!(clear_button_label("fr", &table), "clear");
    }
}
