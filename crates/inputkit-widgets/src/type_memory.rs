//! Show/hide type memory.
//!
//! The state machine behind the show/hide toggle. It remembers a field's
//! declared type across toggles so the field can always be restored, and it
//! encodes the one non-obvious rule: a field whose declared type is itself
//! `password` can only ever be revealed as `text`.

use inputkit_core::FieldType;

/// Remembers a field's declared type across show/hide toggles.
///
/// Starts [`Unset`](TypeMemory::Unset); the first [`toggle`](TypeMemory::toggle)
/// captures the field's type at that moment as the original and moves to
/// [`Toggled`](TypeMemory::Toggled). The original is captured at most once
/// and survives resets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeMemory {
    /// No toggle has ever happened.
    #[default]
    Unset,
    /// At least one toggle has happened.
    Toggled {
        /// The type the field had strictly before the first toggle.
        original: FieldType,
    },
}

impl TypeMemory {
    /// Returns the remembered original type, if a toggle has occurred.
    pub fn original(&self) -> Option<&FieldType> {
        match self {
            Self::Unset => None,
            Self::Toggled { original } => Some(original),
        }
    }

    /// Runs one show/hide transition and returns the next rendered type.
    ///
    /// Captures `current` as the original on the first call. A masked field
    /// un-masks to its original type, unless the original is itself
    /// `password`, in which case it un-masks to `text`. Anything un-masked
    /// masks to `password`.
    pub fn toggle(&mut self, current: &FieldType) -> FieldType {
        let original = match self {
            Self::Unset => {
                *self = Self::Toggled {
                    original: current.clone(),
                };
                current
            }
            Self::Toggled { original } => &*original,
        };

        if current.is_password() {
            if original.is_password() {
                // The only way to reveal a field declared `password`.
                FieldType::Text
            } else {
                original.clone()
            }
        } else {
            FieldType::Password
        }
    }

    /// Returns the type the field should be restored to, if any.
    ///
    /// `Some(original)` when a toggle has occurred and `current` differs
    /// from the original; `None` otherwise. Never clears the memory, so a
    /// later toggle still works.
    pub fn reset(&self, current: &FieldType) -> Option<FieldType> {
        match self {
            Self::Toggled { original } if original != current => Some(original.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_toggle_captures_original() {
        let mut memory = TypeMemory::default();
        assert_eq!(memory.original(), None);

        memory.toggle(&FieldType::Email);
        assert_eq!(memory.original(), Some(&FieldType::Email));
    }

    #[test]
    fn test_original_captured_at_most_once() {
        let mut memory = TypeMemory::default();
        let mut current = FieldType::Email;

        for _ in 0..5 {
            current = memory.toggle(&current);
            assert_eq!(memory.original(), Some(&FieldType::Email));
        }
    }

    #[test]
    fn test_text_pair_round_trips() {
        let mut memory = TypeMemory::default();

        let masked = memory.toggle(&FieldType::Text);
        assert_eq!(masked, FieldType::Password);

        let restored = memory.toggle(&masked);
        assert_eq!(restored, FieldType::Text);
    }

    #[test]
    fn test_declared_password_reveals_as_text() {
        let mut memory = TypeMemory::default();

        let revealed = memory.toggle(&FieldType::Password);
        assert_eq!(revealed, FieldType::Text);

        let masked = memory.toggle(&revealed);
        assert_eq!(masked, FieldType::Password);
        assert_eq!(memory.original(), Some(&FieldType::Password));
    }

    #[test]
    fn test_email_masks_then_restores() {
        let mut memory = TypeMemory::default();

        let masked = memory.toggle(&FieldType::Email);
        assert_eq!(masked, FieldType::Password);

        let restored = memory.toggle(&masked);
        assert_eq!(restored, FieldType::Email);
    }

    #[test]
    fn test_reset_before_any_toggle_is_none() {
        let memory = TypeMemory::default();
        assert_eq!(memory.reset(&FieldType::Text), None);
    }

    #[test]
    fn test_reset_restores_without_clearing_memory() {
        let mut memory = TypeMemory::default();
        let masked = memory.toggle(&FieldType::Email);

        assert_eq!(memory.reset(&masked), Some(FieldType::Email));
        assert_eq!(memory.original(), Some(&FieldType::Email));

        // A later toggle still works against the same memory.
        assert_eq!(memory.toggle(&FieldType::Email), FieldType::Password);
    }

    #[test]
    fn test_reset_at_original_is_none() {
        let mut memory = TypeMemory::default();
        let masked = memory.toggle(&FieldType::Text);
        let restored = memory.toggle(&masked);

        assert_eq!(memory.reset(&restored), None);
    }
}
