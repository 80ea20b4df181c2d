//! Field type vocabulary for input widgets.
//!
//! An input field renders as one of the common form types (`text`,
//! `password`, `email`, ...). The show/hide toggle only distinguishes
//! `password` from everything else, but the original declared type must
//! survive a toggle round-trip, so the full vocabulary is kept.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FieldTypeParseError;

/// The rendered type of an input field.
///
/// Covers the common form field types, with [`FieldType::Other`] as an
/// escape hatch for any other valid type string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Plain text rendering.
    Text,
    /// Masked rendering.
    Password,
    /// Email address field.
    Email,
    /// Search field.
    Search,
    /// Telephone number field.
    Tel,
    /// URL field.
    Url,
    /// Numeric field.
    Number,
    /// Any other valid field type, kept verbatim.
    Other(String),
}

impl FieldType {
    /// Returns true if this is the masked (`password`) type.
    pub const fn is_password(&self) -> bool {
        matches!(self, Self::Password)
    }

    /// Returns the type as its canonical string form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Number => "number",
            Self::Other(s) => s,
        }
    }
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FieldTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FieldTypeParseError::Empty);
        }

        Ok(match s.to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "password" => Self::Password,
            "email" => Self::Email,
            "search" => Self::Search,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "number" => Self::Number,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
