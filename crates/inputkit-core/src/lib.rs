//! Core types for inputkit.
//!
//! This crate provides the shared vocabulary for the inputkit widgets:
//!
//! - [`FieldType`]: the rendered type of an input field (`text`, `password`,
//!   and the rest of the common form types).
//! - [`Translations`]: host-supplied translation tables for widget labels,
//!   passed explicitly into every lookup.
//! - [`FieldTypeParseError`]: the single error type; everything else in the
//!   core is total over its inputs.

pub mod error;
pub mod field_type;
pub mod translations;

pub use error::FieldTypeParseError;
pub use field_type::FieldType;
pub use translations::{Translations, FALLBACK_LANGUAGE, LABEL_CLEAR_BUTTON};
