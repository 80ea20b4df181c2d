//! Error types for inputkit core operations.

use thiserror::Error;

/// Error type for field type parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldTypeParseError {
    /// Input string was empty or whitespace.
    #[error("empty field type")]
    Empty,
}
