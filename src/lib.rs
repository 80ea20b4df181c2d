//! inputkit: the stateful core of a clearable, maskable text field.
//!
//! This crate provides the logic behind a text/password input widget:
//!
//! - An optional clear button that renders only while the field has a value
//! - An optional show/hide toggle that switches between masked and plain
//!   rendering while remembering the field's declared type
//! - Clear-button labels resolved through a pluggable translation table
//!
//! Painting, layout, and focus mechanics stay in the host: the widget
//! reports derived values and requests effects through callbacks.
//!
//! # Example
//!
//! ```
//! use inputkit::prelude::*;
//!
//! let mut field = TextField::builder()
//!     .declared_type(FieldType::Password)
//!     .clear_button(true)
//!     .show_hide(true)
//!     .value("hunter2")
//!     .build();
//!
//! assert!(field.clear_button_visible());
//! assert_eq!(field.clear_button_label(), "clear");
//!
//! field.toggle_visibility();
//! assert_eq!(field.field_type(), &FieldType::Text);
//! ```

pub use inputkit_core as core;
pub use inputkit_widgets as widgets;

pub mod prelude {
    //! Prelude module for convenient imports.

    pub use inputkit_core::{FieldType, FieldTypeParseError, Translations};
    pub use inputkit_widgets::{TextField, TextFieldBuilder, TypeMemory};
}
