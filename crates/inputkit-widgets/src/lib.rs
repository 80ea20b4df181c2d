//! Widget core for clearable, maskable text fields.
//!
//! The widget system is built around three pieces:
//!
//! - [`TypeMemory`]: the state machine behind the show/hide toggle. It
//!   remembers the field's declared type so toggling can always restore it.
//!
//! - [`derived`]: pure computations the renderer consults every pass
//!   (clear-button visibility, clear-button label). Nothing is stored.
//!
//! - [`TextField`]: the widget instance tying the two together with the
//!   host-supplied configuration and effect callbacks.

pub mod derived;
pub mod text_field;
pub mod type_memory;

pub use derived::{clear_button_label, clear_button_visible};
pub use text_field::{TextField, TextFieldBuilder};
pub use type_memory::TypeMemory;
