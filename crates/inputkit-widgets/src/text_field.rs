//! Clearable, maskable text field widget.
//!
//! Provides the stateful core of a text/password field with:
//! - An optional clear button (visible only when the field has a value)
//! - An optional show/hide toggle with declared-type memory
//! - Clear-button labels resolved through a translation table
//!
//! Painting and focus mechanics belong to the host: the widget reports
//! derived values ([`TextField::clear_button_visible`],
//! [`TextField::clear_button_label`]) and requests effects through
//! callbacks.

use tracing::trace;

use inputkit_core::{FieldType, Translations};

use crate::derived;
use crate::type_memory::TypeMemory;

type TypeChangeCallback = Box<dyn Fn(&FieldType) + Send + Sync>;
type EffectCallback = Box<dyn Fn() + Send + Sync>;

/// The stateful core of a clearable, maskable text field.
///
/// # Example
///
/// ```
/// use inputkit_core::FieldType;
/// use inputkit_widgets::TextField;
///
/// let mut field = TextField::builder()
///     .declared_type(FieldType::Password)
///     .show_hide(true)
///     .build();
///
/// field.toggle_visibility();
/// assert_eq!(field.field_type(), &FieldType::Text);
/// ```
pub struct TextField {
    /// The type the field currently renders as.
    field_type: FieldType,
    /// Declared-type memory for the show/hide toggle.
    memory: TypeMemory,
    /// Mirror of the field's current content, updated by the host.
    value: String,
    /// Whether the clear button is enabled.
    clear_button: bool,
    /// Whether the show/hide toggle is enabled.
    show_hide: bool,
    /// Active language code.
    language: String,
    /// Translation table for labels.
    translations: Translations,
    /// Called when the rendered type changes.
    on_type_change: Option<TypeChangeCallback>,
    /// Called when the host should erase the field's content.
    on_clear: Option<EffectCallback>,
    /// Called when focus should move back into the field.
    on_focus_request: Option<EffectCallback>,
}

impl std::fmt::Debug for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextField")
            .field("field_type", &self.field_type)
            .field("memory", &self.memory)
            .field("value", &self.value)
            .field("clear_button", &self.clear_button)
            .field("show_hide", &self.show_hide)
            .field("language", &self.language)
            .field("translations", &self.translations)
            .field("on_type_change", &self.on_type_change.as_ref().map(|_| "<callback>"))
            .field("on_clear", &self.on_clear.as_ref().map(|_| "<callback>"))
            .field(
                "on_focus_request",
                &self.on_focus_request.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new(FieldType::Text)
    }
}

impl TextField {
    /// Creates a field with the given declared type and everything else off.
    pub fn new(declared_type: FieldType) -> Self {
        Self {
            field_type: declared_type,
            memory: TypeMemory::Unset,
            value: String::new(),
            clear_button: false,
            show_hide: false,
            language: String::from("en"),
            translations: Translations::default(),
            on_type_change: None,
            on_clear: None,
            on_focus_request: None,
        }
    }

    /// Creates a builder for constructing a field.
    pub fn builder() -> TextFieldBuilder {
        TextFieldBuilder::new()
    }

    /// Returns the type the field currently renders as.
    #[inline]
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// Returns the declared type: the remembered original once a toggle has
    /// occurred, the current type before that.
    pub fn declared_type(&self) -> &FieldType {
        self.memory.original().unwrap_or(&self.field_type)
    }

    /// Returns the mirrored field content.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Updates the mirrored field content.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns true if the clear button is enabled.
    #[inline]
    pub fn is_clear_button_enabled(&self) -> bool {
        self.clear_button
    }

    /// Enables or disables the clear button.
    pub fn set_clear_button(&mut self, enabled: bool) {
        self.clear_button = enabled;
    }

    /// Returns true if the show/hide toggle is enabled.
    #[inline]
    pub fn is_show_hide_enabled(&self) -> bool {
        self.show_hide
    }

    /// Enables or disables the show/hide toggle.
    pub fn set_show_hide(&mut self, enabled: bool) {
        self.show_hide = enabled;
    }

    /// Returns the active language code.
    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Sets the active language code.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Returns the translation table.
    #[inline]
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Replaces the translation table.
    pub fn set_translations(&mut self, translations: Translations) {
        self.translations = translations;
    }

    /// Returns whether the clear button should render right now.
    ///
    /// Derived on every call; never stored.
    pub fn clear_button_visible(&self) -> bool {
        derived::clear_button_visible(self.clear_button, &self.value)
    }

    /// Returns the clear button label for the active language.
    ///
    /// Derived on every call; never stored.
    pub fn clear_button_label(&self) -> &str {
        derived::clear_button_label(&self.language, &self.translations)
    }

    /// Flips the field between masked and un-masked rendering.
    ///
    /// No-op when the show/hide toggle is disabled. Otherwise the declared
    /// type is captured on the first call, the rendered type transitions
    /// (see [`TypeMemory::toggle`]), and focus is requested back into the
    /// field.
    pub fn toggle_visibility(&mut self) {
        if !self.show_hide {
            return;
        }

        let next = self.memory.toggle(&self.field_type);
        trace!(from = %self.field_type, to = %next, "toggle field visibility");
        self.apply_type(next);
        self.request_focus();
    }

    /// Forces the field back to its declared type.
    ///
    /// Safe at any time; no-op before any toggle or when the field already
    /// renders as its declared type. The type memory survives, so a later
    /// toggle still works.
    pub fn reset_type(&mut self) {
        if let Some(original) = self.memory.reset(&self.field_type) {
            trace!(to = %original, "reset field type");
            self.apply_type(original);
        }
    }

    /// Erases the field's content and requests focus back into the field.
    ///
    /// Leaves the rendered type and the type memory untouched.
    pub fn clear_value(&mut self) {
        trace!("clear field value");
        self.value.clear();
        if let Some(callback) = &self.on_clear {
            callback();
        }
        self.request_focus();
    }

    fn apply_type(&mut self, next: FieldType) {
        if next == self.field_type {
            return;
        }
        self.field_type = next;
        if let Some(callback) = &self.on_type_change {
            callback(&self.field_type);
        }
    }

    fn request_focus(&self) {
        if let Some(callback) = &self.on_focus_request {
            callback();
        }
    }
}

/// Builder for creating [`TextField`] widgets.
#[derive(Default)]
pub struct TextFieldBuilder {
    declared_type: FieldType,
    value: String,
    clear_button: bool,
    show_hide: bool,
    language: Option<String>,
    translations: Option<Translations>,
    on_type_change: Option<TypeChangeCallback>,
    on_clear: Option<EffectCallback>,
    on_focus_request: Option<EffectCallback>,
}

impl TextFieldBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declared field type.
    pub fn declared_type(mut self, field_type: FieldType) -> Self {
        self.declared_type = field_type;
        self
    }

    /// Sets the initial value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Enables the clear button.
    pub fn clear_button(mut self, enabled: bool) -> Self {
        self.clear_button = enabled;
        self
    }

    /// Enables the show/hide toggle.
    pub fn show_hide(mut self, enabled: bool) -> Self {
        self.show_hide = enabled;
        self
    }

    /// Sets the active language code.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the translation table.
    pub fn translations(mut self, translations: Translations) -> Self {
        self.translations = Some(translations);
        self
    }

    /// Sets the callback fired when the rendered type changes.
    pub fn on_type_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FieldType) + Send + Sync + 'static,
    {
        self.on_type_change = Some(Box::new(callback));
        self
    }

    /// Sets the callback fired when the host should erase the field.
    pub fn on_clear<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_clear = Some(Box::new(callback));
        self
    }

    /// Sets the callback fired when focus should return to the field.
    pub fn on_focus_request<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_focus_request = Some(Box::new(callback));
        self
    }

    /// Builds the field.
    pub fn build(self) -> TextField {
        TextField {
            field_type: self.declared_type,
            memory: TypeMemory::Unset,
            value: self.value,
            clear_button: self.clear_button,
            show_hide: self.show_hide,
            language: self.language.unwrap_or_else(|| String::from("en")),
            translations: self.translations.unwrap_or_default(),
            on_type_change: self.on_type_change,
            on_clear: self.on_clear,
            on_focus_request: self.on_focus_request,
        }
    }
}
