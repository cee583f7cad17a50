//! Form input state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Attribute holding the space-separated rule declaration.
pub const VALIDATORS_ATTRIBUTE: &str = "validators";

/// Value a checkbox submits when it has no explicit value.
pub const DEFAULT_CHECKBOX_VALUE: &str = "on";

/// Kind of form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Any control with a free-form value.
    Text,
    /// A checkbox; submits its value only while checked.
    Checkbox,
}

/// Live state, shared between the UI and the controller.
#[derive(Debug, Default)]
struct InputState {
    value: String,
    checked: bool,
}

/// A form control with reactive state.
///
/// The ID, name, kind and attributes are fixed at construction. The value
/// and checked state can change at any time through any clone of the
/// handle; a change marks the input as edited.
///
/// # Example
///
/// ```
/// use formguard_lib::form::FormInput;
///
/// let email = FormInput::text("email").with_validators("required email");
/// let handle = email.clone();
/// handle.set_value("ada@example.com");
/// assert_eq!(email.value(), "ada@example.com");
/// ```
#[derive(Debug, Clone)]
pub struct FormInput {
    id: String,
    name: String,
    kind: InputKind,
    attributes: Vec<(String, String)>,
    state: Arc<RwLock<InputState>>,
    /// Set on every change, cleared by `take_edited`
    edited: Arc<AtomicBool>,
}

impl FormInput {
    fn new(name: impl Into<String>, kind: InputKind, value: String) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            kind,
            attributes: Vec::new(),
            state: Arc::new(RwLock::new(InputState {
                value,
                checked: false,
            })),
            edited: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an empty text input. Its ID defaults to its name.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, InputKind::Text, String::new())
    }

    /// Create an unchecked checkbox submitting `"on"`.
    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, InputKind::Checkbox, DEFAULT_CHECKBOX_VALUE.to_string())
    }

    /// Set the element ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the rule declaration, e.g. `"required length"`
    pub fn with_validators(self, declaration: impl Into<String>) -> Self {
        self.with_attribute(VALIDATORS_ATTRIBUTE, declaration)
    }

    /// Set an attribute, replacing any previous value
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
        self
    }

    /// Set the initial value without marking the input as edited
    pub fn with_value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.state.write() {
            guard.value = value.into();
        }
        self
    }

    /// Set the initial checked state without marking the input as edited
    pub fn with_checked(self, checked: bool) -> Self {
        if let Ok(mut guard) = self.state.write() {
            guard.checked = checked;
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Get an attribute value
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over all attributes
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the current value
    pub fn value(&self) -> String {
        self.state
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Check if the input is checked
    pub fn is_checked(&self) -> bool {
        self.state.read().map(|guard| guard.checked).unwrap_or(false)
    }

    /// The name/value pair this input contributes to a submission, if any.
    pub fn form_entry(&self) -> Option<(String, String)> {
        match self.kind {
            InputKind::Text => Some((self.name.clone(), self.value())),
            InputKind::Checkbox if self.is_checked() => Some((self.name.clone(), self.value())),
            InputKind::Checkbox => None,
        }
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the value
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        if let Ok(mut guard) = self.state.write()
            && guard.value != value
        {
            guard.value = value;
            self.edited.store(true, Ordering::SeqCst);
        }
    }

    /// Set the checked state
    pub fn set_checked(&self, checked: bool) {
        if let Ok(mut guard) = self.state.write()
            && guard.checked != checked
        {
            guard.checked = checked;
            self.edited.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle the checked state
    pub fn toggle(&self) {
        if let Ok(mut guard) = self.state.write() {
            guard.checked = !guard.checked;
            self.edited.store(true, Ordering::SeqCst);
        }
    }

    /// Returns whether the input changed since the last call, and resets the flag.
    pub fn take_edited(&self) -> bool {
        self.edited.swap(false, Ordering::SeqCst)
    }
}
