//! Error presentation.

use std::collections::BTreeMap;

use crate::field::FieldId;
use crate::result::ValidationResult;

/// Renders validation messages next to their fields.
///
/// The engine never calls a presenter; the controller does, after each pass.
pub trait ErrorPresenter {
    /// Remove every message currently shown for a field.
    fn clear(&mut self, field: &FieldId);

    /// Show one more message for a field, after any already shown.
    fn append(&mut self, field: &FieldId, message: &str);

    /// Replace the messages of every field in `result` with its new messages.
    ///
    /// Fields absent from `result` keep whatever they show.
    fn present(&mut self, result: &ValidationResult) {
        for field in result.field_results() {
            self.clear(&field.field_id);
            for message in &field.messages {
                self.append(&field.field_id, message);
            }
        }
    }
}

/// In-memory presenter keeping each field's messages in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBoard {
    messages: BTreeMap<FieldId, Vec<String>>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages shown for a field.
    pub fn messages(&self, field: &str) -> &[String] {
        self.messages
            .get(&FieldId::from(field))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The field's messages, one per line.
    pub fn text(&self, field: &str) -> String {
        self.messages(field).join("\n")
    }

    /// Check if nothing is shown for any field.
    pub fn is_empty(&self) -> bool {
        self.messages.values().all(Vec::is_empty)
    }
}

impl ErrorPresenter for MessageBoard {
    fn clear(&mut self, field: &FieldId) {
        self.messages.remove(field);
    }

    fn append(&mut self, field: &FieldId, message: &str) {
        self.messages
            .entry(field.clone())
            .or_default()
            .push(message.to_string());
    }
}
