//! Validation outcomes and results.

use crate::field::FieldId;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub valid: bool,
    pub message: Option<String>,
}

impl RuleOutcome {
    /// A passing outcome.
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing outcome with its message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Returns the message if this outcome is a failure.
    pub fn into_failure(self) -> Option<String> {
        if self.valid { None } else { self.message }
    }
}

/// Messages produced for one field in one pass.
///
/// An empty message list means the field passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    pub field_id: FieldId,
    pub messages: Vec<String>,
}

impl FieldResult {
    /// Creates a result with no messages.
    pub fn new(field_id: FieldId) -> Self {
        Self {
            field_id,
            messages: Vec::new(),
        }
    }

    /// Check if the field passed all of its rules.
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }
}

/// A single failure, flattened out of its field result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError<'a> {
    pub field_id: &'a FieldId,
    pub message: &'a str,
}

/// Result of validating a form (or part of one).
///
/// Overall validity is derived from the field results when the value is
/// built, so it is true exactly when every field result is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    overall_valid: bool,
    field_results: Vec<FieldResult>,
}

impl ValidationResult {
    /// Builds a result from per-field results, in order.
    pub fn new(field_results: Vec<FieldResult>) -> Self {
        let overall_valid = field_results.iter().all(FieldResult::is_valid);
        Self {
            overall_valid,
            field_results,
        }
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        self.overall_valid
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Per-field results, in the order fields were supplied.
    pub fn field_results(&self) -> &[FieldResult] {
        &self.field_results
    }

    /// Looks up the result for one field.
    pub fn field(&self, id: &str) -> Option<&FieldResult> {
        self.field_results.iter().find(|result| result.field_id == id)
    }

    /// All failures, field by field, each field's messages in order.
    pub fn errors(&self) -> impl Iterator<Item = FieldError<'_>> {
        self.field_results.iter().flat_map(|result| {
            result.messages.iter().map(move |message| FieldError {
                field_id: &result.field_id,
                message,
            })
        })
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<FieldError<'_>> {
        self.errors().next()
    }

    /// Get the ID of the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<&FieldId> {
        self.first_error().map(|e| e.field_id)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
