//! Configuration error types

/// A developer mistake in a field's declaration.
///
/// These are raised once, when a form is registered, never during a
/// validation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A rule name outside the fixed catalog.
    #[error("Field '{field}' declares unknown rule '{rule}'")]
    UnknownRule { field: String, rule: String },

    /// An override attribute whose value is not a non-negative integer.
    #[error("Field '{field}' has invalid {key} override '{value}'")]
    InvalidOverride {
        field: String,
        key: &'static str,
        value: String,
    },
}

impl ConfigError {
    /// Creates a new unknown rule error.
    pub fn unknown_rule(field: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::UnknownRule {
            field: field.into(),
            rule: rule.into(),
        }
    }

    /// Creates a new invalid override error.
    pub fn invalid_override(field: impl Into<String>, key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidOverride {
            field: field.into(),
            key,
            value: value.into(),
        }
    }
}
