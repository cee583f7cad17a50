//! Validation engine.
//!
//! The engine is a pure function of its input: every call builds a fresh
//! [`ValidationResult`] and nothing is carried between passes.

use std::collections::HashMap;

use log::debug;

use crate::config::{MessageCatalog, ValidatorConfig};
use crate::field::{FieldDescriptor, FieldId};
use crate::result::{FieldResult, ValidationResult};

/// Read-only view of the whole form handed to every check.
///
/// Fields are looked up by name; when several fields share a name the first
/// one supplied wins.
pub struct RuleContext<'a> {
    fields: HashMap<&'a str, &'a FieldDescriptor>,
    config: &'a ValidatorConfig,
}

impl<'a> RuleContext<'a> {
    /// Builds the context for one pass.
    pub fn new(fields: &'a [FieldDescriptor], config: &'a ValidatorConfig) -> Self {
        let mut by_name = HashMap::with_capacity(fields.len());
        for field in fields {
            by_name.entry(field.name.as_str()).or_insert(field);
        }
        Self {
            fields: by_name,
            config,
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&'a FieldDescriptor> {
        self.fields.get(name).copied()
    }

    pub fn config(&self) -> &'a ValidatorConfig {
        self.config
    }

    pub fn messages(&self) -> &'a MessageCatalog {
        &self.config.messages
    }
}

/// Evaluates declared rules over a set of fields.
///
/// # Example
///
/// ```
/// use formguard_lib::{FieldDescriptor, Rule, Validator};
///
/// let fields = vec![
///     FieldDescriptor::new("email")
///         .with_value("not-an-email")
///         .with_rules([Rule::Required, Rule::Email]),
///     FieldDescriptor::new("agree").with_rules([Rule::Checked]),
/// ];
///
/// let result = Validator::new().evaluate(&fields);
/// assert!(result.is_invalid());
/// assert_eq!(result.field("email").unwrap().messages, vec!["Invalid email."]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates every field, in the order supplied.
    ///
    /// Each field's rules run in declaration order and every failure is
    /// collected, not just the first.
    pub fn evaluate(&self, fields: &[FieldDescriptor]) -> ValidationResult {
        let cx = RuleContext::new(fields, &self.config);
        let results: Vec<_> = fields.iter().map(|field| check_field(field, &cx)).collect();
        let result = ValidationResult::new(results);

        debug!(
            "Validated {} field(s): {} message(s), valid={}",
            fields.len(),
            result.errors().count(),
            result.is_valid()
        );
        result
    }

    /// Validates a single field, using the whole form as context.
    ///
    /// Returns an empty (valid) result when no field has the given ID.
    pub fn evaluate_field(&self, fields: &[FieldDescriptor], id: &FieldId) -> ValidationResult {
        let cx = RuleContext::new(fields, &self.config);
        let results: Vec<_> = fields
            .iter()
            .filter(|field| &field.id == id)
            .map(|field| check_field(field, &cx))
            .collect();

        if results.is_empty() {
            debug!("No field with id '{}' to validate", id);
        }
        ValidationResult::new(results)
    }
}

fn check_field(field: &FieldDescriptor, cx: &RuleContext<'_>) -> FieldResult {
    let mut result = FieldResult::new(field.id.clone());
    for rule in &field.rules {
        for check in rule.checks() {
            if let Some(message) = check(field, cx).into_failure() {
                result.messages.push(message);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    #[test]
    fn test_no_rules_no_messages() {
        let fields = [FieldDescriptor::new("notes").with_value("")];
        let result = Validator::new().evaluate(&fields);
        assert!(result.is_valid());
        assert!(result.field_results()[0].messages.is_empty());
    }

    #[test]
    fn test_all_failures_collected_in_rule_order() {
        let fields = [FieldDescriptor::new("code")
            .with_value("a b")
            .with_rules([Rule::Alphanumeric, Rule::Length, Rule::Integer])
            .with_min_length(5)];
        let result = Validator::new().evaluate(&fields);
        assert_eq!(
            result.field_results()[0].messages,
            vec![
                "Only letters and numbers, no spaces, are allowed.",
                "Invalid length. Minimum 5 characters.",
                "Please enter a whole number.",
            ]
        );
    }

    #[test]
    fn test_degenerate_bounds_report_both() {
        let fields = [FieldDescriptor::new("x")
            .with_value("abcd")
            .with_rules([Rule::Length])
            .with_min_length(5)
            .with_max_length(3)];
        let result = Validator::new().evaluate(&fields);
        assert_eq!(result.field_results()[0].messages.len(), 2);
    }

    #[test]
    fn test_config_defaults_apply() {
        let validator = Validator::with_config(ValidatorConfig::default().with_min_length(8));
        let fields = [FieldDescriptor::new("pw").with_value("short").with_rules([Rule::Length])];
        let result = validator.evaluate(&fields);
        assert_eq!(
            result.field("pw").unwrap().messages,
            vec!["Invalid length. Minimum 8 characters."]
        );
    }

    #[test]
    fn test_evaluate_field_uses_whole_form_as_context() {
        let fields = [
            FieldDescriptor::new("password").with_value("hunter22"),
            FieldDescriptor::new("password_confirmation")
                .with_value("hunter22")
                .with_rules([Rule::PasswordConfirmation]),
            FieldDescriptor::new("name").with_rules([Rule::Required]),
        ];
        let result = Validator::new().evaluate_field(&fields, &FieldId::from("password_confirmation"));
        assert_eq!(result.field_results().len(), 1);
        assert!(result.is_valid());
    }

    #[test]
    fn test_evaluate_field_unknown_id() {
        let fields = [FieldDescriptor::new("name").with_rules([Rule::Required])];
        let result = Validator::new().evaluate_field(&fields, &FieldId::from("missing"));
        assert!(result.field_results().is_empty());
        assert!(result.is_valid());
    }
}
