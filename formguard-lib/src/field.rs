//! Field descriptors: one field's state for a single validation pass.

use std::fmt;

use crate::error::ConfigError;
use crate::rules::{self, Rule};

/// Opaque identity of a field, used to key results and displayed messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(String);

impl FieldId {
    /// Creates a new field ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for FieldId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Per-field overrides of the configured length bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl Overrides {
    /// Attribute key for the minimum length override.
    pub const MIN_LENGTH: &'static str = "min_length";

    /// Attribute key for the maximum length override.
    pub const MAX_LENGTH: &'static str = "max_length";

    /// Reads overrides from a field's attributes.
    ///
    /// Keys other than [`Self::MIN_LENGTH`] and [`Self::MAX_LENGTH`] are
    /// ignored. A recognised key with a value that is not a non-negative
    /// integer is a configuration error.
    pub fn from_attributes<'a, I>(field: &str, attributes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut overrides = Self::default();
        for (key, value) in attributes {
            match key {
                Self::MIN_LENGTH => overrides.min_length = Some(parse_bound(field, Self::MIN_LENGTH, value)?),
                Self::MAX_LENGTH => overrides.max_length = Some(parse_bound(field, Self::MAX_LENGTH, value)?),
                _ => {}
            }
        }
        Ok(overrides)
    }
}

fn parse_bound(field: &str, key: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid_override(field, key, value))
}

/// A field as seen by the engine during one validation pass.
///
/// Built fresh from live UI state on every pass and never persisted.
///
/// # Example
///
/// ```
/// use formguard_lib::{FieldDescriptor, Rule};
///
/// let field = FieldDescriptor::new("username")
///     .with_value("ada")
///     .with_rules([Rule::Required, Rule::Length])
///     .with_min_length(2);
/// assert_eq!(field.rule_names(), vec!["required", "length"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Identity used to key results.
    pub id: FieldId,
    /// Form control name, used for cross-field lookups.
    pub name: String,
    /// Current value as entered.
    pub value: String,
    /// Checkbox state; false for non-checkbox fields.
    pub checked: bool,
    /// Declared rules, in declaration order.
    pub rules: Vec<Rule>,
    /// Length bound overrides.
    pub overrides: Overrides,
}

impl FieldDescriptor {
    /// Creates an empty field whose ID is its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: FieldId::new(name.clone()),
            name,
            value: String::new(),
            checked: false,
            rules: Vec::new(),
            overrides: Overrides::default(),
        }
    }

    /// Sets the identity.
    pub fn with_id(mut self, id: impl Into<FieldId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the current value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the checkbox state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Appends rules.
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Appends the rules of a space-separated declaration.
    pub fn with_declaration(mut self, declaration: &str) -> Result<Self, ConfigError> {
        let rules = rules::parse_rules(&self.name, declaration)?;
        self.rules.extend(rules);
        Ok(self)
    }

    /// Overrides the minimum length.
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.overrides.min_length = Some(min);
        self
    }

    /// Overrides the maximum length.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.overrides.max_length = Some(max);
        self
    }

    /// Sets all overrides at once.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Declared rule names, in order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Length of the value in characters.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_from_attributes() {
        let attrs = [("min_length", "5"), ("max_length", " 10 "), ("placeholder", "x")];
        let overrides = Overrides::from_attributes("name", attrs).unwrap();
        assert_eq!(overrides.min_length, Some(5));
        assert_eq!(overrides.max_length, Some(10));
    }

    #[test]
    fn test_overrides_reject_non_integer() {
        let err = Overrides::from_attributes("name", [("max_length", "ten")]).unwrap_err();
        assert_eq!(err, ConfigError::invalid_override("name", "max_length", "ten"));

        assert!(Overrides::from_attributes("name", [("min_length", "-1")]).is_err());
        assert!(Overrides::from_attributes("name", [("min_length", "")]).is_err());
    }

    #[test]
    fn test_declaration_appends_in_order() {
        let field = FieldDescriptor::new("email")
            .with_declaration("required email")
            .unwrap();
        assert_eq!(field.rules, vec![Rule::Required, Rule::Email]);
    }

    #[test]
    fn test_declaration_names_field_in_error() {
        let err = FieldDescriptor::new("zip").with_declaration("postcode").unwrap_err();
        assert_eq!(err, ConfigError::unknown_rule("zip", "postcode"));
    }

    #[test]
    fn test_id_defaults_to_name() {
        let field = FieldDescriptor::new("email");
        assert_eq!(field.id, "email");
        assert_eq!(field.with_id("email-1").id.as_str(), "email-1");
    }
}
