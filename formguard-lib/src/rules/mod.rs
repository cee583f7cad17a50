//! Rule catalog
//!
//! The rule set is closed. Each [`Rule`] resolves, once, to the check
//! functions that implement it; declarations are parsed when a form is
//! registered so that an unknown rule name fails before any validation pass.

mod catalog;
mod patterns;

use std::fmt;
use std::str::FromStr;

use crate::engine::RuleContext;
use crate::error::ConfigError;
use crate::field::FieldDescriptor;
use crate::result::RuleOutcome;

pub use catalog::*;
pub use patterns::{is_alphanumeric, is_email, is_integer, is_url};

/// Name of the field `password_confirmation` compares against.
pub const PASSWORD_FIELD: &str = "password";

/// A single check run against one field.
pub type Check = fn(&FieldDescriptor, &RuleContext<'_>) -> RuleOutcome;

/// A validation rule a field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    Length,
    Email,
    Integer,
    Alphanumeric,
    Url,
    PasswordConfirmation,
    Checked,
}

impl Rule {
    /// Every rule, in catalog order.
    pub const ALL: [Rule; 8] = [
        Rule::Required,
        Rule::Length,
        Rule::Email,
        Rule::Integer,
        Rule::Alphanumeric,
        Rule::Url,
        Rule::PasswordConfirmation,
        Rule::Checked,
    ];

    /// The name used in declarations.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Length => "length",
            Rule::Email => "email",
            Rule::Integer => "integer",
            Rule::Alphanumeric => "alphanumeric",
            Rule::Url => "url",
            Rule::PasswordConfirmation => "password_confirmation",
            Rule::Checked => "checked",
        }
    }

    /// The checks this rule runs, in order.
    ///
    /// `Length` is the only rule with two independent checks; both run, so a
    /// degenerate configuration (min > max) reports both violations.
    pub fn checks(self) -> &'static [Check] {
        const REQUIRED: &[Check] = &[catalog::required];
        const LENGTH: &[Check] = &[catalog::min_length, catalog::max_length];
        const EMAIL: &[Check] = &[catalog::email];
        const INTEGER: &[Check] = &[catalog::integer];
        const ALPHANUMERIC: &[Check] = &[catalog::alphanumeric];
        const URL: &[Check] = &[catalog::url];
        const PASSWORD_CONFIRMATION: &[Check] = &[catalog::password_confirmation];
        const CHECKED: &[Check] = &[catalog::checked];

        match self {
            Rule::Required => REQUIRED,
            Rule::Length => LENGTH,
            Rule::Email => EMAIL,
            Rule::Integer => INTEGER,
            Rule::Alphanumeric => ALPHANUMERIC,
            Rule::Url => URL,
            Rule::PasswordConfirmation => PASSWORD_CONFIRMATION,
            Rule::Checked => CHECKED,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule '{0}'")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// Parses a space-separated rule declaration such as `"required length email"`.
///
/// Order is preserved and repeated names are kept. An empty declaration
/// yields no rules.
pub fn parse_rules(field: &str, declaration: &str) -> Result<Vec<Rule>, ConfigError> {
    declaration
        .split_whitespace()
        .map(|name| {
            name.parse::<Rule>()
                .map_err(|UnknownRule(rule)| ConfigError::unknown_rule(field, rule))
        })
        .collect()
}
