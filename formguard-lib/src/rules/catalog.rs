//! Check functions, one per failure a rule can report.
//!
//! Format checks (`email`, `integer`, `alphanumeric`, `url`) accept a blank
//! value; emptiness is the job of `required`. The pattern is matched against
//! the value as entered, so surrounding whitespace is a format failure.

use super::PASSWORD_FIELD;
use super::patterns;
use crate::engine::RuleContext;
use crate::field::FieldDescriptor;
use crate::result::RuleOutcome;

/// Fails when the trimmed value is empty.
pub fn required(field: &FieldDescriptor, cx: &RuleContext<'_>) -> RuleOutcome {
    if is_blank(&field.value) {
        RuleOutcome::fail(&cx.messages().required)
    } else {
        RuleOutcome::pass()
    }
}

/// Fails when the value has fewer characters than the resolved minimum.
pub fn min_length(field: &FieldDescriptor, cx: &RuleContext<'_>) -> RuleOutcome {
    let min = field.overrides.min_length.unwrap_or(cx.config().min_length);
    if field.char_len() < min {
        RuleOutcome::fail(cx.messages().min_length(min))
    } else {
        RuleOutcome::pass()
    }
}

/// Fails when the value has more characters than the resolved maximum.
pub fn max_length(field: &FieldDescriptor, cx: &RuleContext<'_>) -> RuleOutcome {
    let max = field.overrides.max_length.unwrap_or(cx.config().max_length);
    if field.char_len() > max {
        RuleOutcome::fail(cx.messages().max_length(max))
    } else {
        RuleOutcome::pass()
    }
}

pub fn email(field: &FieldDescriptor, cx: &RuleContext<'_>) -> RuleOutcome {
    blank_or(field, patterns::is_email, &cx.messages().email)
}

pub fn integer(field: &FieldDescriptor, cx: &RuleContext<'_>) -> RuleOutcome {
    blank_or(field, patterns::is_integer, &cx.messages().integer)
}

pub fn alphanumeric(field: &FieldDescriptor, cx: &RuleContext<'_>) -> RuleOutcome {
    blank_or(field, patterns::is_alphanumeric, &cx.messages().alphanumeric)
}

pub fn url(field: &FieldDescriptor, cx: &RuleContext<'_>) -> RuleOutcome {
    blank_or(field, patterns::is_url, &cx.messages().url)
}

/// Compares the value against the first field named `password` in the form.
pub fn password_confirmation(field: &FieldDescriptor, cx: &RuleContext<'_>) -> RuleOutcome {
    match cx.field(PASSWORD_FIELD) {
        None => RuleOutcome::fail(&cx.messages().password_missing),
        Some(password) if password.value != field.value => {
            RuleOutcome::fail(&cx.messages().password_mismatch)
        }
        Some(_) => RuleOutcome::pass(),
    }
}

/// Fails when the checkbox is not checked.
pub fn checked(field: &FieldDescriptor, cx: &RuleContext<'_>) -> RuleOutcome {
    if field.checked {
        RuleOutcome::pass()
    } else {
        RuleOutcome::fail(&cx.messages().checked)
    }
}

// A byte order mark counts as whitespace, like it does in browsers.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

fn blank_or(field: &FieldDescriptor, is_match: fn(&str) -> bool, message: &str) -> RuleOutcome {
    if is_blank(&field.value) || is_match(&field.value) {
        RuleOutcome::pass()
    } else {
        RuleOutcome::fail(message)
    }
}
