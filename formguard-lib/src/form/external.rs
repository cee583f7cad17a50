//! Errors supplied from outside the engine, typically by the server.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::SubmitError;

#[derive(Deserialize)]
#[serde(untagged)]
enum Messages {
    One(String),
    Many(Vec<String>),
}

impl From<Messages> for Vec<String> {
    fn from(messages: Messages) -> Self {
        match messages {
            Messages::One(message) => vec![message],
            Messages::Many(messages) => messages,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Envelope { errors: BTreeMap<String, Messages> },
    Bare(BTreeMap<String, Messages>),
}

/// Messages keyed by field name, to be merged into the display.
///
/// Accepts either a bare `{"field": ["message", ...]}` map or the
/// `{"message": ..., "errors": {...}}` envelope server-side validation
/// responses commonly use. A single string is accepted in place of a list.
///
/// # Example
///
/// ```
/// use formguard_lib::form::ExternalErrors;
///
/// let body = serde_json::json!({
///     "message": "The given data was invalid.",
///     "errors": { "email": ["The email has already been taken."] }
/// });
/// let errors = ExternalErrors::from_json(&body).unwrap();
/// assert_eq!(errors.get("email"), Some(&["The email has already been taken.".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ExternalErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds messages for a field, after any already present.
    pub fn insert<I, S>(&mut self, field: impl Into<String>, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .entry(field.into())
            .or_default()
            .extend(messages.into_iter().map(Into::into));
    }

    /// Parses a JSON error payload.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        let fields = match Payload::deserialize(value)? {
            Payload::Envelope { errors } => errors,
            Payload::Bare(fields) => fields,
        };
        Ok(Self {
            fields: fields.into_iter().map(|(k, v)| (k, v.into())).collect(),
        })
    }

    /// Extracts field errors from a rejected submission's response body.
    ///
    /// Returns `None` unless the error is an HTTP error whose body parses as
    /// an error payload.
    pub fn from_submit_error(error: &SubmitError) -> Option<Self> {
        let SubmitError::Http { body, .. } = error else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        Self::from_json(&value).ok().filter(|errors| !errors.is_empty())
    }

    /// Messages for one field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Iterate over fields and their messages, ordered by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
