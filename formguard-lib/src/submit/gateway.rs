//! SubmissionGateway trait and SubmitRequest

use async_trait::async_trait;
use reqwest::Method;

use crate::error::SubmitError;

/// A serialized form, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    /// Destination URL.
    pub action: String,
    /// HTTP method.
    pub method: Method,
    /// Name/value pairs in form order.
    pub fields: Vec<(String, String)>,
}

impl SubmitRequest {
    /// Creates a new request with no fields.
    pub fn new(action: impl Into<String>, method: Method) -> Self {
        Self {
            action: action.into(),
            method,
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// First value submitted under `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Sends a valid form to its destination.
///
/// Implementations must not retry: a failure is terminal for the attempt.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Sends the request and returns the parsed JSON response.
    async fn submit(&self, request: &SubmitRequest) -> Result<serde_json::Value, SubmitError>;
}
