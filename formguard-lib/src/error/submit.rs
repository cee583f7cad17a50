//! Submission error types

/// Errors raised by an intercepted submission.
///
/// A failure is terminal for that attempt. It never changes the validity
/// result the submission was gated on.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The form has no destination configured.
    #[error("Form has no action URL configured")]
    MissingAction,

    /// The configured destination could not be parsed.
    #[error("Invalid action URL: {0}")]
    InvalidUrl(String),

    /// Network error while sending the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The destination answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body.
        body: String,
    },
}

impl SubmitError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: body.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
