//! Form configuration

use std::time::Duration;

use reqwest::Method;

use crate::submit::SubmissionMode;

/// Where and how a form submits once it is valid.
///
/// # Example
///
/// ```
/// use formguard_lib::form::FormConfig;
/// use formguard_lib::submit::SubmissionMode;
///
/// let config = FormConfig::new()
///     .with_action("https://example.com/signup")
///     .intercepted();
/// assert_eq!(config.mode, SubmissionMode::Intercepted);
/// ```
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Destination URL for the submission.
    pub action: Option<String>,

    /// HTTP method.
    ///
    /// Default: POST
    pub method: Method,

    /// Whether submission proceeds natively or is sent by the controller.
    ///
    /// Default: [`SubmissionMode::Direct`]
    pub mode: SubmissionMode,

    /// Timeout for intercepted submissions. `None` means no timeout.
    pub timeout: Option<Duration>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            action: None,
            method: Method::POST,
            mode: SubmissionMode::Direct,
            timeout: None,
        }
    }
}

impl FormConfig {
    /// Creates a new form config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destination URL.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the submission mode.
    pub fn with_mode(mut self, mode: SubmissionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sends valid submissions through the gateway instead of natively.
    pub fn intercepted(self) -> Self {
        self.with_mode(SubmissionMode::Intercepted)
    }

    /// Lets valid submissions proceed natively.
    pub fn direct(self) -> Self {
        self.with_mode(SubmissionMode::Direct)
    }

    /// Sets the timeout for intercepted submissions.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
