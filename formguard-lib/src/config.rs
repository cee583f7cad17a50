//! Validator configuration

/// Placeholder substituted with the resolved minimum length.
pub const MIN_LENGTH_PLACEHOLDER: &str = "{min_length}";

/// Placeholder substituted with the resolved maximum length.
pub const MAX_LENGTH_PLACEHOLDER: &str = "{max_length}";

/// Message templates, one per failure a rule can report.
///
/// The length templates carry [`MIN_LENGTH_PLACEHOLDER`] and
/// [`MAX_LENGTH_PLACEHOLDER`], replaced with the bound in effect for the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    pub required: String,
    pub min_length: String,
    pub max_length: String,
    pub email: String,
    pub integer: String,
    pub alphanumeric: String,
    pub url: String,
    pub password_mismatch: String,
    pub password_missing: String,
    pub checked: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            required: "This field is required.".to_string(),
            min_length: "Invalid length. Minimum {min_length} characters.".to_string(),
            max_length: "Invalid length. Maximum {max_length} characters.".to_string(),
            email: "Invalid email.".to_string(),
            integer: "Please enter a whole number.".to_string(),
            alphanumeric: "Only letters and numbers, no spaces, are allowed.".to_string(),
            url: "Enter a valid URL starting with http:// or https://.".to_string(),
            password_mismatch: "Passwords do not match.".to_string(),
            password_missing: "No password field found to confirm against.".to_string(),
            checked: "You must check this box to continue.".to_string(),
        }
    }
}

impl MessageCatalog {
    /// Renders the below-minimum message for the given bound.
    pub fn min_length(&self, min: usize) -> String {
        self.min_length.replace(MIN_LENGTH_PLACEHOLDER, &min.to_string())
    }

    /// Renders the above-maximum message for the given bound.
    pub fn max_length(&self, max: usize) -> String {
        self.max_length.replace(MAX_LENGTH_PLACEHOLDER, &max.to_string())
    }
}

/// Process-wide validator settings.
///
/// # Example
///
/// ```
/// use formguard_lib::ValidatorConfig;
///
/// let config = ValidatorConfig::default()
///     .with_min_length(8)
///     .with_max_length(64);
/// assert_eq!(config.min_length, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Minimum length used when a field has no `min_length` override.
    ///
    /// Default: 3
    pub min_length: usize,

    /// Maximum length used when a field has no `max_length` override.
    ///
    /// Default: 255
    pub max_length: usize,

    /// Message templates.
    pub messages: MessageCatalog,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 255,
            messages: MessageCatalog::default(),
        }
    }
}

impl ValidatorConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default minimum length.
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Sets the default maximum length.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Replaces the message catalog.
    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }
}
