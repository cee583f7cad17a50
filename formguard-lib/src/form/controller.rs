//! Form controller: the explicit input and submit call sites.

use std::sync::Arc;

use log::{debug, info, warn};

use super::config::FormConfig;
use super::external::ExternalErrors;
use super::input::{FormInput, VALIDATORS_ATTRIBUTE};
use super::presenter::ErrorPresenter;
use crate::engine::Validator;
use crate::error::{ConfigError, SubmitError};
use crate::field::{FieldDescriptor, FieldId, Overrides};
use crate::result::ValidationResult;
use crate::rules::{self, PASSWORD_FIELD, Rule};
use crate::submit::{HttpGateway, PendingSubmission, SubmissionGateway, SubmissionMode, SubmitRequest};

/// An input together with the rules parsed from it at registration.
#[derive(Debug, Clone)]
struct RegisteredField {
    input: FormInput,
    rules: Vec<Rule>,
    overrides: Overrides,
}

impl RegisteredField {
    fn register(input: FormInput) -> Result<Self, ConfigError> {
        let rules = match input.attribute(VALIDATORS_ATTRIBUTE) {
            Some(declaration) => rules::parse_rules(input.name(), declaration)?,
            None => Vec::new(),
        };
        let overrides = Overrides::from_attributes(input.name(), input.attributes())?;
        Ok(Self {
            input,
            rules,
            overrides,
        })
    }

    /// Reads the input's current state.
    fn descriptor(&self) -> FieldDescriptor {
        FieldDescriptor::new(self.input.name())
            .with_id(self.input.id())
            .with_value(self.input.value())
            .with_checked(self.input.is_checked())
            .with_rules(self.rules.iter().copied())
            .with_overrides(self.overrides)
    }
}

/// What happened to a submit attempt.
#[derive(Debug)]
pub enum SubmitAttempt {
    /// The form is invalid; nothing was submitted.
    Blocked(ValidationResult),
    /// The form is valid and the normal submission should proceed.
    Native,
    /// The form is valid and is being sent by the controller.
    Intercepted(PendingSubmission),
}

impl SubmitAttempt {
    /// Check if the attempt was stopped by validation.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

/// Drives validation and submission for one form.
///
/// Fields are registered once; every pass then reads their live state,
/// evaluates it, and hands the result to the presenter.
///
/// # Example
///
/// ```
/// use formguard_lib::form::{FormController, FormInput, MessageBoard, SubmitAttempt};
///
/// let email = FormInput::text("email").with_validators("required email");
/// let mut form = FormController::new([email.clone()], MessageBoard::new())?;
///
/// email.set_value("nope");
/// assert!(form.on_submit()?.is_blocked());
/// assert_eq!(form.presenter().messages("email"), ["Invalid email."]);
///
/// email.set_value("ada@example.com");
/// assert!(matches!(form.on_submit()?, SubmitAttempt::Native));
/// # Ok::<(), formguard_lib::Error>(())
/// ```
pub struct FormController<P: ErrorPresenter> {
    validator: Validator,
    config: FormConfig,
    fields: Vec<RegisteredField>,
    presenter: P,
    gateway: Option<Arc<dyn SubmissionGateway>>,
    /// Result of the last submit pass, reused while nothing is edited
    last_submit: Option<ValidationResult>,
}

impl<P: ErrorPresenter> FormController<P> {
    /// Registers the inputs, parsing each one's rule declaration and
    /// overrides. An unknown rule name or malformed override fails here.
    pub fn new(inputs: impl IntoIterator<Item = FormInput>, presenter: P) -> Result<Self, ConfigError> {
        let fields = inputs
            .into_iter()
            .map(RegisteredField::register)
            .collect::<Result<Vec<_>, _>>()?;

        let has_password = fields.iter().any(|f| f.input.name() == PASSWORD_FIELD);
        for field in &fields {
            if !has_password && field.rules.contains(&Rule::PasswordConfirmation) {
                warn!(
                    "Field '{}' declares {} but the form has no '{}' field",
                    field.input.name(),
                    Rule::PasswordConfirmation,
                    PASSWORD_FIELD
                );
            }
        }

        debug!("Registered {} field(s)", fields.len());

        Ok(Self {
            validator: Validator::new(),
            config: FormConfig::default(),
            fields,
            presenter,
            gateway: None,
            last_submit: None,
        })
    }

    /// Uses a validator with a custom configuration.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Sets the submission configuration.
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Sends intercepted submissions through `gateway` instead of HTTP.
    pub fn with_gateway(mut self, gateway: Arc<dyn SubmissionGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Switches between native and intercepted submission.
    pub fn set_mode(&mut self, mode: SubmissionMode) {
        self.config.mode = mode;
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Registered inputs, in registration order.
    pub fn inputs(&self) -> impl Iterator<Item = &FormInput> {
        self.fields.iter().map(|f| &f.input)
    }

    /// Snapshot of every field's current state.
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.fields.iter().map(RegisteredField::descriptor).collect()
    }

    /// Name/value pairs a submission would send right now.
    pub fn form_data(&self) -> Vec<(String, String)> {
        self.inputs().filter_map(FormInput::form_entry).collect()
    }

    /// Validates the whole form and renders the result.
    pub fn validate(&mut self) -> ValidationResult {
        let result = self.validator.evaluate(&self.descriptors());
        self.presenter.present(&result);
        result
    }

    /// Handles an input event on the field with the given ID.
    ///
    /// Only that field is validated and re-rendered; the rest of the form
    /// still serves as context for cross-field rules.
    pub fn on_input(&mut self, id: &str) -> ValidationResult {
        let result = self
            .validator
            .evaluate_field(&self.descriptors(), &FieldId::from(id));
        self.presenter.present(&result);
        result
    }

    /// Handles a submit attempt.
    ///
    /// Validates the form unless the previous attempt was valid and nothing
    /// was edited since, then blocks, lets the native submission proceed, or
    /// prepares an intercepted one according to the configured mode.
    pub fn on_submit(&mut self) -> Result<SubmitAttempt, SubmitError> {
        let edited = self.take_edited();
        let result = match self.last_submit.take() {
            Some(previous) if !edited && previous.is_valid() => {
                debug!("No edits since last valid submit, skipping validation");
                previous
            }
            _ => self.validate(),
        };

        if result.is_invalid() {
            debug!("Submission blocked: {} message(s)", result.errors().count());
            return Ok(SubmitAttempt::Blocked(result));
        }
        self.last_submit = Some(result);

        match self.config.mode {
            SubmissionMode::Direct => {
                info!("Form valid, proceeding with native submission");
                Ok(SubmitAttempt::Native)
            }
            SubmissionMode::Intercepted => {
                let request = self.submit_request()?;
                let gateway = self.gateway();
                Ok(SubmitAttempt::Intercepted(PendingSubmission::new(request, gateway)))
            }
        }
    }

    /// Shows externally supplied messages without clearing existing ones.
    ///
    /// Messages are routed by field name to every input with that name.
    /// Names with no matching input are skipped.
    pub fn append_external_errors(&mut self, errors: &ExternalErrors) {
        for (name, messages) in errors.iter() {
            let ids: Vec<FieldId> = self
                .inputs()
                .filter(|input| input.name() == name)
                .map(|input| FieldId::new(input.id()))
                .collect();

            if ids.is_empty() {
                warn!("External errors for unknown field '{}' ignored", name);
                continue;
            }

            for id in &ids {
                for message in messages {
                    self.presenter.append(id, message);
                }
            }
        }
    }

    fn submit_request(&self) -> Result<SubmitRequest, SubmitError> {
        let action = self.config.action.clone().ok_or(SubmitError::MissingAction)?;
        Ok(SubmitRequest {
            action,
            method: self.config.method.clone(),
            fields: self.form_data(),
        })
    }

    fn gateway(&mut self) -> Arc<dyn SubmissionGateway> {
        let timeout = self.config.timeout;
        let gateway = self.gateway.get_or_insert_with(|| {
            let http = match timeout {
                Some(timeout) => HttpGateway::new().timeout(timeout),
                None => HttpGateway::new(),
            };
            let gateway: Arc<dyn SubmissionGateway> = Arc::new(http);
            gateway
        });
        Arc::clone(gateway)
    }

    /// Consumes the edited flag of every input.
    fn take_edited(&self) -> bool {
        self.fields
            .iter()
            .fold(false, |edited, f| f.input.take_edited() | edited)
    }
}
