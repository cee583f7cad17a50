//! Controller flows: input events, submit gating and external errors.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use formguard_lib::error::{ConfigError, SubmitError};
use formguard_lib::form::{
    ErrorPresenter, ExternalErrors, FormConfig, FormController, FormInput, MessageBoard, SubmitAttempt,
};
use formguard_lib::submit::{SubmissionGateway, SubmissionMode, SubmitRequest};
use formguard_lib::{Validator, ValidatorConfig};
use reqwest::Method;
use serde_json::json;

/// Gateway that records requests and answers with a canned response.
struct RecordingGateway {
    requests: Mutex<Vec<SubmitRequest>>,
    reply: Result<serde_json::Value, u16>,
}

impl RecordingGateway {
    fn replying(reply: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(reply),
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Err(status),
        })
    }

    fn requests(&self) -> Vec<SubmitRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionGateway for RecordingGateway {
    async fn submit(&self, request: &SubmitRequest) -> Result<serde_json::Value, SubmitError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(value) => Ok(value.clone()),
            Err(status) => Err(SubmitError::http(*status, r#"{"errors":{"email":["Taken"]}}"#)),
        }
    }
}

struct SignupForm {
    email: FormInput,
    password: FormInput,
    confirmation: FormInput,
    agree: FormInput,
}

impl SignupForm {
    fn new() -> Self {
        Self {
            email: FormInput::text("email").with_validators("required email"),
            password: FormInput::text("password")
                .with_validators("required length")
                .with_attribute("min_length", "8"),
            confirmation: FormInput::text("password_confirmation").with_validators("password_confirmation"),
            agree: FormInput::checkbox("agree").with_validators("checked"),
        }
    }

    fn inputs(&self) -> Vec<FormInput> {
        vec![
            self.email.clone(),
            self.password.clone(),
            self.confirmation.clone(),
            self.agree.clone(),
        ]
    }

    fn fill_valid(&self) {
        self.email.set_value("ada@example.com");
        self.password.set_value("correct horse");
        self.confirmation.set_value("correct horse");
        self.agree.set_checked(true);
    }

    fn controller(&self) -> FormController<MessageBoard> {
        FormController::new(self.inputs(), MessageBoard::new()).unwrap()
    }
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn test_unknown_rule_fails_registration() {
    let input = FormInput::text("age").with_validators("required number");
    let err = FormController::new([input], MessageBoard::new()).err().unwrap();
    assert_eq!(err, ConfigError::unknown_rule("age", "number"));
}

#[test]
fn test_bad_override_fails_registration() {
    let input = FormInput::text("bio")
        .with_validators("length")
        .with_attribute("max_length", "lots");
    let err = FormController::new([input], MessageBoard::new()).err().unwrap();
    assert!(matches!(err, ConfigError::InvalidOverride { key: "max_length", .. }));
}

#[test]
fn test_descriptors_read_live_state() {
    let form = SignupForm::new();
    let controller = form.controller();
    form.email.set_value("x@y.io");

    let descriptors = controller.descriptors();
    assert_eq!(descriptors[0].value, "x@y.io");
    assert_eq!(descriptors[1].overrides.min_length, Some(8));
    assert_eq!(descriptors[3].rule_names(), ["checked"]);
}

// =============================================================================
// Input events
// =============================================================================

#[test]
fn test_input_event_validates_only_that_field() {
    let form = SignupForm::new();
    let mut controller = form.controller();

    form.email.set_value("nope");
    let result = controller.on_input("email");

    assert_eq!(result.field_results().len(), 1);
    assert_eq!(controller.presenter().messages("email"), ["Invalid email."]);
    assert!(controller.presenter().messages("agree").is_empty());
}

#[test]
fn test_input_event_clears_fixed_field() {
    let form = SignupForm::new();
    let mut controller = form.controller();

    form.email.set_value("nope");
    controller.on_input("email");
    form.email.set_value("ada@example.com");
    let result = controller.on_input("email");

    assert!(result.is_valid());
    assert!(controller.presenter().is_empty());
}

#[test]
fn test_confirmation_input_sees_password() {
    let form = SignupForm::new();
    let mut controller = form.controller();

    form.password.set_value("correct horse");
    form.confirmation.set_value("correct horsf");
    controller.on_input("password_confirmation");
    assert_eq!(
        controller.presenter().messages("password_confirmation"),
        ["Passwords do not match."]
    );
}

// =============================================================================
// Submit
// =============================================================================

#[test]
fn test_submit_blocked_renders_every_field() {
    let form = SignupForm::new();
    let mut controller = form.controller();

    let attempt = controller.on_submit().unwrap();
    let SubmitAttempt::Blocked(result) = attempt else {
        panic!("expected blocked submission");
    };

    assert_eq!(result.field_results().len(), 4);
    let board = controller.presenter();
    assert_eq!(board.messages("email"), ["This field is required."]);
    assert_eq!(
        board.messages("password"),
        ["This field is required.", "Invalid length. Minimum 8 characters."]
    );
    assert!(board.messages("password_confirmation").is_empty());
    assert_eq!(board.messages("agree"), ["You must check this box to continue."]);
}

#[test]
fn test_submit_direct_mode() {
    let form = SignupForm::new();
    let mut controller = form.controller();
    form.fill_valid();

    assert!(matches!(controller.on_submit().unwrap(), SubmitAttempt::Native));
    assert!(controller.presenter().is_empty());
}

#[test]
fn test_submit_clears_previous_messages() {
    let form = SignupForm::new();
    let mut controller = form.controller();

    assert!(controller.on_submit().unwrap().is_blocked());
    form.fill_valid();
    assert!(!controller.on_submit().unwrap().is_blocked());
    assert!(controller.presenter().is_empty());
}

#[test]
fn test_intercepted_without_action() {
    let form = SignupForm::new();
    let mut controller = form
        .controller()
        .with_config(FormConfig::new().intercepted());
    form.fill_valid();

    assert!(matches!(controller.on_submit(), Err(SubmitError::MissingAction)));
}

#[tokio::test]
async fn test_intercepted_submission_sends_form_data() {
    let form = SignupForm::new();
    let gateway = RecordingGateway::replying(json!({ "id": 7 }));
    let mut controller = form
        .controller()
        .with_config(FormConfig::new().with_action("https://example.com/signup"))
        .with_gateway(gateway.clone());
    controller.set_mode(SubmissionMode::Intercepted);
    form.fill_valid();

    let SubmitAttempt::Intercepted(pending) = controller.on_submit().unwrap() else {
        panic!("expected intercepted submission");
    };
    assert!(gateway.requests().is_empty());

    let response = pending.wait().await.unwrap();
    assert_eq!(response, json!({ "id": 7 }));

    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.action, "https://example.com/signup");
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.field("email"), Some("ada@example.com"));
    assert_eq!(request.field("agree"), Some("on"));
    assert_eq!(request.fields.len(), 4);
}

#[tokio::test]
async fn test_unchecked_checkbox_is_not_sent() {
    let newsletter = FormInput::checkbox("newsletter");
    let name = FormInput::text("name").with_value("Ada");
    let gateway = RecordingGateway::replying(json!({}));
    let mut controller = FormController::new([name, newsletter], MessageBoard::new())
        .unwrap()
        .with_config(
            FormConfig::new()
                .with_action("https://example.com/subscribe")
                .with_method(Method::PUT)
                .intercepted(),
        )
        .with_gateway(gateway.clone());

    let SubmitAttempt::Intercepted(pending) = controller.on_submit().unwrap() else {
        panic!("expected intercepted submission");
    };
    assert_eq!(pending.request().fields, [("name".to_string(), "Ada".to_string())]);
    pending.wait().await.unwrap();
    assert_eq!(gateway.requests()[0].method, Method::PUT);
}

#[tokio::test]
async fn test_retry_after_failure_skips_revalidation() {
    let form = SignupForm::new();
    let gateway = RecordingGateway::failing(422);
    let mut controller = form
        .controller()
        .with_config(
            FormConfig::new()
                .with_action("https://example.com/signup")
                .intercepted(),
        )
        .with_gateway(gateway.clone());
    form.fill_valid();

    let SubmitAttempt::Intercepted(pending) = controller.on_submit().unwrap() else {
        panic!("expected intercepted submission");
    };
    let err = pending.wait().await.unwrap_err();
    assert_eq!(err.status(), Some(422));

    // Server-side errors are shown alongside whatever is displayed
    let external = ExternalErrors::from_submit_error(&err).unwrap();
    controller.append_external_errors(&external);
    assert_eq!(controller.presenter().messages("email"), ["Taken"]);

    // Nothing edited: the cached verdict is reused and the display untouched
    let SubmitAttempt::Intercepted(retry) = controller.on_submit().unwrap() else {
        panic!("expected intercepted retry");
    };
    assert_eq!(controller.presenter().messages("email"), ["Taken"]);
    retry.wait().await.unwrap_err();
    assert_eq!(gateway.requests().len(), 2);

    // An edit forces a fresh pass, which clears the stale message
    form.email.set_value("grace@example.com");
    assert!(!controller.on_submit().unwrap().is_blocked());
    assert!(controller.presenter().messages("email").is_empty());
}

#[tokio::test]
async fn test_later_passes_do_not_cancel_pending_submission() {
    let form = SignupForm::new();
    let gateway = RecordingGateway::replying(json!({ "ok": true }));
    let mut controller = form
        .controller()
        .with_config(
            FormConfig::new()
                .with_action("https://example.com/signup")
                .intercepted(),
        )
        .with_gateway(gateway.clone());
    form.fill_valid();

    let SubmitAttempt::Intercepted(pending) = controller.on_submit().unwrap() else {
        panic!("expected intercepted submission");
    };
    let in_flight = tokio::spawn(pending.into_boxed());

    form.email.set_value("nope");
    controller.on_input("email");
    assert!(controller.on_submit().unwrap().is_blocked());
    assert_eq!(controller.presenter().messages("email"), ["Invalid email."]);

    let response = in_flight.await.unwrap().unwrap();
    assert_eq!(response, json!({ "ok": true }));

    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].field("email"), Some("ada@example.com"));
    assert_eq!(requests[0].field("password"), Some("correct horse"));
}

#[test]
fn test_edit_after_valid_submit_revalidates() {
    let form = SignupForm::new();
    let mut controller = form.controller();
    form.fill_valid();
    assert!(!controller.on_submit().unwrap().is_blocked());

    form.agree.set_checked(false);
    assert!(controller.on_submit().unwrap().is_blocked());
}

// =============================================================================
// External errors
// =============================================================================

#[test]
fn test_external_errors_append_without_clearing() {
    let form = SignupForm::new();
    let mut controller = form.controller();
    form.email.set_value("nope");
    controller.on_input("email");

    let external = ExternalErrors::from_json(&json!({
        "errors": {
            "email": ["The email has already been taken."],
            "nickname": ["Unknown field"]
        }
    }))
    .unwrap();
    controller.append_external_errors(&external);

    assert_eq!(
        controller.presenter().messages("email"),
        ["Invalid email.", "The email has already been taken."]
    );
    assert!(controller.presenter().messages("nickname").is_empty());
}

#[test]
fn test_external_errors_route_by_name_to_element_id() {
    let email = FormInput::text("email").with_id("signup-email");
    let mut controller = FormController::new([email], MessageBoard::new()).unwrap();

    let mut external = ExternalErrors::new();
    external.insert("email", ["Taken"]);
    controller.append_external_errors(&external);

    assert_eq!(controller.presenter().messages("signup-email"), ["Taken"]);
}

// =============================================================================
// Custom presenter and configuration
// =============================================================================

/// Presenter that records every call, to check the clear-then-append order.
#[derive(Default)]
struct CallLog(Vec<String>);

impl ErrorPresenter for CallLog {
    fn clear(&mut self, field: &formguard_lib::FieldId) {
        self.0.push(format!("clear {}", field));
    }

    fn append(&mut self, field: &formguard_lib::FieldId, message: &str) {
        self.0.push(format!("append {} {}", field, message));
    }
}

#[test]
fn test_presenter_clears_before_appending() {
    let input = FormInput::text("code")
        .with_validators("length integer")
        .with_value("x");
    let mut controller = FormController::new([input], CallLog::default())
        .unwrap()
        .with_validator(Validator::with_config(ValidatorConfig::default().with_min_length(2)));

    controller.validate();
    assert_eq!(
        controller.presenter().0,
        [
            "clear code",
            "append code Invalid length. Minimum 2 characters.",
            "append code Please enter a whole number.",
        ]
    );
}
