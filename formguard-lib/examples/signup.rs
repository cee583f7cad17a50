//! Sign-up form demo
//!
//! Walks a sign-up form through the events a page would fire:
//! - input events on single fields
//! - a blocked submit, then a valid one
//! - server-side errors merged into the display
//!
//! Pass a URL to submit the form there (intercepted mode):
//!
//! ```sh
//! cargo run -p formguard-lib --example signup -- https://httpbin.org/post
//! ```

use std::env;

use formguard_lib::form::{ExternalErrors, FormConfig, FormController, FormInput, MessageBoard, SubmitAttempt};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn print_board(form: &FormController<MessageBoard>) {
    for input in form.inputs() {
        let messages = form.presenter().messages(input.id());
        if messages.is_empty() {
            println!("  {:<24} ok", input.name());
        } else {
            for message in messages {
                println!("  {:<24} {}", input.name(), message);
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), formguard_lib::Error> {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let name = FormInput::text("name")
        .with_validators("required length alphanumeric")
        .with_attribute("max_length", "20");
    let email = FormInput::text("email").with_validators("required email");
    let website = FormInput::text("website").with_validators("url");
    let password = FormInput::text("password")
        .with_validators("required length")
        .with_attribute("min_length", "8");
    let confirmation = FormInput::text("password_confirmation").with_validators("required password_confirmation");
    let agree = FormInput::checkbox("agree").with_validators("checked");

    let mut config = FormConfig::new();
    if let Some(action) = env::args().nth(1) {
        config = config.with_action(action).intercepted();
    }

    let mut form = FormController::new(
        [
            name.clone(),
            email.clone(),
            website.clone(),
            password.clone(),
            confirmation.clone(),
            agree.clone(),
        ],
        MessageBoard::new(),
    )?
    .with_config(config);

    println!("Typing into the email field:");
    email.set_value("ada@");
    form.on_input("email");
    print_board(&form);

    println!("\nSubmitting a half-filled form:");
    name.set_value("Ada Lovelace");
    website.set_value("analytical-engine.org");
    password.set_value("difference");
    confirmation.set_value("differance");
    if let SubmitAttempt::Blocked(result) = form.on_submit()? {
        println!("  blocked with {} message(s)", result.errors().count());
    }
    print_board(&form);

    println!("\nFixing everything and submitting again:");
    name.set_value("AdaLovelace");
    email.set_value("ada@example.com");
    website.set_value("https://analytical-engine.org");
    confirmation.set_value("difference");
    agree.set_checked(true);

    match form.on_submit()? {
        SubmitAttempt::Blocked(_) => println!("  still blocked"),
        SubmitAttempt::Native => println!("  valid, native submission proceeds"),
        SubmitAttempt::Intercepted(pending) => {
            println!("  valid, sending to {}", pending.request().action);
            match pending.wait().await {
                Ok(response) => println!("  server replied: {}", response),
                Err(e) => {
                    println!("  submission failed: {}", e);
                    if let Some(errors) = ExternalErrors::from_submit_error(&e) {
                        form.append_external_errors(&errors);
                    }
                }
            }
        }
    }

    println!("\nMerging server-side errors:");
    let mut errors = ExternalErrors::new();
    errors.insert("email", ["The email has already been taken."]);
    form.append_external_errors(&errors);
    print_board(&form);

    Ok(())
}
