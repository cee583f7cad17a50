//! Form glue around the engine.
//!
//! Reads live input state into field descriptors, renders results through an
//! [`ErrorPresenter`], and gates submission on the engine's verdict. Each UI
//! event maps to one explicit call: [`FormController::on_input`] or
//! [`FormController::on_submit`].

mod config;
mod controller;
mod external;
mod input;
mod presenter;

pub use config::FormConfig;
pub use controller::FormController;
pub use controller::SubmitAttempt;
pub use external::ExternalErrors;
pub use input::DEFAULT_CHECKBOX_VALUE;
pub use input::FormInput;
pub use input::InputKind;
pub use input::VALIDATORS_ATTRIBUTE;
pub use presenter::ErrorPresenter;
pub use presenter::MessageBoard;
