//! Declarative form validation
//!
//! Evaluates a closed set of per-field rules over a snapshot of form state,
//! aggregates the failures into one validity decision, and gates submission
//! (native or intercepted) on that decision.

pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod form;
pub mod result;
pub mod rules;
pub mod submit;

pub use config::MessageCatalog;
pub use config::ValidatorConfig;
pub use engine::RuleContext;
pub use engine::Validator;
pub use error::Error;
pub use field::FieldDescriptor;
pub use field::FieldId;
pub use field::Overrides;
pub use result::FieldResult;
pub use result::RuleOutcome;
pub use result::ValidationResult;
pub use rules::Rule;
