//! Error types

mod config;
mod submit;

pub use config::*;
pub use submit::*;

/// Top-level error for form setup and submission.
///
/// Validation failures are not errors: they are reported through
/// [`ValidationResult`](crate::ValidationResult).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The form or one of its fields is misconfigured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An intercepted submission failed.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}
