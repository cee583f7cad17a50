//! Submission gateway

mod gateway;
mod http;
mod pending;

pub use gateway::SubmissionGateway;
pub use gateway::SubmitRequest;
pub use http::HttpGateway;
pub use pending::BoxFuture;
pub use pending::PendingSubmission;

/// How a valid form is submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionMode {
    /// Let the normal form submission proceed.
    #[default]
    Direct,
    /// Serialize the fields and send them through a [`SubmissionGateway`].
    Intercepted,
}
