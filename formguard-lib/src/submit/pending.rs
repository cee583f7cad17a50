//! In-flight submissions.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::{error, info};

use super::gateway::{SubmissionGateway, SubmitRequest};
use crate::error::SubmitError;

/// Type alias for boxed futures used by pending submissions.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// An intercepted submission that has not completed yet.
///
/// Nothing is sent until the submission is awaited (or spawned), so the
/// triggering event returns immediately. Later validation passes do not
/// cancel it.
pub struct PendingSubmission {
    request: SubmitRequest,
    future: BoxFuture<'static, Result<serde_json::Value, SubmitError>>,
}

impl PendingSubmission {
    /// Prepares `request` for sending through `gateway`.
    pub fn new(request: SubmitRequest, gateway: Arc<dyn SubmissionGateway>) -> Self {
        let sent = request.clone();
        let future = Box::pin(async move {
            let outcome = gateway.submit(&sent).await;
            match &outcome {
                Ok(_) => info!("Submission to {} succeeded", sent.action),
                Err(e) => error!("Submission to {} failed: {}", sent.action, e),
            }
            outcome
        });
        Self { request, future }
    }

    /// The request being sent.
    pub fn request(&self) -> &SubmitRequest {
        &self.request
    }

    /// Sends the request and waits for the response.
    pub async fn wait(self) -> Result<serde_json::Value, SubmitError> {
        self.future.await
    }

    /// Converts into a boxed future, e.g. for `tokio::spawn`.
    pub fn into_boxed(self) -> BoxFuture<'static, Result<serde_json::Value, SubmitError>> {
        self.future
    }
}

impl std::fmt::Debug for PendingSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSubmission")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}
