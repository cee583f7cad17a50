//! HTTP submission over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::Method;
use reqwest::multipart::Form;
use url::Url;

use super::gateway::{SubmissionGateway, SubmitRequest};
use crate::error::SubmitError;

/// Submits forms over HTTP.
///
/// GET requests carry the fields in the query string; every other method
/// sends them as `multipart/form-data`. A success status with a JSON body is
/// the only successful outcome.
///
/// This gateway is cheap to clone and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct HttpGateway {
    http_client: Client,
    timeout: Option<Duration>,
}

impl HttpGateway {
    /// Creates a gateway with its own HTTP client and no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl SubmissionGateway for HttpGateway {
    async fn submit(&self, request: &SubmitRequest) -> Result<serde_json::Value, SubmitError> {
        let mut url = Url::parse(&request.action)
            .map_err(|e| SubmitError::InvalidUrl(format!("{}: {}", request.action, e)))?;

        let mut builder = if request.method == Method::GET {
            if !request.fields.is_empty() {
                url.query_pairs_mut().extend_pairs(&request.fields);
            }
            self.http_client.get(url)
        } else {
            let form = request
                .fields
                .iter()
                .fold(Form::new(), |form, (name, value)| form.text(name.clone(), value.clone()));
            self.http_client
                .request(request.method.clone(), url)
                .multipart(form)
        };

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        debug!(
            "Submitting {} field(s) via {} {}",
            request.fields.len(),
            request.method,
            request.action
        );

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SubmitError::http(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| SubmitError::parse_with_body(e.to_string(), body))
    }
}
