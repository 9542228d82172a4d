use reqwest::Client;

use crate::api::types::ApiError;
use crate::config;

/// HTTP client for the backend REST service. Endpoint methods live in
/// the per-domain modules (`api::trips`, `api::payroll`, `api::accounts`,
/// `api::vehicles`) as `impl ApiClient` blocks.
#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Overrides the configured base URL; used by tests and by tooling
    /// pointed at a non-default backend.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::api_base_url(),
        }
    }

    /// Turns a non-2xx response into the backend's own `ApiError` body,
    /// or a generic transport error when the body is not one. A failed
    /// or unreadable response is never observable as a success.
    pub(crate) async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::request_failed(format!("Request failed with status {}", status)),
        }
    }
}
