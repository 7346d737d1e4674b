use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use shared::{SetupErrorResponse, SetupRequest};

use crate::errors::SubmitError;

const SETUP_PATH: &str = "/api/user/setup";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Transport used by the setup form to deliver its payload
#[async_trait(?Send)]
pub trait SetupApi {
    async fn submit_setup(&self, request: &SetupRequest) -> Result<(), SubmitError>;
}

/// API client for communicating with the reminder service
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url(crate::config::AppConfig::default().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn setup_url(&self) -> String {
        format!("{}{}", self.base_url, SETUP_PATH)
    }

    async fn rejection(response: Response) -> SubmitError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("Unreadable error body for status {}: {}", status, e);
                String::new()
            }
        };
        SubmitError::Rejected {
            status,
            message: rejection_message(&body),
        }
    }
}

/// JSON text sent as the request body
fn encode_body(request: &SetupRequest) -> Result<String, SubmitError> {
    serde_json::to_string(request)
        .map_err(|e| SubmitError::Transport(format!("Failed to serialize request: {}", e)))
}

/// Message to show for a failure response body.
///
/// `None` when the body is not the expected JSON or its `error` is missing or
/// empty; the caller then falls back to the generic failure text.
fn rejection_message(body: &str) -> Option<String> {
    match serde_json::from_str::<SetupErrorResponse>(body) {
        Ok(parsed) => parsed.error.filter(|message| !message.is_empty()),
        Err(e) => {
            log::debug!("Error body is not JSON: {}", e);
            None
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SetupApi for ApiClient {
    /// POST the setup payload as JSON. The success body is not inspected.
    async fn submit_setup(&self, request: &SetupRequest) -> Result<(), SubmitError> {
        let url = self.setup_url();
        log::debug!("Submitting setup for {} medication(s) to {}", request.medications.len(), url);

        let response = Request::post(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(encode_body(request)?)
            .map_err(|e| SubmitError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(format!("Network error: {}", e)))?;

        if response.ok() {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }
}
