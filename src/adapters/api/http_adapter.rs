//! HTTP adapter for the role analysis API.
//!
//! Implements `AnalysisPort` with a single JSON POST to `{base_url}/api/analyze`.
//! No retries and no timeout: one request, one response.

use crate::domain::{AnalysisRequest, AnalysisResponse, DomainError, UNKNOWN_SERVER_ERROR};
use crate::ports::AnalysisPort;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Path of the analysis endpoint, relative to the API origin.
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Build the full endpoint URL from an origin such as `http://localhost:5000/`.
pub fn analyze_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH)
}

/// Extract the `error` field from a JSON body. Falsy values (null, false, 0, "")
/// count as absent; other non-string values are shown in their JSON form.
fn server_error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Role analysis API client.
pub struct HttpAnalysisAdapter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnalysisAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `base_url` - API origin (e.g., "http://localhost:5000"); the endpoint path is appended
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: analyze_endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl AnalysisPort for HttpAnalysisAdapter {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, DomainError> {
        info!(
            endpoint = %self.endpoint,
            job_title = %request.job_title(),
            "sending analysis request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        debug!(status = %status, body_len = text.len(), "received analysis response");

        let body = serde_json::from_str::<Value>(&text);

        // Failed status: use the server's message when the body carries one
        if !status.is_success() {
            let message = body
                .ok()
                .as_ref()
                .and_then(server_error_message)
                .unwrap_or_else(|| UNKNOWN_SERVER_ERROR.to_string());
            warn!(status = %status, error = %message, "analysis API returned error");
            return Err(DomainError::Server(message));
        }

        let body = body.map_err(|e| {
            warn!(error = %e, body = %text.chars().take(200).collect::<String>(), "JSON parse failed");
            DomainError::Decode(e.to_string())
        })?;

        if let Some(message) = server_error_message(&body) {
            warn!(status = %status, error = %message, "analysis API reported error in body");
            return Err(DomainError::Server(message));
        }

        serde_json::from_value(body).map_err(|e| DomainError::Decode(e.to_string()))
    }
}
