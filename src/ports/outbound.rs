//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{AnalysisRequest, AnalysisResponse, DomainError};

/// Role analysis endpoint. One request, one response; no retries.
#[async_trait::async_trait]
pub trait AnalysisPort: Send + Sync {
    /// Submit a job title and return the parsed report.
    ///
    /// # Errors
    /// - `DomainError::Server` when the server reports a failure (non-success status or `error` field)
    /// - `DomainError::Transport` when no response was received
    /// - `DomainError::Decode` when the body is not a valid report
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, DomainError>;
}

/// What the results container should display. Each `show` replaces the previous view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView<'a> {
    Loading,
    Report(&'a AnalysisResponse),
    Error(&'a str),
}

/// Results container. Output side of the form; written only by the submission flow.
#[async_trait::async_trait]
pub trait ResultsPort: Send + Sync {
    /// Replace the container contents with `view`.
    async fn show(&self, view: ResultsView<'_>) -> Result<(), DomainError>;
}
