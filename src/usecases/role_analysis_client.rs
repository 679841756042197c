//! Role analysis use case. One submission = loading view, one request, one final view.
//!
//! Coordinates between the analysis endpoint (AnalysisPort) and the results container (ResultsPort).

use crate::domain::{AnalysisRequest, AnalysisResponse, DomainError};
use crate::ports::{AnalysisPort, ResultsPort, ResultsView};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a single submission, as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank title. Nothing was sent and the container was not touched.
    Ignored,
    /// Report rendered into the container.
    Rendered(AnalysisResponse),
    /// Error view rendered with this message.
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SubmitOutcome::Failed(_))
    }
}

/// Submits job titles and renders the outcome into the results container.
///
/// The container only ever holds the loading view, a complete report, or an error view.
/// Concurrent calls are not serialized: whichever response resolves last is displayed.
pub struct RoleAnalysisClient {
    analysis: Arc<dyn AnalysisPort>,
    results: Arc<dyn ResultsPort>,
}

impl RoleAnalysisClient {
    pub fn new(analysis: Arc<dyn AnalysisPort>, results: Arc<dyn ResultsPort>) -> Self {
        Self { analysis, results }
    }

    /// Handle one form submission.
    ///
    /// Analysis failures are rendered as an error view and reported as
    /// `SubmitOutcome::Failed`. `Err` is returned only when the results container
    /// itself cannot be written.
    pub async fn submit(&self, job_title: &str) -> Result<SubmitOutcome, DomainError> {
        let Some(request) = AnalysisRequest::new(job_title) else {
            debug!("blank job title; submission ignored");
            return Ok(SubmitOutcome::Ignored);
        };

        self.results.show(ResultsView::Loading).await?;
        info!(job_title = %request.job_title(), "submitting role for analysis");

        match self.analysis.analyze(&request).await {
            Ok(response) => {
                self.results.show(ResultsView::Report(&response)).await?;
                info!(
                    role = %response.role_title,
                    skills = response.required_skills_for_role.len(),
                    plan_items = response.learning_plan.len(),
                    "analysis rendered"
                );
                Ok(SubmitOutcome::Rendered(response))
            }
            Err(e) if e.is_analysis_failure() => {
                let message = e.to_string();
                warn!(error = %message, "analysis failed");
                self.results.show(ResultsView::Error(&message)).await?;
                Ok(SubmitOutcome::Failed(message))
            }
            Err(e) => Err(e),
        }
    }
}
