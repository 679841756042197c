//! Implements InputPort. Inquire-based form: one prompt per submission.

use crate::domain::DomainError;
use crate::ports::InputPort;
use crate::usecases::{RoleAnalysisClient, SubmitOutcome};
use async_trait::async_trait;
use inquire::{InquireError, Text};
use std::sync::Arc;
use tracing::info;

/// TUI adapter. Loops a job-title prompt until Esc / Ctrl-C.
pub struct TuiInputPort {
    client: Arc<RoleAnalysisClient>,
}

impl TuiInputPort {
    pub fn new(client: Arc<RoleAnalysisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let answer = Text::new("Job title:")
                .with_placeholder("e.g., Financial Analyst")
                .with_help_message("Enter to analyze, Esc to quit")
                .prompt();

            let job_title = match answer {
                Ok(title) => title,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    info!("form closed");
                    return Ok(());
                }
                Err(e) => return Err(DomainError::Prompt(e.to_string())),
            };

            // Failures are already on screen; the form stays usable.
            if let SubmitOutcome::Rendered(response) = self.client.submit(&job_title).await? {
                info!(role = %response.role_title, "report shown");
            }
        }
    }
}
