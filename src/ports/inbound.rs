//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the form driver (interactive prompt, one-shot CLI) invokes submissions.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the form until the user leaves it. Each answer is one submission.
    async fn run(&self) -> Result<(), DomainError>;
}
