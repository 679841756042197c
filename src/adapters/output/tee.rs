//! Fan a view out to several results containers.

use crate::domain::DomainError;
use crate::ports::{ResultsPort, ResultsView};
use std::sync::Arc;

/// Shows each view on every inner container, in order. Stops at the first failure.
pub struct TeeResults {
    sinks: Vec<Arc<dyn ResultsPort>>,
}

impl TeeResults {
    pub fn new(sinks: Vec<Arc<dyn ResultsPort>>) -> Self {
        Self { sinks }
    }
}

#[async_trait::async_trait]
impl ResultsPort for TeeResults {
    async fn show(&self, view: ResultsView<'_>) -> Result<(), DomainError> {
        for sink in &self.sinks {
            sink.show(view).await?;
        }
        Ok(())
    }
}
