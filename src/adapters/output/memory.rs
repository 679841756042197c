//! In-memory results container. Records every fragment written to it.
//!
//! Useful for tests and for embedding the client where the caller owns the display.

use crate::adapters::output::html::render_fragment;
use crate::domain::DomainError;
use crate::ports::{ResultsPort, ResultsView};
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryResults {
    fragments: Mutex<Vec<String>>,
}

impl MemoryResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current container contents, if anything was ever shown.
    pub fn current(&self) -> Option<String> {
        self.history().last().cloned()
    }

    /// All fragments in the order they were shown.
    pub fn history(&self) -> Vec<String> {
        match self.fragments.lock() {
            Ok(fragments) => fragments.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait::async_trait]
impl ResultsPort for MemoryResults {
    async fn show(&self, view: ResultsView<'_>) -> Result<(), DomainError> {
        let fragment = render_fragment(view)?;
        self.fragments
            .lock()
            .map_err(|e| DomainError::Output(e.to_string()))?
            .push(fragment);
        Ok(())
    }
}
