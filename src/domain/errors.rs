//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Message shown when the server fails without saying why.
pub const UNKNOWN_SERVER_ERROR: &str = "An unknown error occurred.";

#[derive(Error, Debug)]
pub enum DomainError {
    /// Error reported by the analysis server. Displayed verbatim.
    #[error("{0}")]
    Server(String),

    /// Request never produced a response (connection refused, DNS, TLS...).
    #[error("{0}")]
    Transport(String),

    /// Response body was not a valid analysis report.
    #[error("{0}")]
    Decode(String),

    #[error("Results output error: {0}")]
    Output(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// Server, transport and decode failures end in the error view; the rest are
    /// failures of the tool itself.
    pub fn is_analysis_failure(&self) -> bool {
        matches!(
            self,
            DomainError::Server(_) | DomainError::Transport(_) | DomainError::Decode(_)
        )
    }
}
