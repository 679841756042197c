//! Application use cases. Orchestrate domain logic via ports.

pub mod role_analysis_client;

pub use role_analysis_client::{RoleAnalysisClient, SubmitOutcome};
