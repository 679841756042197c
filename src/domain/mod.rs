//! Core domain layer. No external I/O dependencies.
//!
//! Entities and derived values live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{AnalysisRequest, AnalysisResponse, LearningItem, Resource};
pub use errors::{DomainError, UNKNOWN_SERVER_ERROR};
