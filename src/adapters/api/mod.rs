//! Analysis API adapters. Implement AnalysisPort.
//!
//! Provides the HTTP client for the real endpoint and a mock adapter for offline demos.

pub mod http_adapter;
pub mod mock_adapter;

pub use http_adapter::{HttpAnalysisAdapter, analyze_endpoint};
pub use mock_adapter::MockAnalysisAdapter;
