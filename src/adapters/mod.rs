//! Infrastructure adapters. Implement ports.
//!
//! Analysis API, results containers, terminal UI. Map errors to DomainError.

pub mod api;
pub mod output;
pub mod ui;
