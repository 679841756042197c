//! career-navigator: submit a job title to a role-analysis API and render the skill-gap report.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
