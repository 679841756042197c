//! Domain entities. Pure data structures for the role-analysis exchange.
//!
//! No HTTP/IO types here; adapters map wire bodies into these.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Body sent to the analysis endpoint: `{"job_title": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    job_title: String,
}

impl AnalysisRequest {
    /// Trims the raw form value. Returns `None` for an empty or whitespace-only title,
    /// in which case nothing should be submitted.
    pub fn new(raw_job_title: &str) -> Option<Self> {
        let job_title = raw_job_title.trim();
        if job_title.is_empty() {
            return None;
        }
        Some(Self {
            job_title: job_title.to_string(),
        })
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }
}

/// Skill-gap report returned by the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub role_title: String,
    pub description: String,
    pub impact_level: String,
    #[serde(default)]
    pub required_skills_for_role: Vec<String>,
    /// Skills the server assumes the user has. Carried but not rendered differently.
    #[serde(default)]
    pub user_skills: Vec<String>,
    #[serde(default)]
    pub learning_plan: Vec<LearningItem>,
}

impl AnalysisResponse {
    /// Style class for the impact badge: first whitespace-delimited token of
    /// `impact_level`, lower-cased ("High Transformation" -> "high").
    pub fn impact_badge_class(&self) -> String {
        self.impact_level
            .split_whitespace()
            .next()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }

    /// Required skills with duplicates removed, keeping the order of first occurrence.
    pub fn distinct_required_skills(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.required_skills_for_role
            .iter()
            .map(String::as_str)
            .filter(|skill| seen.insert(*skill))
            .collect()
    }
}

/// One skill gap and the resources suggested to close it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningItem {
    pub skill_to_learn: String,
    #[serde(default)]
    pub suggested_resources: Vec<Resource>,
}

/// External learning resource (course, article, video...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}
