//! Mock analysis adapter for running without an API server.
//!
//! Returns canned reports for a few sample roles.

use crate::domain::{AnalysisRequest, AnalysisResponse, DomainError, LearningItem, Resource};
use crate::ports::AnalysisPort;
use std::time::Duration;
use tracing::info;

/// Skills the sample server assumes every user already has.
const SAMPLE_USER_SKILLS: &[&str] = &["Creativity", "Emotional Intelligence", "Programming"];

/// Mock analysis adapter.
///
/// Looks up the job title (case-insensitive) in a small built-in table.
/// Simulates network latency with configurable delay.
pub struct MockAnalysisAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAnalysisAdapter {
    /// Create a new mock adapter with default delay (300ms).
    pub fn new() -> Self {
        Self { delay_ms: 300 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    fn lookup(job_title: &str) -> Option<AnalysisResponse> {
        match job_title.to_lowercase().as_str() {
            "software developer" => Some(sample(
                "Software Developer",
                "Designs, builds and maintains software systems. AI assistants now draft much of the routine code.",
                "High Transformation",
                &["Programming", "Cloud Computing", "System Design", "Programming"],
                vec![
                    plan_item(
                        "Cloud Computing",
                        &[
                            ("Cloud Practitioner Essentials", "Course", "https://aws.amazon.com/training/"),
                            ("Cloud Computing Concepts", "Course", "https://www.coursera.org/"),
                        ],
                    ),
                    plan_item(
                        "System Design",
                        &[("System Design Primer", "Article", "https://github.com/donnemartin/system-design-primer")],
                    ),
                ],
            )),
            "financial analyst" => Some(sample(
                "Financial Analyst",
                "Analyzes financial data to guide investment decisions. Forecasting and reporting are increasingly automated.",
                "High Automation Risk",
                &["Data Analysis", "Financial Modeling", "Creativity"],
                vec![plan_item(
                    "Data Analysis",
                    &[("Data Analysis with Python", "Course", "https://www.freecodecamp.org/")],
                )],
            )),
            "marketing manager" => Some(sample(
                "Marketing Manager",
                "Plans and runs campaigns. Generative tools speed up content, strategy stays human.",
                "Medium Augmentation",
                &["Creativity", "Emotional Intelligence"],
                Vec::new(),
            )),
            _ => None,
        }
    }
}

impl Default for MockAnalysisAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn sample(
    title: &str,
    description: &str,
    impact_level: &str,
    required: &[&str],
    learning_plan: Vec<LearningItem>,
) -> AnalysisResponse {
    AnalysisResponse {
        role_title: title.to_string(),
        description: description.to_string(),
        impact_level: impact_level.to_string(),
        required_skills_for_role: required.iter().map(|s| s.to_string()).collect(),
        user_skills: SAMPLE_USER_SKILLS.iter().map(|s| s.to_string()).collect(),
        learning_plan,
    }
}

fn plan_item(skill: &str, resources: &[(&str, &str, &str)]) -> LearningItem {
    LearningItem {
        skill_to_learn: skill.to_string(),
        suggested_resources: resources
            .iter()
            .map(|(title, kind, url)| Resource {
                title: title.to_string(),
                kind: kind.to_string(),
                url: url.to_string(),
            })
            .collect(),
    }
}

#[async_trait::async_trait]
impl AnalysisPort for MockAnalysisAdapter {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, DomainError> {
        info!(job_title = %request.job_title(), "[MOCK] Simulating role analysis");

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Self::lookup(request.job_title()).ok_or_else(|| {
            DomainError::Server(format!(
                "Role '{}' not found. Try one of our supported roles like 'Financial Analyst' or 'Marketing Manager'.",
                request.job_title()
            ))
        })
    }
}
