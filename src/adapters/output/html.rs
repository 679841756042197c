//! HTML rendering of results views. No I/O.
//!
//! Askama templates for the fragment that goes inside the results container, and a
//! full page around it for file output. Server strings are auto-escaped.

use crate::domain::{AnalysisResponse, DomainError, LearningItem};
use crate::ports::ResultsView;
use askama::Template;

pub const LOADING_TEXT: &str = "Analyzing your role...";
pub const ALL_SKILLS_MESSAGE: &str =
    "Congratulations! Based on our analysis, you possess all the key skills for this role.";

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(source = "<div class=\"loading\">{{ text }}</div>", ext = "html")]
struct LoadingTemplate<'a> {
    text: &'a str,
}

#[derive(Template)]
#[template(source = "<div class=\"error\">{{ message }}</div>", ext = "html")]
struct ErrorTemplate<'a> {
    message: &'a str,
}

/// Overview, skill analysis and learning plan sections, in that order.
/// Possessed and missing skills are listed alike; the server owns the gap analysis.
#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    role_title: &'a str,
    description: &'a str,
    impact_level: &'a str,
    badge_class: String,
    skills: Vec<&'a str>,
    learning_plan: &'a [LearningItem],
    all_skills_message: &'a str,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    fragment: &'a str,
    generated_at: &'a str,
}

fn render_template(template: &impl Template) -> Result<String, DomainError> {
    template
        .render()
        .map_err(|e| DomainError::Output(format!("template error: {}", e)))
}

/// Render the contents of the results container for `view`.
pub fn render_fragment(view: ResultsView<'_>) -> Result<String, DomainError> {
    match view {
        ResultsView::Loading => render_loading(),
        ResultsView::Report(response) => render_report(response),
        ResultsView::Error(message) => render_error(message),
    }
}

pub fn render_loading() -> Result<String, DomainError> {
    render_template(&LoadingTemplate { text: LOADING_TEXT })
}

pub fn render_error(message: &str) -> Result<String, DomainError> {
    render_template(&ErrorTemplate { message })
}

pub fn render_report(response: &AnalysisResponse) -> Result<String, DomainError> {
    render_template(&ReportTemplate {
        role_title: &response.role_title,
        description: &response.description,
        impact_level: &response.impact_level,
        badge_class: response.impact_badge_class(),
        skills: response.distinct_required_skills(),
        learning_plan: &response.learning_plan,
        all_skills_message: ALL_SKILLS_MESSAGE,
    })
}

/// Wrap a results fragment in a standalone page carrying the form and container ids.
pub fn render_page(fragment: &str, generated_at: &str) -> Result<String, DomainError> {
    render_template(&PageTemplate {
        fragment,
        generated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resource;

    fn response(skills: &[&str], learning_plan: Vec<LearningItem>) -> AnalysisResponse {
        AnalysisResponse {
            role_title: "Software Developer".to_string(),
            description: "Writes and maintains software.".to_string(),
            impact_level: "High Transformation".to_string(),
            required_skills_for_role: skills.iter().map(|s| s.to_string()).collect(),
            user_skills: vec!["Programming".to_string()],
            learning_plan,
        }
    }

    fn resource(title: &str, url: &str) -> Resource {
        Resource {
            title: title.to_string(),
            kind: "Course".to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_overview_badge_uses_first_token() {
        let html = render_report(&response(&[], Vec::new())).unwrap();
        assert!(html.contains("<h2>Software Developer</h2>"));
        assert!(html.contains(
            "<span class=\"impact-level high\">High Transformation</span>"
        ));
    }

    #[test]
    fn test_empty_plan_shows_congratulations() {
        let html = render_report(&response(&["A"], Vec::new())).unwrap();
        assert!(html.contains(ALL_SKILLS_MESSAGE));
        assert!(!html.contains("class=\"resource\""));
    }

    #[test]
    fn test_two_resources_render_two_blocks() {
        let plan = vec![LearningItem {
            skill_to_learn: "Cloud Computing".to_string(),
            suggested_resources: vec![
                resource("AWS Basics", "https://example.com/aws"),
                resource("GCP Intro", "https://example.com/gcp"),
            ],
        }];
        let html = render_report(&response(&["Cloud Computing"], plan)).unwrap();

        assert_eq!(html.matches("<div class=\"resource\">").count(), 2);
        assert!(html.contains("<h3>Learn: Cloud Computing</h3>"));
        assert!(html.contains("<h4>AWS Basics (Course)</h4>"));
        assert!(html.contains(
            "<a href=\"https://example.com/aws\" target=\"_blank\" rel=\"noopener noreferrer\">"
        ));
        assert!(html.contains("<a href=\"https://example.com/gcp\""));
        assert!(!html.contains(ALL_SKILLS_MESSAGE));
    }

    #[test]
    fn test_duplicate_skills_listed_once() {
        let html = render_report(&response(&["A", "A", "B"], Vec::new())).unwrap();
        assert_eq!(html.matches("<li>").count(), 2);
        let a = html.find("<li>A</li>").unwrap();
        let b = html.find("<li>B</li>").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_error_view_is_escaped_message() {
        assert_eq!(
            render_fragment(ResultsView::Error("Unknown role")).unwrap(),
            "<div class=\"error\">Unknown role</div>"
        );
        assert_eq!(
            render_error("<script>").unwrap(),
            "<div class=\"error\">&lt;script&gt;</div>"
        );
    }

    #[test]
    fn test_page_carries_form_and_container() {
        let page = render_page(&render_loading().unwrap(), "2024-01-01 10:00 UTC").unwrap();
        assert!(page.contains("id=\"role-form\""));
        assert!(page.contains("id=\"job-title-input\""));
        assert!(page.contains("Generated 2024-01-01 10:00 UTC"));
        assert!(page.contains(
            "<div id=\"results-container\">\n<div class=\"loading\">Analyzing your role...</div>"
        ));
    }

    #[test]
    fn test_report_escapes_server_strings() {
        let mut report = response(&["<b>SQL</b>"], Vec::new());
        report.role_title = "R&D Lead".to_string();
        let html = render_report(&report).unwrap();
        assert!(html.contains("<h2>R&amp;D Lead</h2>"));
        assert!(html.contains("<li>&lt;b&gt;SQL&lt;/b&gt;</li>"));
        assert!(!html.contains("<b>"));
    }
}
