//! Terminal results container. Spinner while loading, coloured plain text otherwise.

use crate::adapters::output::html::{ALL_SKILLS_MESSAGE, LOADING_TEXT};
use crate::domain::{AnalysisResponse, DomainError};
use crate::ports::{ResultsPort, ResultsView};
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{Write, stdout};
use std::sync::Mutex;
use std::time::Duration;

const REPORT_COLOR: Color = Color::Rgb {
    r: 0x0f,
    g: 0xf0,
    b: 0xfc,
};
const ERROR_COLOR: Color = Color::Rgb {
    r: 0xff,
    g: 0x4d,
    b: 0x4d,
};

/// Plain-text rendering of a report. Same sections and order as the HTML view.
pub fn render_text(response: &AnalysisResponse) -> String {
    let mut out = String::new();

    out.push_str(&format!("== {} ==\n", response.role_title));
    out.push_str(&format!("{}\n", response.description));
    out.push_str(&format!("Impact: [{}]\n\n", response.impact_level));

    out.push_str("-- Skill Analysis --\n");
    out.push_str(&format!(
        "Comparing your skills to those required for a {}.\n",
        response.role_title
    ));
    out.push_str("Required Skills:\n");
    for skill in response.distinct_required_skills() {
        out.push_str(&format!("  - {}\n", skill));
    }
    out.push('\n');

    out.push_str("-- Personalized Learning Plan --\n");
    if response.learning_plan.is_empty() {
        out.push_str(ALL_SKILLS_MESSAGE);
        out.push('\n');
    } else {
        out.push_str("To bridge your skill gap, we recommend focusing on the following areas:\n");
        for item in &response.learning_plan {
            out.push_str(&format!("\nLearn: {}\n", item.skill_to_learn));
            for resource in &item.suggested_resources {
                out.push_str(&format!(
                    "  * {} ({})\n    {}\n",
                    resource.title, resource.kind, resource.url
                ));
            }
        }
    }

    out
}

/// Terminal sink. Holds the active spinner between the loading view and the next view.
#[derive(Default)]
pub struct TerminalResults {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalResults {
    pub fn new() -> Self {
        Self::default()
    }

    fn start_spinner(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(LOADING_TEXT);
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Some(previous) = self.replace_spinner(Some(pb)) {
            previous.finish_and_clear();
        }
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.replace_spinner(None) {
            pb.finish_and_clear();
        }
    }

    fn replace_spinner(&self, next: Option<ProgressBar>) -> Option<ProgressBar> {
        let mut slot = match self.spinner.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *slot, next)
    }

    fn print_colored(color: Color, text: &str) -> Result<(), DomainError> {
        let mut out = stdout();
        out.execute(SetForegroundColor(color))
            .and_then(|o| o.execute(Print(text)))
            .and_then(|o| o.execute(ResetColor))
            .map_err(|e| DomainError::Output(e.to_string()))?;
        out.flush().map_err(|e| DomainError::Output(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ResultsPort for TerminalResults {
    async fn show(&self, view: ResultsView<'_>) -> Result<(), DomainError> {
        match view {
            ResultsView::Loading => {
                self.start_spinner();
                Ok(())
            }
            ResultsView::Report(response) => {
                self.clear_spinner();
                Self::print_colored(REPORT_COLOR, &format!("\n{}\n", render_text(response)))
            }
            ResultsView::Error(message) => {
                self.clear_spinner();
                Self::print_colored(ERROR_COLOR, &format!("\nError: {}\n\n", message))
            }
        }
    }
}
