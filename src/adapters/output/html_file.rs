//! Implements ResultsPort by writing a standalone HTML page.
//!
//! Every view rewrites the whole document, so a reader never sees a partial report.

use crate::adapters::output::html::{render_fragment, render_page};
use crate::domain::DomainError;
use crate::ports::{ResultsPort, ResultsView};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// HTML document sink. The page's `results-container` holds the current view.
pub struct HtmlFileResults {
    path: PathBuf,
}

impl HtmlFileResults {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write-replace: temp file, sync, then rename over the target.
    async fn write_atomic(&self, contents: &str) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Output(format!("create output dir: {}", e)))?;
        }

        let temp_path = self.path.with_extension("html.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Output(format!("create temp file: {}", e)))?;
        f.write_all(contents.as_bytes())
            .await
            .map_err(|e| DomainError::Output(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Output(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Output(format!("atomic rename failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ResultsPort for HtmlFileResults {
    async fn show(&self, view: ResultsView<'_>) -> Result<(), DomainError> {
        let generated_at = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
        let page = render_page(&render_fragment(view)?, &generated_at)?;
        self.write_atomic(&page).await?;

        if !matches!(view, ResultsView::Loading) {
            let abs_path = self
                .path
                .canonicalize()
                .unwrap_or_else(|_| self.path.clone());
            info!(path = %abs_path.display(), "results page written");
        }
        Ok(())
    }
}
