//! Wiring & DI. Entry point: bootstrap adapters, inject into the client, run the form.
//! No business logic here; submissions are handled by RoleAnalysisClient.

use career_navigator::adapters::api::{HttpAnalysisAdapter, MockAnalysisAdapter, analyze_endpoint};
use career_navigator::adapters::output::{HtmlFileResults, TeeResults, TerminalResults};
use career_navigator::adapters::ui::tui::TuiInputPort;
use career_navigator::ports::{AnalysisPort, InputPort, ResultsPort};
use career_navigator::shared::config::AppConfig;
use career_navigator::usecases::{RoleAnalysisClient, SubmitOutcome};
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "career-navigator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyze how AI affects a role and get a learning plan for the skill gap", long_about = None)]
struct Cli {
    /// Analyze this job title once and exit (otherwise an interactive prompt is shown)
    #[arg(short, long)]
    job_title: Option<String>,

    /// Analysis API origin (default: http://localhost:5000)
    #[arg(long, env = "CAREER_NAV_API_URL")]
    api_url: Option<String>,

    /// Where to write the HTML results page (default: ./results.html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use built-in sample data instead of calling the API
    #[arg(long)]
    mock: bool,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    let cli = Cli::parse();
    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration; using defaults");
        AppConfig::default()
    });

    // --- Analysis endpoint ---
    let mock = cli.mock || cfg.is_mock();
    let api_url = cli.api_url.clone().unwrap_or_else(|| cfg.api_url_or_default());
    let endpoint = analyze_endpoint(&api_url);
    let analysis: Arc<dyn AnalysisPort> = if mock {
        warn!("mock mode: reports come from built-in sample data");
        Arc::new(MockAnalysisAdapter::new())
    } else {
        info!(endpoint = %endpoint, "analysis API");
        Arc::new(HttpAnalysisAdapter::new(&api_url))
    };

    // --- Results container: HTML page + terminal ---
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(cfg.output_path_or_default()));
    info!(path = %output_path.display(), "results page");
    let results: Arc<dyn ResultsPort> = Arc::new(TeeResults::new(vec![
        Arc::new(HtmlFileResults::new(&output_path)) as Arc<dyn ResultsPort>,
        Arc::new(TerminalResults::new()) as Arc<dyn ResultsPort>,
    ]));

    let client = Arc::new(RoleAnalysisClient::new(analysis, results));

    // --- One-shot submission ---
    if let Some(job_title) = cli.job_title.as_deref() {
        return match client
            .submit(job_title)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?
        {
            SubmitOutcome::Ignored => anyhow::bail!("job title is empty"),
            SubmitOutcome::Failed(message) => anyhow::bail!("analysis failed: {}", message),
            SubmitOutcome::Rendered(_) => Ok(()),
        };
    }

    // --- Interactive form ---
    if !cli.no_banner && cfg.show_banner() {
        career_navigator::adapters::ui::init_ui(&endpoint, mock);
    }
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(client));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
