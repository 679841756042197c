//! Application configuration. API origin, output path, adapter switches.

use serde::Deserialize;

/// API origin used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// HTML results page written when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "./results.html";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Analysis API origin; `/api/analyze` is appended. Read from CAREER_NAV_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Where the HTML results page is written. Read from CAREER_NAV_OUTPUT_PATH.
    #[serde(default)]
    pub output_path: Option<String>,

    /// Use the built-in sample data instead of the API. Read from CAREER_NAV_MOCK.
    #[serde(default)]
    pub mock: Option<bool>,

    /// Print the welcome banner before the form. Read from CAREER_NAV_BANNER.
    #[serde(default)]
    pub banner: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CAREER_NAV").try_parsing(true));
        if let Ok(path) = std::env::var("CAREER_NAV_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the API origin. Defaults to DEFAULT_API_URL.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns the HTML output path. Defaults to DEFAULT_OUTPUT_PATH.
    pub fn output_path_or_default(&self) -> String {
        self.output_path
            .clone()
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string())
    }

    /// Returns true if the mock adapter should replace the HTTP client.
    pub fn is_mock(&self) -> bool {
        self.mock.unwrap_or(false)
    }

    /// Returns true unless the banner was switched off.
    pub fn show_banner(&self) -> bool {
        self.banner.unwrap_or(true)
    }
}
