use std::env;

/// Placeholder key shipped for local development. Real deployments set
/// `OMDB_API_KEY` in the environment or a `.env` file.
pub const DEFAULT_API_KEY: &str = "f3e38d5";
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Runtime configuration for the catalog provider.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
}

impl AppConfig {
    /// Load configuration from the environment, falling back to the
    /// bundled defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_key = env::var("OMDB_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_KEY.to_string());
        let base_url = env::var("OMDB_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { api_key, base_url }
    }

    /// True when running on the bundled placeholder key, which may return
    /// limited or no results.
    pub fn is_default_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
