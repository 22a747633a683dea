use async_trait::async_trait;

use crate::modules::catalog::application::ports::CatalogProviderClient;
use crate::modules::catalog::infrastructure::http_client::RateLimitClient;
use crate::shared::config::AppConfig;
use crate::shared::errors::AppResult;

use super::models::{OmdbMovie, OmdbSearchResponse, PlotLength};

/// OMDb provider adapter.
pub struct OmdbClient {
    http_client: RateLimitClient,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: &AppConfig) -> Self {
        if config.is_default_key() {
            log::warn!(
                "OMDb: running on the bundled placeholder API key; set OMDB_API_KEY, search may return limited or no results"
            );
        }

        Self::with_client(RateLimitClient::for_omdb(), config)
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient, config: &AppConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }
}

#[async_trait]
impl CatalogProviderClient for OmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> AppResult<OmdbSearchResponse> {
        let url = format!(
            "{}/?apikey={}&s={}&page={}&type=movie",
            self.base_url,
            self.api_key,
            urlencoding::encode(query),
            page
        );

        log::info!("OMDb: searching for '{}' (page {})", query, page);

        let response: OmdbSearchResponse = self.http_client.get(&url).await?;

        log::info!(
            "OMDb: search for '{}' returned {} summaries",
            query,
            response.search.len()
        );
        Ok(response)
    }

    async fn get_movie(&self, imdb_id: &str, plot: PlotLength) -> AppResult<OmdbMovie> {
        let url = format!(
            "{}/?apikey={}&i={}&plot={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(imdb_id),
            plot.as_str()
        );

        log::info!("OMDb: getting movie by ID '{}'", imdb_id);

        let movie: OmdbMovie = self.http_client.get(&url).await?;

        if !movie.is_success() {
            log::info!(
                "OMDb: no movie for ID '{}': {}",
                imdb_id,
                movie.error.as_deref().unwrap_or("unknown reason")
            );
        }
        Ok(movie)
    }
}
