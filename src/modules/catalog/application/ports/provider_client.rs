use async_trait::async_trait;

use crate::modules::catalog::infrastructure::omdb::models::{
    OmdbMovie, OmdbSearchResponse, PlotLength,
};
use crate::shared::errors::AppResult;

/// Port (interface) for the remote movie catalog.
///
/// The infrastructure layer implements this against the real provider;
/// tests supply scripted fakes. Errors here are transport-level only:
/// a well-formed "no matches" response is a successful call whose
/// payload reports `Response: "False"`.
#[async_trait]
pub trait CatalogProviderClient: Send + Sync {
    /// Search movies by title. One page of summary records.
    async fn search_movies(&self, query: &str, page: u32) -> AppResult<OmdbSearchResponse>;

    /// Fetch one movie's detail record by provider identifier.
    async fn get_movie(&self, imdb_id: &str, plot: PlotLength) -> AppResult<OmdbMovie>;
}
