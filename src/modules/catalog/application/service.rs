use std::sync::Arc;

use futures::future::join_all;

use crate::modules::catalog::domain::{Language, Movie};
use crate::modules::catalog::infrastructure::cache::{ExpiringCache, DETAIL_TTL, SEARCH_TTL};
use crate::modules::catalog::infrastructure::fallback::StaticCatalog;
use crate::modules::catalog::infrastructure::omdb::models::{OmdbMovie, PlotLength};
use crate::modules::catalog::infrastructure::omdb::MovieMapper;
use crate::modules::favorites::FavoritesService;
use crate::shared::storage::KeyValueStorage;

use super::ports::CatalogProviderClient;

/// At most this many search summaries are enriched with detail lookups.
const ENRICHMENT_LIMIT: usize = 10;

/// Catalog client: mediates between the remote provider, the expiring
/// cache, the favorites store and the static fallback catalog.
///
/// Transport failures never escape this boundary: they degrade to an
/// empty sequence or an absent value and are logged for diagnostics.
/// A well-formed zero-match response takes the same shape, distinguished
/// only in the logs.
pub struct CatalogService {
    provider: Arc<dyn CatalogProviderClient>,
    cache: ExpiringCache,
    favorites: Arc<FavoritesService>,
    mapper: MovieMapper,
}

impl CatalogService {
    pub fn new(
        provider: Arc<dyn CatalogProviderClient>,
        storage: Arc<dyn KeyValueStorage>,
        favorites: Arc<FavoritesService>,
    ) -> Self {
        Self {
            provider,
            cache: ExpiringCache::new(storage),
            favorites,
            mapper: MovieMapper::new(),
        }
    }

    /// Search the remote catalog by title.
    ///
    /// Blank queries return immediately with no network interaction. Up
    /// to [`ENRICHMENT_LIMIT`] of the returned summaries are enriched
    /// with one detail call each, all running as concurrently-suspended
    /// tasks joined before the batch result is produced; a failed detail
    /// call falls back to the summary record instead of dropping the
    /// item.
    pub async fn search(&self, query: &str, page: u32) -> Vec<Movie> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let cache_key = Self::search_cache_key(trimmed, page);
        if let Some(cached) = self.cache.get::<Vec<Movie>>(&cache_key) {
            log::debug!("Catalog: returning cached results for '{}'", trimmed);
            return cached;
        }

        let response = match self.provider.search_movies(trimmed, page).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Catalog: search for '{}' failed: {}", trimmed, e);
                return Vec::new();
            }
        };

        if !response.is_success() || response.search.is_empty() {
            log::info!(
                "Catalog: no results for '{}': {}",
                trimmed,
                response.error.as_deref().unwrap_or("empty result set")
            );
            return Vec::new();
        }

        let summaries: Vec<OmdbMovie> = response
            .search
            .into_iter()
            .take(ENRICHMENT_LIMIT)
            .collect();

        let enriched = join_all(summaries.into_iter().map(|summary| self.enrich(summary))).await;

        let movies = self
            .mapper
            .map_to_movie_list(enriched, |id| self.favorites.is_favorite(id));

        self.cache.set(&cache_key, &movies, SEARCH_TTL);
        log::info!("Catalog: cached {} results for '{}'", movies.len(), trimmed);
        movies
    }

    /// One summary's enrichment task: fetch the detail record, fall back
    /// to the summary on any failure so a single bad lookup cannot abort
    /// the batch.
    async fn enrich(&self, summary: OmdbMovie) -> OmdbMovie {
        let imdb_id = match summary.imdb_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return summary,
        };

        match self.provider.get_movie(&imdb_id, PlotLength::Short).await {
            Ok(detail) if detail.is_success() => detail,
            Ok(_) => {
                log::warn!("Catalog: detail lookup for {} reported failure", imdb_id);
                summary
            }
            Err(e) => {
                log::warn!("Catalog: detail lookup for {} failed: {}", imdb_id, e);
                summary
            }
        }
    }

    /// Look up one movie by identity.
    ///
    /// Static-shaped ids resolve from the bundled catalog with no
    /// network call; provider ids issue a single detail request. Absent
    /// is the answer for every failure mode.
    pub async fn get_by_id(&self, id: &str) -> Option<Movie> {
        let cache_key = format!("movie_{}", id);
        if let Some(cached) = self.cache.get::<Movie>(&cache_key) {
            return Some(cached);
        }

        if StaticCatalog::is_static_id(id) {
            if let Some(raw) = StaticCatalog::find_by_id(id) {
                let movie = self
                    .mapper
                    .map_to_movie(raw, |id| self.favorites.is_favorite(id));
                self.cache.set(&cache_key, &movie, DETAIL_TTL);
                return Some(movie);
            }
        }

        let detail = match self.provider.get_movie(id, PlotLength::Full).await {
            Ok(detail) => detail,
            Err(e) => {
                log::error!("Catalog: lookup for '{}' failed: {}", id, e);
                return None;
            }
        };

        if !detail.is_success() {
            log::info!(
                "Catalog: no movie for '{}': {}",
                id,
                detail.error.as_deref().unwrap_or("unknown reason")
            );
            return None;
        }

        let movie = self
            .mapper
            .map_to_movie(detail, |id| self.favorites.is_favorite(id));
        self.cache.set(&cache_key, &movie, DETAIL_TTL);
        Some(movie)
    }

    /// Trending shelf for a language.
    ///
    /// Always resolves from the static catalog, never the network,
    /// trading freshness for determinism and offline availability on the
    /// home surfaces. Unmodeled languages fall back to the default
    /// shelf.
    pub async fn listings_by_language(&self, language: &str) -> Vec<Movie> {
        let cache_key = format!("trending_{}", language);
        if let Some(cached) = self.cache.get::<Vec<Movie>>(&cache_key) {
            return cached;
        }

        let shelf = Language::parse(language).unwrap_or_default();
        let movies = self.mapper.map_to_movie_list(
            StaticCatalog::movies_for(shelf),
            |id| self.favorites.is_favorite(id),
        );

        self.cache.set(&cache_key, &movies, SEARCH_TTL);
        movies
    }

    /// Recent-releases shelf. Same source and lifetime as the trending
    /// shelf.
    pub async fn recent_by_language(&self, language: &str) -> Vec<Movie> {
        self.listings_by_language(language).await
    }

    /// Cache key for a search: lower-cased, whitespace collapsed to
    /// underscores, page-qualified.
    fn search_cache_key(query: &str, page: u32) -> String {
        let normalized = query
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("search_{}_{}", normalized, page)
    }
}
