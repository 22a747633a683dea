use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use cinescope::modules::catalog::{
    CatalogProviderClient, CatalogService, OmdbMovie, OmdbSearchResponse, PlotLength,
};
use cinescope::shared::errors::{AppError, AppResult};
use cinescope::{FavoritesService, MemoryStorage};

/// Scripted provider: serves a fixed summary list and per-id detail
/// records, failing the ids it is told to fail, while counting calls.
struct FakeProvider {
    summaries: Vec<OmdbMovie>,
    failing_details: Vec<String>,
    missing_details: Vec<String>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl FakeProvider {
    fn new(summaries: Vec<OmdbMovie>) -> Self {
        Self {
            summaries,
            failing_details: Vec::new(),
            missing_details: Vec::new(),
            search_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }

    fn with_failing_details(mut self, ids: &[&str]) -> Self {
        self.failing_details = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    fn with_missing_details(mut self, ids: &[&str]) -> Self {
        self.missing_details = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogProviderClient for FakeProvider {
    async fn search_movies(&self, _query: &str, _page: u32) -> AppResult<OmdbSearchResponse> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        if self.summaries.is_empty() {
            return Ok(OmdbSearchResponse {
                response: Some("False".to_string()),
                error: Some("Movie not found!".to_string()),
                ..Default::default()
            });
        }

        Ok(OmdbSearchResponse {
            search: self.summaries.clone(),
            total_results: Some(self.summaries.len().to_string()),
            response: Some("True".to_string()),
            error: None,
        })
    }

    async fn get_movie(&self, imdb_id: &str, _plot: PlotLength) -> AppResult<OmdbMovie> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing_details.iter().any(|id| id == imdb_id) {
            return Err(AppError::ExternalServiceError("connection reset".to_string()));
        }

        if self.missing_details.iter().any(|id| id == imdb_id) {
            return Ok(OmdbMovie {
                response: Some("False".to_string()),
                error: Some("Incorrect IMDb ID.".to_string()),
                ..Default::default()
            });
        }

        Ok(OmdbMovie {
            imdb_id: Some(imdb_id.to_string()),
            title: Some(format!("Detail for {}", imdb_id)),
            plot: Some("Enriched plot.".to_string()),
            imdb_rating: Some("7.5".to_string()),
            response: Some("True".to_string()),
            ..Default::default()
        })
    }
}

fn summary(imdb_id: &str, title: &str) -> OmdbMovie {
    OmdbMovie {
        imdb_id: Some(imdb_id.to_string()),
        title: Some(title.to_string()),
        year: Some("2005".to_string()),
        media_type: Some("movie".to_string()),
        poster: Some("N/A".to_string()),
        ..Default::default()
    }
}

fn service_over(provider: Arc<FakeProvider>) -> CatalogService {
    let storage = Arc::new(MemoryStorage::new());
    let favorites = Arc::new(FavoritesService::new(storage.clone()));
    CatalogService::new(provider, storage, favorites)
}

#[tokio::test]
async fn test_blank_search_makes_no_network_call() {
    let provider = Arc::new(FakeProvider::new(vec![summary("tt1", "A")]));
    let catalog = service_over(provider.clone());

    assert!(catalog.search("", 1).await.is_empty());
    assert!(catalog.search("   ", 1).await.is_empty());
    assert_eq!(provider.search_calls(), 0);
    assert_eq!(provider.detail_calls(), 0);
}

#[tokio::test]
async fn test_search_enriches_at_most_ten_and_survives_partial_failures() {
    let summaries: Vec<OmdbMovie> = (1..=15)
        .map(|n| summary(&format!("tt{:07}", n), &format!("Movie {}", n)))
        .collect();
    let provider = Arc::new(
        FakeProvider::new(summaries).with_failing_details(&["tt0000003", "tt0000007"]),
    );
    let catalog = service_over(provider.clone());

    let movies = catalog.search("batman", 1).await;

    assert_eq!(movies.len(), 10);
    assert_eq!(provider.detail_calls(), 10);

    // Enriched records carry the detail plot; the two failed lookups
    // fall back to their summary-derived shape instead of dropping out.
    assert_eq!(movies[0].overview, "Enriched plot.");
    assert_eq!(movies[2].id, "tt0000003");
    assert_eq!(movies[2].title, "Movie 3");
    assert!(movies[2].overview.is_empty());
    assert_eq!(movies[6].id, "tt0000007");
    assert!(movies[6].overview.is_empty());
}

#[tokio::test]
async fn test_search_results_are_cached() {
    let provider = Arc::new(FakeProvider::new(vec![summary("tt0372784", "Batman Begins")]));
    let catalog = service_over(provider.clone());

    let first = catalog.search("Batman Begins", 1).await;
    let second = catalog.search("  batman   BEGINS ", 1).await;

    assert_eq!(first, second);
    assert_eq!(provider.search_calls(), 1);
}

#[tokio::test]
async fn test_search_zero_matches_is_empty_not_error() {
    let provider = Arc::new(FakeProvider::new(Vec::new()));
    let catalog = service_over(provider.clone());

    assert!(catalog.search("gibberish", 1).await.is_empty());
    assert_eq!(provider.search_calls(), 1);
    assert_eq!(provider.detail_calls(), 0);
}

#[tokio::test]
async fn test_get_by_id_static_shape_resolves_offline() {
    let provider = Arc::new(FakeProvider::new(Vec::new()));
    let catalog = service_over(provider.clone());

    let movie = catalog.get_by_id("Hindi_2009_1").await.unwrap();
    assert_eq!(movie.title, "3 Idiots");
    assert_eq!(movie.poster_url, "/Images/3_idiots.jpg");
    assert_eq!(provider.search_calls(), 0);
    assert_eq!(provider.detail_calls(), 0);
}

#[tokio::test]
async fn test_get_by_id_provider_shape_issues_one_detail_call() {
    let provider = Arc::new(FakeProvider::new(Vec::new()));
    let catalog = service_over(provider.clone());

    let movie = catalog.get_by_id("tt1234567").await.unwrap();
    assert_eq!(movie.id, "tt1234567");
    assert_eq!(provider.detail_calls(), 1);

    // The detail is cached at the long TTL: a second lookup stays local.
    catalog.get_by_id("tt1234567").await.unwrap();
    assert_eq!(provider.detail_calls(), 1);
}

#[tokio::test]
async fn test_get_by_id_not_found_is_absent() {
    let provider = Arc::new(
        FakeProvider::new(Vec::new())
            .with_failing_details(&["tt0000500"])
            .with_missing_details(&["tt0000404"]),
    );
    let catalog = service_over(provider.clone());

    // Transport failure and well-formed not-found both resolve to absent.
    assert!(catalog.get_by_id("tt0000500").await.is_none());
    assert!(catalog.get_by_id("tt0000404").await.is_none());
}

#[tokio::test]
async fn test_listings_never_touch_the_network() {
    let provider = Arc::new(FakeProvider::new(Vec::new()));
    let catalog = service_over(provider.clone());

    let shelf = catalog.listings_by_language("Tamil").await;
    assert!(!shelf.is_empty());
    assert!(shelf.iter().all(|movie| movie.language == "Tamil"));
    assert_eq!(provider.search_calls(), 0);
    assert_eq!(provider.detail_calls(), 0);
}

#[tokio::test]
async fn test_listings_fall_back_to_default_language() {
    let provider = Arc::new(FakeProvider::new(Vec::new()));
    let catalog = service_over(provider.clone());

    let fallback = catalog.listings_by_language("French").await;
    let english = catalog.listings_by_language("English").await;

    assert!(!fallback.is_empty());
    assert_eq!(
        fallback.iter().map(|m| &m.id).collect::<Vec<_>>(),
        english.iter().map(|m| &m.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_recent_matches_trending_shelf() {
    let provider = Arc::new(FakeProvider::new(Vec::new()));
    let catalog = service_over(provider.clone());

    let trending = catalog.listings_by_language("Malayalam").await;
    let recent = catalog.recent_by_language("Malayalam").await;
    assert_eq!(trending, recent);
}

#[tokio::test]
async fn test_search_annotates_favorites() {
    let storage = Arc::new(MemoryStorage::new());
    let favorites = Arc::new(FavoritesService::new(storage.clone()));
    let provider = Arc::new(FakeProvider::new(vec![
        summary("tt0372784", "Batman Begins"),
        summary("tt0468569", "The Dark Knight"),
    ]));
    let catalog = CatalogService::new(provider, storage, favorites.clone());

    let seed = catalog.get_by_id("tt0468569").await.unwrap();
    assert!(favorites.add(seed));

    let movies = catalog.search("batman", 1).await;
    assert!(!movies[0].is_favorite);
    assert!(movies[1].is_favorite);
}
