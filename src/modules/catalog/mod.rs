pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{CatalogProviderClient, CatalogService};
pub use domain::{Language, Movie, YearRange, YEAR_RANGES};
pub use infrastructure::cache::{ExpiringCache, DETAIL_TTL, SEARCH_TTL};
pub use infrastructure::fallback::StaticCatalog;
pub use infrastructure::omdb::{
    resolve_poster, MovieMapper, OmdbClient, OmdbMovie, OmdbSearchResponse, PlotLength,
    PLACEHOLDER_POSTER,
};
