//! Movie discovery data layer.
//!
//! Mediates between the remote OMDb catalog, a local expiring cache, a
//! persisted favorites set and a bundled static catalog, normalizing
//! every source into one canonical [`Movie`] shape.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cinescope::{
//!     AppConfig, CatalogService, FavoritesService, FileStorage, OmdbClient, PreferencesService,
//! };
//!
//! # async fn run() -> cinescope::AppResult<()> {
//! cinescope::init_logger();
//!
//! let config = AppConfig::from_env();
//! let storage = Arc::new(FileStorage::open()?);
//!
//! let favorites = Arc::new(FavoritesService::new(storage.clone()));
//! let preferences = PreferencesService::new(storage.clone());
//! let catalog = CatalogService::new(
//!     Arc::new(OmdbClient::new(&config)),
//!     storage,
//!     favorites.clone(),
//! );
//!
//! let shelf = catalog.listings_by_language(&preferences.selected_language()).await;
//! println!("{} movies on the shelf", shelf.len());
//! # Ok(())
//! # }
//! ```

pub mod modules;
pub mod shared;

pub use modules::catalog::{
    CatalogProviderClient, CatalogService, Language, Movie, OmdbClient, StaticCatalog,
};
pub use modules::favorites::{FavoritesEvent, FavoritesService};
pub use modules::preferences::{PreferencesService, Theme};
pub use shared::config::AppConfig;
pub use shared::errors::{AppError, AppResult};
pub use shared::storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use shared::utils::init_logger;
