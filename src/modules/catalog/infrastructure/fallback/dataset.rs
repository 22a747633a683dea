//! Static catalog fallback
//!
//! Bundled dataset backing the listing surfaces and offline id
//! resolution. Records are pre-shaped close to the canonical form and
//! still pass through the mapper so favorite annotation stays live.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::error;

use crate::modules::catalog::domain::Language;
use crate::modules::catalog::infrastructure::omdb::models::OmdbMovie;

const RAW_DATASET: &str = include_str!("static_catalog.json");

static DATASET: OnceLock<HashMap<String, Vec<OmdbMovie>>> = OnceLock::new();

/// Read-only mapping from language to its shelf of movies.
pub struct StaticCatalog;

impl StaticCatalog {
    fn dataset() -> &'static HashMap<String, Vec<OmdbMovie>> {
        DATASET.get_or_init(|| match serde_json::from_str(RAW_DATASET) {
            Ok(dataset) => dataset,
            Err(e) => {
                error!("bundled static catalog is unreadable: {}", e);
                HashMap::new()
            }
        })
    }

    /// Movies shelved under `language`. Empty only if the bundled
    /// dataset itself failed to load.
    pub fn movies_for(language: Language) -> Vec<OmdbMovie> {
        Self::dataset()
            .get(language.as_str())
            .cloned()
            .unwrap_or_default()
    }

    /// Whether `id` has the static catalog identity shape: a composite
    /// `<Language>_<Year>_<Index>` key whose first segment is a modeled
    /// language, as opposed to the provider's native `tt...` ids.
    pub fn is_static_id(id: &str) -> bool {
        if id.starts_with("tt") {
            return false;
        }

        let mut segments = id.split('_');
        let language = match segments.next() {
            Some(first) => first,
            None => return false,
        };

        segments.count() >= 2 && Language::parse(language).is_some()
    }

    /// Resolve a static-shaped id against the bundled dataset.
    pub fn find_by_id(id: &str) -> Option<OmdbMovie> {
        let language = Language::parse(id.split('_').next()?)?;

        Self::movies_for(language)
            .into_iter()
            .find(|movie| movie.id.as_deref() == Some(id))
    }
}
