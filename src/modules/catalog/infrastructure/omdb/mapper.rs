use uuid::Uuid;

use crate::modules::catalog::domain::Movie;

use super::models::OmdbMovie;

/// Poster returned whenever the raw record carries no usable image.
pub const PLACEHOLDER_POSTER: &str = "/Images/placeholder.jpg";

/// Local asset directory bare file names are resolved against.
pub const LOCAL_IMAGE_DIR: &str = "/Images/";

/// Resolve a raw poster value into a path the UI can always load.
///
/// Absent or "N/A" input maps to the placeholder; scheme-prefixed URLs
/// and absolute local paths pass through unchanged; bare file names are
/// anchored in the local asset directory.
pub fn resolve_poster(raw: &str) -> String {
    if raw.is_empty() || raw == "N/A" {
        return PLACEHOLDER_POSTER.to_string();
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }

    if raw.starts_with('/') {
        return raw.to_string();
    }

    format!("{}{}", LOCAL_IMAGE_DIR, raw)
}

/// Maps raw provider/static records to the canonical [`Movie`] shape.
///
/// Total over any partially-populated input: missing fields coalesce to
/// the documented defaults, identity is synthesized when absent, and the
/// favorite flag is annotated through the supplied membership check.
#[derive(Debug, Clone, Default)]
pub struct MovieMapper;

impl MovieMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_to_movie<F>(&self, source: OmdbMovie, is_favorite: F) -> Movie
    where
        F: Fn(&str) -> bool,
    {
        let provider_id = source.imdb_id.clone().unwrap_or_default();

        let id = source
            .imdb_id
            .filter(|v| !v.is_empty())
            .or_else(|| source.id.filter(|v| !v.is_empty()))
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

        let favorite = is_favorite(&id);

        Movie {
            provider_id,
            title: source.title.unwrap_or_else(|| "Unknown Movie".to_string()),
            year: source.year.unwrap_or_else(|| "N/A".to_string()),
            media_type: source.media_type.unwrap_or_else(|| "movie".to_string()),
            poster_url: resolve_poster(source.poster.as_deref().unwrap_or_default()),
            language: source.language.unwrap_or_else(|| "English".to_string()),
            // Detail lookups return the IMDb score; older records may only
            // carry a generic rating field.
            rating: source
                .imdb_rating
                .or(source.rating)
                .unwrap_or_else(|| "N/A".to_string()),
            genre: source.genre.unwrap_or_else(|| "N/A".to_string()),
            overview: source.plot.or(source.overview).unwrap_or_default(),
            director: source.director.unwrap_or_default(),
            actors: source.actors.unwrap_or_default(),
            release_date: source.released.unwrap_or_default(),
            runtime: source.runtime.unwrap_or_else(|| "N/A".to_string()),
            is_favorite: favorite,
            id,
        }
    }

    pub fn map_to_movie_list<F>(&self, sources: Vec<OmdbMovie>, is_favorite: F) -> Vec<Movie>
    where
        F: Fn(&str) -> bool,
    {
        sources
            .into_iter()
            .map(|source| self.map_to_movie(source, &is_favorite))
            .collect()
    }
}
