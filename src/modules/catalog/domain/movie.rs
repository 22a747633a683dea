use serde::{Deserialize, Serialize};

fn default_media_type() -> String {
    "movie".to_string()
}

fn default_language() -> String {
    "English".to_string()
}

fn default_not_available() -> String {
    "N/A".to_string()
}

/// Canonical movie record, the unit of exchange throughout the system.
///
/// Every field is already coalesced to a usable value by the mapper;
/// consumers never see raw provider sentinels. Serialized field names
/// match the persisted favorites/cache documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Stable identity: provider id, or a synthesized opaque id when the
    /// provider record carried none. Never empty.
    pub id: String,
    #[serde(rename = "imdbID", default)]
    pub provider_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default = "default_not_available")]
    pub year: String,
    #[serde(rename = "Type", default = "default_media_type")]
    pub media_type: String,
    /// Always a resolvable path: absolute URL, absolute local path, or
    /// the bundled placeholder. Never empty or "N/A".
    #[serde(rename = "Poster")]
    pub poster_url: String,
    #[serde(rename = "Language", default = "default_language")]
    pub language: String,
    #[serde(rename = "Rating", default = "default_not_available")]
    pub rating: String,
    #[serde(rename = "Genre", default = "default_not_available")]
    pub genre: String,
    #[serde(default)]
    pub overview: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Released", default)]
    pub release_date: String,
    #[serde(rename = "Runtime", default = "default_not_available")]
    pub runtime: String,
    /// Derived at normalization time from the favorites store, never
    /// persisted as authoritative state.
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let movie = Movie {
            id: "tt1375666".to_string(),
            provider_id: "tt1375666".to_string(),
            title: "Inception".to_string(),
            year: "2010".to_string(),
            media_type: "movie".to_string(),
            poster_url: "https://example.com/p.jpg".to_string(),
            language: "English".to_string(),
            rating: "8.8".to_string(),
            genre: "Sci-Fi".to_string(),
            overview: "A thief enters dreams.".to_string(),
            director: "Christopher Nolan".to_string(),
            actors: "Leonardo DiCaprio".to_string(),
            release_date: "16 Jul 2010".to_string(),
            runtime: "148 min".to_string(),
            is_favorite: false,
        };

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["imdbID"], "tt1375666");
        assert_eq!(json["Title"], "Inception");
        assert_eq!(json["isFavorite"], false);
        assert_eq!(json["Poster"], "https://example.com/p.jpg");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{"id": "abc123", "Title": "Bare", "Poster": "/Images/placeholder.jpg"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.year, "N/A");
        assert_eq!(movie.media_type, "movie");
        assert_eq!(movie.language, "English");
        assert_eq!(movie.rating, "N/A");
        assert!(!movie.is_favorite);
        assert!(movie.director.is_empty());
    }
}
