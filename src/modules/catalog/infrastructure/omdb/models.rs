// OMDb API models
// Response shapes per https://www.omdbapi.com/; both endpoints report
// success through a top-level `Response` flag carried as the strings
// "True"/"False".

use serde::{Deserialize, Serialize};

/// Plot length requested on detail lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotLength {
    Short,
    Full,
}

impl PlotLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotLength::Short => "short",
            PlotLength::Full => "full",
        }
    }
}

/// One raw movie record as the provider (or the static catalog) shapes it.
///
/// This single struct covers search summaries, detail responses and the
/// pre-shaped static records; every field is optional and the mapper is
/// responsible for coalescing. A detail response additionally carries the
/// `Response`/`Error` envelope fields inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OmdbMovie {
    #[serde(rename = "imdbID", default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    /// Identity used by static catalog records (`<Language>_<Year>_<Index>`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Year", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "Poster", default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(rename = "Language", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "imdbRating", default, skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Rating", default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(rename = "Genre", default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(rename = "Plot", default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    /// Overview field used by static catalog records instead of `Plot`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(rename = "Director", default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(rename = "Actors", default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,
    #[serde(rename = "Released", default, skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,
    #[serde(rename = "Runtime", default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(rename = "Response", default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OmdbMovie {
    /// Whether a detail response carries a usable record. Records without
    /// an envelope (search summaries, static records) count as success.
    pub fn is_success(&self) -> bool {
        match self.response.as_deref() {
            Some(flag) => flag == "True",
            None => true,
        }
    }
}

/// Search endpoint envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbMovie>,
    #[serde(rename = "totalResults", default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<String>,
    #[serde(rename = "Response", default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    pub fn is_success(&self) -> bool {
        self.response.as_deref() == Some("True")
    }
}
