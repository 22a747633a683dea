use cinescope::modules::catalog::{
    resolve_poster, MovieMapper, OmdbMovie, PLACEHOLDER_POSTER,
};

fn not_favorite(_: &str) -> bool {
    false
}

#[test]
fn test_defaults_for_every_missing_field() {
    let movie = MovieMapper::new().map_to_movie(OmdbMovie::default(), not_favorite);

    // (field, expected default) over the whole canonical record.
    let expectations = [
        ("provider_id", movie.provider_id.as_str(), ""),
        ("title", movie.title.as_str(), "Unknown Movie"),
        ("year", movie.year.as_str(), "N/A"),
        ("media_type", movie.media_type.as_str(), "movie"),
        ("poster_url", movie.poster_url.as_str(), PLACEHOLDER_POSTER),
        ("language", movie.language.as_str(), "English"),
        ("rating", movie.rating.as_str(), "N/A"),
        ("genre", movie.genre.as_str(), "N/A"),
        ("overview", movie.overview.as_str(), ""),
        ("director", movie.director.as_str(), ""),
        ("actors", movie.actors.as_str(), ""),
        ("release_date", movie.release_date.as_str(), ""),
        ("runtime", movie.runtime.as_str(), "N/A"),
    ];

    for (field, actual, expected) in expectations {
        assert_eq!(actual, expected, "wrong default for {}", field);
    }

    assert!(!movie.id.is_empty(), "identity must always be synthesized");
    assert!(!movie.is_favorite);
}

#[test]
fn test_populated_fields_pass_through() {
    let source = OmdbMovie {
        imdb_id: Some("tt0372784".to_string()),
        title: Some("Batman Begins".to_string()),
        year: Some("2005".to_string()),
        media_type: Some("movie".to_string()),
        poster: Some("https://m.media-amazon.com/images/bb.jpg".to_string()),
        language: Some("English".to_string()),
        imdb_rating: Some("8.2".to_string()),
        genre: Some("Action, Crime, Drama".to_string()),
        plot: Some("Bruce Wayne becomes Batman.".to_string()),
        director: Some("Christopher Nolan".to_string()),
        actors: Some("Christian Bale, Michael Caine".to_string()),
        released: Some("15 Jun 2005".to_string()),
        runtime: Some("140 min".to_string()),
        ..Default::default()
    };

    let movie = MovieMapper::new().map_to_movie(source, |id| id == "tt0372784");

    assert_eq!(movie.id, "tt0372784");
    assert_eq!(movie.provider_id, "tt0372784");
    assert_eq!(movie.title, "Batman Begins");
    assert_eq!(movie.rating, "8.2");
    assert_eq!(movie.overview, "Bruce Wayne becomes Batman.");
    assert_eq!(movie.poster_url, "https://m.media-amazon.com/images/bb.jpg");
    assert!(movie.is_favorite);
}

#[test]
fn test_poster_resolution_table() {
    let cases = [
        ("", PLACEHOLDER_POSTER),
        ("N/A", PLACEHOLDER_POSTER),
        ("https://x/y.jpg", "https://x/y.jpg"),
        ("http://x/y.jpg", "http://x/y.jpg"),
        ("/Images/a.jpg", "/Images/a.jpg"),
        ("a.jpg", "/Images/a.jpg"),
    ];

    for (input, expected) in cases {
        assert_eq!(resolve_poster(input), expected, "input: {:?}", input);
    }
}

#[test]
fn test_sentinel_poster_on_raw_record_resolves_to_placeholder() {
    let source = OmdbMovie {
        imdb_id: Some("tt0000001".to_string()),
        poster: Some("N/A".to_string()),
        ..Default::default()
    };
    let movie = MovieMapper::new().map_to_movie(source, not_favorite);
    assert_eq!(movie.poster_url, PLACEHOLDER_POSTER);
}
