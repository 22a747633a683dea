use std::sync::Arc;

use cinescope::modules::catalog::{MovieMapper, OmdbMovie};
use cinescope::{FavoritesEvent, FavoritesService, MemoryStorage, Movie};

fn movie(imdb_id: &str, title: &str) -> Movie {
    MovieMapper::new().map_to_movie(
        OmdbMovie {
            imdb_id: Some(imdb_id.to_string()),
            title: Some(title.to_string()),
            ..Default::default()
        },
        |_| false,
    )
}

#[test]
fn test_add_remove_idempotence() {
    let favorites = FavoritesService::new(Arc::new(MemoryStorage::new()));
    let batman = movie("tt0372784", "Batman Begins");

    assert!(favorites.add(batman.clone()));
    assert!(!favorites.add(batman.clone()));
    assert_eq!(favorites.list().len(), 1);
    assert!(favorites.is_favorite("tt0372784"));

    assert!(favorites.remove("tt0372784"));
    assert!(favorites.remove("tt0372784"));
    assert!(favorites.list().is_empty());
    assert!(!favorites.is_favorite("tt0372784"));
}

#[test]
fn test_list_preserves_insertion_order() {
    let favorites = FavoritesService::new(Arc::new(MemoryStorage::new()));

    favorites.add(movie("tt0372784", "Batman Begins"));
    favorites.add(movie("tt0468569", "The Dark Knight"));
    favorites.add(movie("tt1345836", "The Dark Knight Rises"));

    let titles: Vec<String> = favorites.list().into_iter().map(|m| m.title).collect();
    assert_eq!(
        titles,
        vec!["Batman Begins", "The Dark Knight", "The Dark Knight Rises"]
    );
}

#[test]
fn test_document_survives_service_restart() {
    let storage = Arc::new(MemoryStorage::new());

    {
        let favorites = FavoritesService::new(storage.clone());
        favorites.add(movie("tt0372784", "Batman Begins"));
    }

    let reopened = FavoritesService::new(storage);
    assert!(reopened.is_favorite("tt0372784"));
}

#[test]
fn test_subscribers_see_mutations() {
    let favorites = FavoritesService::new(Arc::new(MemoryStorage::new()));
    let mut events = favorites.subscribe();

    favorites.add(movie("tt0372784", "Batman Begins"));
    favorites.clear();

    assert_eq!(
        events.try_recv().unwrap(),
        FavoritesEvent::Added {
            movie_id: "tt0372784".to_string()
        }
    );
    assert_eq!(events.try_recv().unwrap(), FavoritesEvent::Cleared);
}
