use std::sync::Arc;

use tokio::sync::broadcast;

use crate::modules::catalog::domain::Movie;
use crate::modules::favorites::domain::FavoritesEvent;
use crate::shared::storage::KeyValueStorage;

/// Storage key of the single serialized favorites document.
pub const FAVORITES_STORAGE_KEY: &str = "movie_favorites";

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Durable set of movies the user has marked as favorite.
///
/// One serialized document, unique by movie id, mutated only through
/// explicit user actions. Every read failure degrades to the empty set;
/// a failed write leaves the persisted state untouched and reports
/// `false` to the caller.
pub struct FavoritesService {
    storage: Arc<dyn KeyValueStorage>,
    events: broadcast::Sender<FavoritesEvent>,
}

impl FavoritesService {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { storage, events }
    }

    /// Subscribe to favorites-changed notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<FavoritesEvent> {
        self.events.subscribe()
    }

    /// All favorites, in insertion order. Empty on any read failure.
    pub fn list(&self) -> Vec<Movie> {
        let raw = match self.storage.read(FAVORITES_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Favorites: read failed: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(favorites) => favorites,
            Err(e) => {
                log::warn!("Favorites: stored document is corrupt: {}", e);
                Vec::new()
            }
        }
    }

    /// Append `movie`. Returns `false` without mutation when a record
    /// with the same id already exists or the persistence write fails.
    pub fn add(&self, movie: Movie) -> bool {
        let mut favorites = self.list();
        if favorites.iter().any(|fav| fav.id == movie.id) {
            return false;
        }

        let movie_id = movie.id.clone();
        favorites.push(movie);

        if !self.persist(&favorites) {
            return false;
        }

        let _ = self.events.send(FavoritesEvent::Added { movie_id });
        true
    }

    /// Remove every record matching `id`. Removing a non-member id
    /// succeeds trivially; only a failed persistence write reports
    /// `false`.
    pub fn remove(&self, id: &str) -> bool {
        let mut favorites = self.list();
        favorites.retain(|movie| movie.id != id);

        if !self.persist(&favorites) {
            return false;
        }

        let _ = self.events.send(FavoritesEvent::Removed {
            movie_id: id.to_string(),
        });
        true
    }

    /// Membership query over the persisted set.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.list().iter().any(|movie| movie.id == id)
    }

    /// Empty the set entirely. Irreversible.
    pub fn clear(&self) -> bool {
        if let Err(e) = self.storage.remove(FAVORITES_STORAGE_KEY) {
            log::warn!("Favorites: clear failed: {}", e);
            return false;
        }

        let _ = self.events.send(FavoritesEvent::Cleared);
        true
    }

    fn persist(&self, favorites: &[Movie]) -> bool {
        let serialized = match serde_json::to_string(favorites) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Favorites: failed to serialize document: {}", e);
                return false;
            }
        };

        match self.storage.write(FAVORITES_STORAGE_KEY, &serialized) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Favorites: write failed: {}", e);
                false
            }
        }
    }
}
