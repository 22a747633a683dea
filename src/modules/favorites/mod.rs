pub mod application;
pub mod domain;

pub use application::{FavoritesService, FAVORITES_STORAGE_KEY};
pub use domain::FavoritesEvent;
