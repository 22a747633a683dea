use serde::{Deserialize, Serialize};

/// Notification broadcast after a successful favorites mutation.
///
/// Listing surfaces subscribe to refresh their favorite badges; the
/// store never waits on subscribers and mutations succeed with none
/// attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FavoritesEvent {
    Added { movie_id: String },
    Removed { movie_id: String },
    Cleared,
}
