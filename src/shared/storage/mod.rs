pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use crate::shared::errors::AppResult;

/// Port (interface) for the local persistence layer.
///
/// Cache, favorites and preference components are injected with an
/// implementation of this trait instead of reaching for an ambient
/// storage namespace. Values are whole serialized documents; a key maps
/// to at most one document.
pub trait KeyValueStorage: Send + Sync {
    /// Read the document stored under `key`, if any.
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Write `value` under `key`, replacing any prior document.
    fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the document stored under `key`. Removing a missing key
    /// succeeds.
    fn remove(&self, key: &str) -> AppResult<()>;
}
