//! Expiring response cache
//!
//! Generic key-to-payload store with per-entry time-to-live, persisted
//! through the storage port. Caching is strictly a performance
//! optimization: every failure degrades to a miss or a no-op, never to
//! an error the caller sees. Expired entries are ignored on read and
//! overwritten on the next write with the same key; there is no sweep.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::shared::storage::KeyValueStorage;

/// TTL for listing/search results, which may change upstream.
pub const SEARCH_TTL: Duration = Duration::from_millis(3_600_000);

/// TTL for single-item detail lookups, which change far less often.
pub const DETAIL_TTL: Duration = Duration::from_millis(86_400_000);

/// Storage key namespace, shared with the original persisted documents.
const KEY_PREFIX: &str = "movie_cache_";

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    payload: T,
    /// Epoch milliseconds after which the entry is absent.
    expires_at: i64,
}

/// Expiring cache over the storage port.
#[derive(Clone)]
pub struct ExpiringCache {
    storage: Arc<dyn KeyValueStorage>,
}

impl ExpiringCache {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Look up `key`. Absent, expired, unreadable and unparseable
    /// entries all count as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let storage_key = format!("{}{}", KEY_PREFIX, key);

        let raw = match self.storage.read(&storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("cache miss for key: {}", key);
                return None;
            }
            Err(e) => {
                warn!("cache read failed for key {}: {}", key, e);
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("cache entry for key {} is corrupt: {}", key, e);
                return None;
            }
        };

        if entry.expires_at <= Utc::now().timestamp_millis() {
            debug!("cache entry expired for key: {}", key);
            return None;
        }

        debug!("cache hit for key: {}", key);
        Some(entry.payload)
    }

    /// Store `payload` under `key` for `ttl`, replacing any prior entry.
    pub fn set<T: Serialize>(&self, key: &str, payload: &T, ttl: Duration) {
        let entry = CacheEntry {
            payload,
            expires_at: Utc::now().timestamp_millis() + ttl.as_millis() as i64,
        };

        let serialized = match serde_json::to_string(&entry) {
            Ok(s) => s,
            Err(e) => {
                warn!("failed to serialize cache entry for key {}: {}", key, e);
                return;
            }
        };

        let storage_key = format!("{}{}", KEY_PREFIX, key);
        if let Err(e) = self.storage.write(&storage_key, &serialized) {
            warn!("cache write failed for key {}: {}", key, e);
        } else {
            debug!("cached payload for key: {} (ttl {:?})", key, ttl);
        }
    }
}
