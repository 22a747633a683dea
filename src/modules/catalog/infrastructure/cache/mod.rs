pub mod expiring_cache;

pub use expiring_cache::{ExpiringCache, DETAIL_TTL, SEARCH_TTL};
