pub mod cache;
pub mod fallback;
pub mod http_client;
pub mod omdb;
