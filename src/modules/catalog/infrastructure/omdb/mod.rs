pub mod client;
pub mod mapper;
pub mod models;

pub use client::OmdbClient;
pub use mapper::{resolve_poster, MovieMapper, LOCAL_IMAGE_DIR, PLACEHOLDER_POSTER};
pub use models::{OmdbMovie, OmdbSearchResponse, PlotLength};
