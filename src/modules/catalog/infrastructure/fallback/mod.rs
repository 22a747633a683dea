pub mod dataset;

pub use dataset::StaticCatalog;
