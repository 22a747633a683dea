pub mod service;

pub use service::PreferencesService;
