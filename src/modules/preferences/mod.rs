pub mod application;
pub mod domain;

pub use application::PreferencesService;
pub use domain::Theme;
