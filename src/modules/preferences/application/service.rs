use std::sync::Arc;

use crate::modules::preferences::domain::Theme;
use crate::shared::storage::KeyValueStorage;

const THEME_KEY: &str = "theme";
const SELECTED_LANGUAGE_KEY: &str = "selectedLanguage";
const RECENT_LANGUAGE_KEY: &str = "recentLanguage";

const DEFAULT_SELECTED_LANGUAGE: &str = "English";
const DEFAULT_RECENT_LANGUAGE: &str = "Malayalam";

/// UI-preference document: selected theme and listing languages.
///
/// Values are stored as plain strings, one per key. Loss or corruption
/// of any value degrades to the documented default; setters are
/// best-effort and report success.
pub struct PreferencesService {
    storage: Arc<dyn KeyValueStorage>,
}

impl PreferencesService {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn theme(&self) -> Theme {
        self.read_string(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) -> bool {
        self.write_string(THEME_KEY, theme.as_str())
    }

    /// Language selected for the trending shelf.
    pub fn selected_language(&self) -> String {
        self.read_string(SELECTED_LANGUAGE_KEY)
            .unwrap_or_else(|| DEFAULT_SELECTED_LANGUAGE.to_string())
    }

    pub fn set_selected_language(&self, language: &str) -> bool {
        self.write_string(SELECTED_LANGUAGE_KEY, language)
    }

    /// Language selected for the recent-releases shelf.
    pub fn recent_language(&self) -> String {
        self.read_string(RECENT_LANGUAGE_KEY)
            .unwrap_or_else(|| DEFAULT_RECENT_LANGUAGE.to_string())
    }

    pub fn set_recent_language(&self, language: &str) -> bool {
        self.write_string(RECENT_LANGUAGE_KEY, language)
    }

    fn read_string(&self, key: &str) -> Option<String> {
        match self.storage.read(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Preferences: read of '{}' failed: {}", key, e);
                None
            }
        }
    }

    fn write_string(&self, key: &str, value: &str) -> bool {
        match self.storage.write(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Preferences: write of '{}' failed: {}", key, e);
                false
            }
        }
    }
}
