use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the listing surfaces are modeled for.
///
/// The static catalog carries one shelf per language; anything outside
/// this set falls back to [`Language::default`] on the listing surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Malayalam,
    Tamil,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Malayalam,
        Language::Tamil,
        Language::Telugu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Malayalam => "Malayalam",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
        }
    }

    /// Parse a language name. Returns `None` for unmodeled languages;
    /// callers decide whether to fall back to the default.
    pub fn parse(name: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.as_str() == name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
