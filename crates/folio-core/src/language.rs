//! Supported content languages.
//!
//! Every content kind exists once per language variant. The set is closed:
//! parsing an unknown tag is an error rather than a silent fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A language variant of the portfolio content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// German
    De,
}

impl Language {
    /// All supported languages, in canonical order.
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    /// The two-letter tag used in file names (`en`, `de`).
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Pick a language from a locale string such as `de_DE.UTF-8` or `en-US`.
    ///
    /// German locales map to [`Language::De`]; everything else, including an
    /// empty string, maps to [`Language::En`].
    pub fn from_locale(locale: &str) -> Self {
        if locale.trim().to_lowercase().starts_with("de") {
            Language::De
        } else {
            Language::En
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            other => Err(Error::UnsupportedLanguage(other.to_string())),
        }
    }
}
