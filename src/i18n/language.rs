//! Supported languages and their reading direction.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::errors::{CareNetworkError, Result};

/// A language the app ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    He,
}

/// Reading direction applied to the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Language {
    /// Number of supported languages
    pub const COUNT: usize = 2;

    /// Every supported language, in display order.
    pub const ALL: [Language; Language::COUNT] = [Language::En, Language::He];

    /// Parse an ISO 639-1 code.
    ///
    /// Only exact codes are accepted (surrounding whitespace is ignored);
    /// locale tags such as `he-IL` are rejected.
    pub fn from_code(code: &str) -> Result<Language> {
        match code.trim() {
            "en" => Ok(Language::En),
            "he" => Ok(Language::He),
            other => Err(CareNetworkError::UnsupportedLanguage(other.to_string())),
        }
    }

    /// ISO 639-1 code, also used as the persisted value and document tag
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::He => "Hebrew",
        }
    }

    /// Name of the language in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::He => "עברית",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::He => TextDirection::Rtl,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// Codes of every supported language
    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(Language::code).collect()
    }
}

impl FromStr for Language {
    type Err = CareNetworkError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TextDirection {
    /// Value of the document `dir` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("en").unwrap(), Language::En);
        assert_eq!(Language::from_code(" he ").unwrap(), Language::He);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_matches!(Language::from_code("fr"), Err(CareNetworkError::UnsupportedLanguage(code)) if code == "fr");
        assert!(Language::from_code("").is_err());
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("he-IL").is_err());
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::He.direction(), TextDirection::Rtl);
        assert_eq!(Language::En.direction(), TextDirection::Ltr);
        assert!(Language::He.is_rtl());
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
        assert_eq!(TextDirection::Ltr.to_string(), "ltr");
    }

    #[test]
    fn test_code_round_trips_through_display() {
        for language in Language::ALL {
            assert_eq!(language.to_string().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&Language::He).unwrap(), "\"he\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }

    #[test]
    fn test_names() {
        assert_eq!(Language::He.name(), "Hebrew");
        assert_eq!(Language::He.native_name(), "עברית");
        assert_eq!(Language::codes(), vec!["en", "he"]);
    }
}
