//! Supported languages and their text direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value of the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A language the site is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the base language every other table falls back to.
    #[default]
    En,
    Fr,
    Ar,
    Ur,
}

impl Language {
    /// Every supported language, in switcher order.
    pub const ALL: &'static [Language] = &[Language::En, Language::Fr, Language::Ar, Language::Ur];

    /// Fallback for missing preferences and missing strings.
    pub const BASE: Language = Language::En;

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
            Language::Ur => "ur",
        }
    }

    /// Parse a supported language code. Only exact codes match.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }

    pub fn direction(&self) -> Direction {
        match self {
            Language::Ar | Language::Ur => Direction::Rtl,
            Language::En | Language::Fr => Direction::Ltr,
        }
    }

    /// Name of the language in itself, for the language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Ar => "العربية",
            Language::Ur => "اردو",
        }
    }

    /// English name, used as the switcher link title.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "French",
            Language::Ar => "Arabic",
            Language::Ur => "Urdu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(Language::parse("ar"), Some(Language::Ar));
        assert_eq!(Language::parse("ur"), Some(Language::Ur));
        assert_eq!(Language::parse(" FR "), None);
        assert_eq!(Language::parse("fr-CA"), None);
        assert_eq!(Language::parse("ar_EG"), None);
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn test_directions() {
        assert_eq!(Language::En.direction(), Direction::Ltr);
        assert_eq!(Language::Fr.direction(), Direction::Ltr);
        assert!(Language::Ar.direction().is_rtl());
        assert!(Language::Ur.direction().is_rtl());
        assert_eq!(Direction::Rtl.to_string(), "rtl");
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Ur).unwrap(), "\"ur\"");
        let lang: Language = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(lang, Language::Fr);
    }
}
