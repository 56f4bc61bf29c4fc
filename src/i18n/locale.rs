// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locales carried by every bundled game table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display locales for the games' UI text.
///
/// Every bundled table defines exactly these three. The serialized form is
/// the locale tag (`"zh-TW"`, `"en"`, `"ja"`), which is also what the
/// rendering layer stores as its "current locale".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ja")]
    Ja,
}

impl Locale {
    /// Locale tag, e.g. `"zh-TW"`.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Parse a locale tag. Exact and case-sensitive: `"zh-tw"` and `"EN"`
    /// are rejected.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "zh-TW" => Some(Locale::ZhTw),
            "en" => Some(Locale::En),
            "ja" => Some(Locale::Ja),
            _ => None,
        }
    }

    /// All locales, in display order.
    pub fn all() -> &'static [Locale] {
        &[Locale::ZhTw, Locale::En, Locale::Ja]
    }

    /// Name of the locale written in its own script, for language pickers.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::ZhTw => "繁體中文",
            Locale::En => "English",
            Locale::Ja => "日本語",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Locale::ZhTw => "Traditional Chinese (Taiwan)",
            Locale::En => "English",
            Locale::Ja => "Japanese",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| {
            let known: Vec<&str> = Locale::all().iter().map(Locale::code).collect();
            anyhow::anyhow!("unsupported locale '{}' (expected one of: {})", s, known.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for locale in Locale::all() {
            let parsed = Locale::from_code(locale.code()).expect("should parse");
            assert_eq!(*locale, parsed);
        }
    }

    #[test]
    fn from_code_is_case_sensitive() {
        assert_eq!(Locale::from_code("zh-tw"), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code("zh"), None);
    }

    #[test]
    fn from_str_reports_known_locales() {
        let err = "fr".parse::<Locale>().unwrap_err().to_string();
        assert!(err.contains("'fr'"));
        assert!(err.contains("zh-TW, en, ja"));
    }

    #[test]
    fn serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Locale::ZhTw).unwrap(), "\"zh-TW\"");
        let ja: Locale = serde_json::from_str("\"ja\"").unwrap();
        assert_eq!(ja, Locale::Ja);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::En.to_string(), "en");
    }
}
