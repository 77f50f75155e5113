use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display languages supported by the dataset.
///
/// Anything outside this set is coerced to [`Language::DEFAULT`] before field
/// resolution happens, so the resolver never sees an unsupported tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
    Ja,
    Ko,
}

impl Language {
    pub const DEFAULT: Language = Language::Zh;

    pub const ALL: [Language; 4] = [Language::Zh, Language::En, Language::Ja, Language::Ko];

    /// The tag used as a field suffix, e.g. `title_en`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Ja => "ja",
            Language::Ko => "ko",
        }
    }

    /// Parse a supported tag, returning `None` for anything else.
    ///
    /// Matching ignores case and surrounding whitespace, and a region-qualified
    /// tag is accepted by its primary subtag (`en-US`, `zh_CN`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let lowered = value.trim().to_ascii_lowercase();
        let primary = lowered
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        Self::ALL.into_iter().find(|lang| lang.tag() == primary)
    }

    /// Coerce an externally supplied language into the supported set.
    #[must_use]
    pub fn coerce(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or(Self::DEFAULT)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned by [`Language::from_str`] for tags outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}' (expected one of zh, en, ja, ko)")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_region() {
        assert_eq!(Language::parse("EN"), Some(Language::En));
        assert_eq!(Language::parse(" ja "), Some(Language::Ja));
        assert_eq!(Language::parse("en-US"), Some(Language::En));
        assert_eq!(Language::parse("zh_CN"), Some(Language::Zh));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn unsupported_languages_fall_back_to_default() {
        assert_eq!(Language::coerce(Some("de")), Language::Zh);
        assert_eq!(Language::coerce(None), Language::Zh);
        assert_eq!(Language::coerce(Some("ko")), Language::Ko);
    }

    #[test]
    fn from_str_reports_the_rejected_value() {
        let err = "pt".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("'pt'"));
    }
}
