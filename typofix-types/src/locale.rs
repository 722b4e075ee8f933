use serde::{Deserialize, Serialize};
use std::fmt;

/// Language tags the correction rules actually branch on.
const KNOWN_LANGUAGES: &[&str] = &["fr", "en", "de"];

/// A free-form locale tag such as `fr_FR`, `en_GB` or `de_DE`.
///
/// Locales are matched by language prefix; nothing ever fails on an
/// unrecognized tag. [`Locale::sanitized`] normalizes tags whose language
/// prefix is unknown to the documented default (`fr_FR`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// The documented fallback locale.
    pub const DEFAULT_TAG: &'static str = "fr_FR";

    pub fn new(tag: impl Into<String>) -> Self {
        Locale(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when this locale's tag starts with the given language prefix,
    /// e.g. `fr_CA` matches language `fr`.
    pub fn matches_language(&self, language: &str) -> bool {
        self.0.starts_with(language)
    }

    pub fn is_french(&self) -> bool {
        self.matches_language("fr")
    }

    /// Whether the tag begins with a language the rules know about.
    pub fn is_recognized(&self) -> bool {
        KNOWN_LANGUAGES.iter().any(|l| self.matches_language(l))
    }

    /// This locale, or the default when the language prefix is unknown.
    pub fn sanitized(&self) -> Locale {
        if self.is_recognized() {
            self.clone()
        } else {
            Locale::default()
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale(Self::DEFAULT_TAG.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}
