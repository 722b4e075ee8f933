use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixer ids enabled by every locale preset.
const STANDARD_FIXERS: &[&str] = &[
    "ellipsis",
    "dash",
    "smart-quotes",
    "curly-quote",
    "comma",
    "unit",
    "dimension",
    "trademark",
];

/// Engine configuration, owned and persisted by the host.
///
/// Cosmetic host fields (`highlight_enabled`, `highlight_button`,
/// `tab_title_bar_button`) are carried for round-tripping but ignored by
/// the engine. Unknown fixer ids in `fixers` are ignored; an unknown
/// locale falls back to [`Locale::DEFAULT_TAG`] via [`Self::sanitized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographySettings {
    /// Intercept keystrokes as the user types.
    pub enable_real_time_correction: bool,

    /// Locale driving quote style and French spacing.
    pub locale: Locale,

    // Host-side display flags; accepted and ignored by the engine.
    pub highlight_enabled: bool,
    pub highlight_button: bool,
    pub tab_title_bar_button: bool,

    /// Per-fixer enablement, keyed by fixer id.
    ///
    /// Declared last so TOML serialization emits it as a trailing table.
    pub fixers: BTreeMap<String, bool>,
}

impl Default for TypographySettings {
    fn default() -> Self {
        TypographySettings {
            enable_real_time_correction: true,
            locale: Locale::default(),
            highlight_enabled: false,
            highlight_button: true,
            tab_title_bar_button: false,
            fixers: default_fixer_map(true),
        }
    }
}

impl TypographySettings {
    /// The recommended preset for a locale.
    ///
    /// `french-spacing` is only part of the `fr_FR` preset; `hyphen` is
    /// off everywhere (a heuristic rule with known false positives).
    pub fn for_locale(locale: impl Into<Locale>) -> Self {
        let locale: Locale = locale.into();
        let locale = locale.sanitized();
        let french_spacing = locale.as_str() == "fr_FR";
        TypographySettings {
            locale,
            fixers: default_fixer_map(french_spacing),
            ..TypographySettings::default()
        }
    }

    /// A copy with the locale normalized to a recognized tag.
    ///
    /// This is the configuration boundary: bad data degrades to the
    /// documented defaults, it never errors.
    pub fn sanitized(&self) -> Self {
        let mut sane = self.clone();
        sane.locale = self.locale.sanitized();
        sane
    }

    /// The configured flag for a fixer id, if the host set one.
    pub fn fixer_enabled(&self, id: &str) -> Option<bool> {
        self.fixers.get(id).copied()
    }
}

fn default_fixer_map(french_spacing: bool) -> BTreeMap<String, bool> {
    let mut map: BTreeMap<String, bool> = STANDARD_FIXERS
        .iter()
        .map(|id| (id.to_string(), true))
        .collect();
    // Both ids stay present even when off, so hosts always see the full
    // settings surface.
    map.insert("french-spacing".to_string(), french_spacing);
    map.insert("hyphen".to_string(), false);
    map
}
