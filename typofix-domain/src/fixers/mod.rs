use crate::keystroke::{Keystroke, KeystrokeEdit};
use typofix_types::{FixerCategory, Locale};

mod comma;
mod curly_quote;
mod dash;
mod dimension;
mod ellipsis;
mod french_spacing;
mod hyphen;
mod smart_quotes;
mod trademark;
mod unit;

/// Batch correction entry point of a rule.
pub type FixFn = fn(&str, &Locale) -> anyhow::Result<String>;

/// Live-typing entry point of a rule.
pub type KeystrokeFn = fn(&Keystroke, &str, &Locale) -> Option<KeystrokeEdit>;

/// Before/after documentation pair of a rule.
pub type ExampleFn = fn(&Locale) -> FixerExample;

/// Static description of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixerMeta {
    /// Stable unique identifier.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Grouping for bulk toggles; never affects ordering.
    pub category: FixerCategory,
    /// Lower runs earlier. Ties break by registration order.
    pub priority: u8,
    pub default_enabled: bool,
    /// Whether `fix` branches on the locale.
    pub locale_sensitive: bool,
}

/// A before/after transformation sample, for settings surfaces and docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixerExample {
    pub before: String,
    pub after: String,
}

/// One typographic rewrite rule.
///
/// The rule set is closed and enumerable, so a fixer is a record of
/// metadata plus function pointers rather than an open trait hierarchy.
/// `fix` is a pure function of `(text, locale)`; `enabled` and the locale
/// are the only state, and both are assigned by the engine.
pub struct Fixer {
    meta: FixerMeta,
    enabled: bool,
    locale: Locale,
    fix: FixFn,
    keystroke: Option<KeystrokeFn>,
    example: ExampleFn,
}

impl Fixer {
    pub fn new(
        meta: FixerMeta,
        fix: FixFn,
        keystroke: Option<KeystrokeFn>,
        example: ExampleFn,
    ) -> Self {
        Fixer {
            enabled: meta.default_enabled,
            locale: Locale::default(),
            meta,
            fix,
            keystroke,
            example,
        }
    }

    pub fn meta(&self) -> &FixerMeta {
        &self.meta
    }

    pub fn id(&self) -> &'static str {
        self.meta.id
    }

    pub fn name(&self) -> &'static str {
        self.meta.name
    }

    pub fn description(&self) -> &'static str {
        self.meta.description
    }

    pub fn category(&self) -> FixerCategory {
        self.meta.category
    }

    pub fn priority(&self) -> u8 {
        self.meta.priority
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: &Locale) {
        self.locale = locale.clone();
    }

    /// Apply the rule to `text`.
    pub fn fix(&self, text: &str) -> anyhow::Result<String> {
        (self.fix)(text, &self.locale)
    }

    /// Offer a keystroke to the rule.
    ///
    /// Returns `None` when the rule does not want to intercept. Chords are
    /// rejected here so individual rules never have to check.
    pub fn handle_keystroke(
        &self,
        keystroke: &Keystroke,
        line_before_cursor: &str,
    ) -> Option<KeystrokeEdit> {
        if keystroke.is_chord() {
            return None;
        }
        (self.keystroke?)(keystroke, line_before_cursor, &self.locale)
    }

    pub fn example(&self) -> FixerExample {
        (self.example)(&self.locale)
    }
}

impl std::fmt::Debug for Fixer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fixer")
            .field("id", &self.meta.id)
            .field("priority", &self.meta.priority)
            .field("enabled", &self.enabled)
            .field("locale", &self.locale)
            .finish()
    }
}

/// All builtin rules, in registration order.
///
/// Registration order is the deterministic tie-break for equal priorities,
/// so this list must stay stable.
pub fn builtin_fixers() -> Vec<Fixer> {
    vec![
        ellipsis::fixer(),
        dash::fixer(),
        french_spacing::fixer(),
        smart_quotes::fixer(),
        curly_quote::fixer(),
        comma::fixer(),
        unit::fixer(),
        dimension::fixer(),
        trademark::fixer(),
        hyphen::fixer(),
    ]
}

/// The portion of `text`'s line that precedes byte offset `start`.
pub(crate) fn line_prefix(text: &str, start: usize) -> &str {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    &text[line_start..start]
}

/// Repeat a replacement until the text stops changing.
///
/// Non-overlapping replacement only rewrites every other match in a chain
/// like `1-2-3`; iterating makes a single `fix` call reach the same result
/// as repeated application, which is what keeps these rules idempotent.
pub(crate) fn replace_to_fixpoint(re: &regex::Regex, replacement: &str, text: &str) -> String {
    let mut out = text.to_string();
    loop {
        let next = re.replace_all(&out, replacement).into_owned();
        if next == out {
            return out;
        }
        out = next;
    }
}
