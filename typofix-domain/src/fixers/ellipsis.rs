//! Runs of three or more dots become the single ellipsis glyph.

use super::{Fixer, FixerExample, FixerMeta};
use crate::keystroke::{Keystroke, KeystrokeEdit};
use regex::Regex;
use std::sync::LazyLock;
use typofix_chars::ELLIPSIS;
use typofix_types::{FixerCategory, Locale};

static ELLIPSIS_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3,}").expect("ELLIPSIS_DOTS pattern is valid"));

pub fn fixer() -> Fixer {
    Fixer::new(
        FixerMeta {
            id: "ellipsis",
            name: "Ellipsis",
            description: "Replaces three or more dots with the ellipsis glyph (…)",
            category: FixerCategory::Punctuation,
            priority: 1,
            default_enabled: true,
            locale_sensitive: false,
        },
        fix,
        Some(keystroke),
        example,
    )
}

fn fix(text: &str, _locale: &Locale) -> anyhow::Result<String> {
    Ok(ELLIPSIS_DOTS.replace_all(text, ELLIPSIS).into_owned())
}

fn keystroke(
    keystroke: &Keystroke,
    line_before_cursor: &str,
    _locale: &Locale,
) -> Option<KeystrokeEdit> {
    if !keystroke.is(".") {
        return None;
    }
    // Third dot in a row: fold all three into one glyph.
    let stem = line_before_cursor.strip_suffix("..")?;
    Some(KeystrokeEdit::at_end(format!("{stem}{ELLIPSIS}")))
}

fn example(_locale: &Locale) -> FixerExample {
    FixerExample {
        before: "En fait... c'est compliqué...".to_string(),
        after: format!("En fait{ELLIPSIS} c'est compliqué{ELLIPSIS}"),
    }
}
