//! `--` becomes an em dash, numeric ranges get an en dash, and existing em
//! dashes are re-spaced for the locale.

use super::{Fixer, FixerExample, FixerMeta};
use crate::keystroke::{Keystroke, KeystrokeEdit};
use regex::Regex;
use std::sync::LazyLock;
use typofix_chars::{MDASH, NDASH};
use typofix_types::{FixerCategory, Locale};

static DOUBLE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--").expect("DOUBLE_DASH pattern is valid"));

static NUMERIC_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)[^\S\r\n]*-[^\S\r\n]*(\d+)").expect("NUMERIC_RANGE pattern is valid")
});

static MDASH_SPACING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\S\r\n]*\u{2014}[^\S\r\n]*").expect("MDASH_SPACING pattern is valid")
});

pub fn fixer() -> Fixer {
    Fixer::new(
        FixerMeta {
            id: "dash",
            name: "Typographic dashes",
            description: "Converts -- to an em dash and number ranges to an en dash",
            category: FixerCategory::Punctuation,
            priority: 2,
            default_enabled: true,
            locale_sensitive: true,
        },
        fix,
        Some(keystroke),
        example,
    )
}

fn fix(text: &str, locale: &Locale) -> anyhow::Result<String> {
    let out = DOUBLE_DASH.replace_all(text, MDASH);

    // Ranges can chain (1-2-3).
    let range_dash = format!("${{1}}{NDASH}${{2}}");
    let out = super::replace_to_fixpoint(&NUMERIC_RANGE, &range_dash, &out);

    let spaced = spaced_mdash(locale);
    Ok(MDASH_SPACING.replace_all(&out, spaced.as_str()).into_owned())
}

fn spaced_mdash(locale: &Locale) -> String {
    if locale.is_french() {
        format!(" {MDASH} ")
    } else {
        MDASH.to_string()
    }
}

fn keystroke(
    keystroke: &Keystroke,
    line_before_cursor: &str,
    locale: &Locale,
) -> Option<KeystrokeEdit> {
    if !keystroke.is("-") {
        return None;
    }
    // Second hyphen in a row: the pending one plus the incoming key.
    let stem = line_before_cursor.strip_suffix('-')?;
    Some(KeystrokeEdit::at_end(format!(
        "{stem}{}",
        spaced_mdash(locale)
    )))
}

fn example(locale: &Locale) -> FixerExample {
    FixerExample {
        before: "Période 2020-2024 -- une époque importante".to_string(),
        after: format!(
            "Période 2020{NDASH}2024{}une époque importante",
            spaced_mdash(locale)
        ),
    }
}
