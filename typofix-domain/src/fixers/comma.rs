//! Comma spacing: nothing before, exactly one space after.
//!
//! All whitespace classes here are horizontal-only; a comma at the end of
//! a line must never pull the next line up.

use super::{Fixer, FixerExample, FixerMeta};
use regex::Regex;
use std::sync::LazyLock;
use typofix_types::{FixerCategory, Locale};

static SPACE_BEFORE_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\r\n]+,").expect("SPACE_BEFORE_COMMA pattern is valid"));

static SPACE_AFTER_COMMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",[^\S\r\n]*([^\s)\]}])").expect("SPACE_AFTER_COMMA pattern is valid")
});

static TRAILING_COMMA_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m),[^\S\r\n]+$").expect("TRAILING_COMMA_SPACE pattern is valid")
});

static COMMA_BEFORE_CLOSER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",[^\S\r\n]*([)\]}])").expect("COMMA_BEFORE_CLOSER pattern is valid")
});

pub fn fixer() -> Fixer {
    Fixer::new(
        FixerMeta {
            id: "comma",
            name: "Comma spacing",
            description: "Removes space before commas and normalizes the space after",
            category: FixerCategory::Spacing,
            priority: 6,
            default_enabled: true,
            locale_sensitive: false,
        },
        fix,
        None,
        example,
    )
}

fn fix(text: &str, _locale: &Locale) -> anyhow::Result<String> {
    let out = SPACE_BEFORE_COMMA.replace_all(text, ",");
    let out = SPACE_AFTER_COMMA.replace_all(&out, ", ${1}");
    let out = TRAILING_COMMA_SPACE.replace_all(&out, ",");
    let out = COMMA_BEFORE_CLOSER.replace_all(&out, ",${1}");
    Ok(out.into_owned())
}

fn example(_locale: &Locale) -> FixerExample {
    FixerExample {
        before: "Pommes , poires,oranges ,bananes".to_string(),
        after: "Pommes, poires, oranges, bananes".to_string(),
    }
}
