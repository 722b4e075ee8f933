//! Line-leading hyphens become em dashes (dialogue style).
//!
//! A blunt heuristic: it cannot tell a dialogue line from a Markdown list
//! item, so it ships disabled by default.

use super::{Fixer, FixerExample, FixerMeta};
use regex::Regex;
use std::sync::LazyLock;
use typofix_chars::MDASH;
use typofix_types::{FixerCategory, Locale};

static LINE_LEADING_HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([^\S\r\n]*)-[^\S\r\n]*").expect("LINE_LEADING_HYPHEN pattern is valid")
});

pub fn fixer() -> Fixer {
    Fixer::new(
        FixerMeta {
            id: "hyphen",
            name: "Dialogue dashes",
            description: "Converts a line-leading hyphen to an em dash (heuristic)",
            category: FixerCategory::Punctuation,
            priority: 10,
            default_enabled: false,
            locale_sensitive: true,
        },
        fix,
        None,
        example,
    )
}

fn fix(text: &str, locale: &Locale) -> anyhow::Result<String> {
    let replacement = if locale.is_french() {
        format!("${{1}}{MDASH} ")
    } else {
        format!("${{1}}{MDASH}")
    };
    Ok(LINE_LEADING_HYPHEN
        .replace_all(text, replacement.as_str())
        .into_owned())
}

fn example(locale: &Locale) -> FixerExample {
    let dash = if locale.is_french() {
        format!("{MDASH} ")
    } else {
        MDASH.to_string()
    };
    FixerExample {
        before: "- Premier point\n- Deuxième point".to_string(),
        after: format!("{dash}Premier point\n{dash}Deuxième point"),
    }
}
