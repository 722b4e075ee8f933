//! Straight double quotes become locale-appropriate typographic quotes.
//!
//! Straight quotes carry no direction, so occurrences alternate open/close
//! across the whole text, not per line. French locales get guillemets with
//! no-break-space padding; everything else gets curly double quotes.

use super::{Fixer, FixerExample, FixerMeta};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use typofix_chars::{LAQUO, LDQUO, NO_BREAK_SPACE, RAQUO, RDQUO, RSQUO};
use typofix_types::{FixerCategory, Locale};

static STRAIGHT_DQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\"").expect("STRAIGHT_DQUOTE pattern is valid"));

static APOSTROPHE_AFTER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)'").expect("APOSTROPHE_AFTER_WORD pattern is valid"));

pub fn fixer() -> Fixer {
    Fixer::new(
        FixerMeta {
            id: "smart-quotes",
            name: "Smart quotes",
            description: "Converts straight quotes to guillemets or curly quotes",
            category: FixerCategory::Quotes,
            priority: 4,
            default_enabled: true,
            locale_sensitive: true,
        },
        fix,
        None,
        example,
    )
}

fn fix(text: &str, locale: &Locale) -> anyhow::Result<String> {
    let french = locale.is_french();
    let mut open = false;
    let quoted = STRAIGHT_DQUOTE.replace_all(text, |_: &Captures<'_>| {
        open = !open;
        match (open, french) {
            (true, true) => format!("{LAQUO}{NO_BREAK_SPACE}"),
            (false, true) => format!("{NO_BREAK_SPACE}{RAQUO}"),
            (true, false) => LDQUO.to_string(),
            (false, false) => RDQUO.to_string(),
        }
    });

    let apostrophe = format!("${{1}}{RSQUO}");
    Ok(APOSTROPHE_AFTER_WORD
        .replace_all(&quoted, apostrophe.as_str())
        .into_owned())
}

fn example(locale: &Locale) -> FixerExample {
    if locale.is_french() {
        FixerExample {
            before: "Il a dit \"Bonjour\" et c'est parti.".to_string(),
            after: format!(
                "Il a dit {LAQUO}{n}Bonjour{n}{RAQUO} et c{RSQUO}est parti.",
                n = NO_BREAK_SPACE
            ),
        }
    } else {
        FixerExample {
            before: "He said \"Hello\" and it's done.".to_string(),
            after: format!("He said {LDQUO}Hello{RDQUO} and it{RSQUO}s done."),
        }
    }
}
