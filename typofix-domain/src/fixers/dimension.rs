//! `x`/`X`/`*` between numeric tokens becomes the multiplication sign.
//!
//! Operands may carry a unit suffix (`12cm x 34cm`), including one already
//! separated by a no-break space, so this rule composes with the unit
//! fixer in either order. The three-term chain is matched before the
//! two-term form, and both iterate to a fixpoint so long chains resolve in
//! a single call.

use super::{Fixer, FixerExample, FixerMeta, replace_to_fixpoint};
use regex::Regex;
use std::sync::LazyLock;
use typofix_chars::TIMES;
use typofix_types::{FixerCategory, Locale};

/// A number, optionally followed by a unit word.
const OPERAND: &str = r"\d+(?:[,.]?\d+)?(?:[^\S\r\n]?[a-zA-Z]+)?";

static THREE_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"({OPERAND})[^\S\r\n]*[xX][^\S\r\n]*({OPERAND})[^\S\r\n]*[xX][^\S\r\n]*({OPERAND})"
    ))
    .expect("THREE_TERM pattern is valid")
});

static TWO_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"({OPERAND})[^\S\r\n]*[xX][^\S\r\n]*({OPERAND})"
    ))
    .expect("TWO_TERM pattern is valid")
});

static STAR_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"({OPERAND})[^\S\r\n]*\*[^\S\r\n]*({OPERAND})"
    ))
    .expect("STAR_TERM pattern is valid")
});

pub fn fixer() -> Fixer {
    Fixer::new(
        FixerMeta {
            id: "dimension",
            name: "Multiplication sign",
            description: "Converts x and * between numbers to × (12 x 34 → 12×34)",
            category: FixerCategory::Spacing,
            priority: 8,
            default_enabled: true,
            locale_sensitive: false,
        },
        fix,
        None,
        example,
    )
}

fn fix(text: &str, _locale: &Locale) -> anyhow::Result<String> {
    let three = format!("${{1}}{TIMES}${{2}}{TIMES}${{3}}");
    let two = format!("${{1}}{TIMES}${{2}}");

    let out = replace_to_fixpoint(&THREE_TERM, &three, text);
    let out = replace_to_fixpoint(&TWO_TERM, &two, &out);
    Ok(replace_to_fixpoint(&STAR_TERM, &two, &out))
}

fn example(_locale: &Locale) -> FixerExample {
    let t = TIMES;
    FixerExample {
        before: "Résolution: 1920 x 1080, format 16 * 9, boîte 12cm x 34cm x 56cm".to_string(),
        after: format!(
            "Résolution: 1920{t}1080, format 16{t}9, boîte 12cm{t}34cm{t}56cm"
        ),
    }
}
