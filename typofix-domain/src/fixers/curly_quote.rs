//! Straight apostrophes after a letter become the typographic apostrophe.
//!
//! Deliberately narrower than the smart-quotes apostrophe step: ASCII
//! letters only, matching the JoliTypo CurlyQuote rule it is modeled on.
//! Both rules are enabled by default; double application is harmless.

use super::{Fixer, FixerExample, FixerMeta};
use crate::keystroke::{Keystroke, KeystrokeEdit};
use regex::Regex;
use std::sync::LazyLock;
use typofix_chars::RSQUO;
use typofix_types::{FixerCategory, Locale};

static LETTER_APOSTROPHE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([a-z])'").expect("LETTER_APOSTROPHE pattern is valid"));

pub fn fixer() -> Fixer {
    Fixer::new(
        FixerMeta {
            id: "curly-quote",
            name: "Curly apostrophes",
            description: "Converts straight apostrophes after a letter to ’",
            category: FixerCategory::Quotes,
            priority: 5,
            default_enabled: true,
            locale_sensitive: false,
        },
        fix,
        Some(keystroke),
        example,
    )
}

fn fix(text: &str, _locale: &Locale) -> anyhow::Result<String> {
    let replacement = format!("${{1}}{RSQUO}");
    Ok(LETTER_APOSTROPHE
        .replace_all(text, replacement.as_str())
        .into_owned())
}

fn keystroke(
    keystroke: &Keystroke,
    line_before_cursor: &str,
    _locale: &Locale,
) -> Option<KeystrokeEdit> {
    if !keystroke.is("'") {
        return None;
    }
    let last = line_before_cursor.chars().next_back()?;
    if !last.is_ascii_alphabetic() {
        return None;
    }
    Some(KeystrokeEdit::at_end(format!(
        "{line_before_cursor}{RSQUO}"
    )))
}

fn example(_locale: &Locale) -> FixerExample {
    FixerExample {
        before: "I'm happy, you're great, it's working!".to_string(),
        after: format!("I{r}m happy, you{r}re great, it{r}s working!", r = RSQUO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fix(text: &str) -> String {
        super::fix(text, &Locale::default()).unwrap()
    }

    #[test]
    fn curls_after_letters_of_either_case() {
        assert_eq!(fix("l'ami"), "l’ami");
        assert_eq!(fix("O'Brien"), "O’Brien");
    }

    #[test]
    fn leaves_other_apostrophes() {
        assert_eq!(fix("'tis"), "'tis");
        assert_eq!(fix("1'000"), "1'000");
        assert_eq!(fix("rock 'n"), "rock 'n");
    }

    #[test]
    fn idempotent() {
        let once = fix("c'est l'heure");
        assert_eq!(fix(&once), once);
    }

    #[test]
    fn apostrophe_after_letter_is_intercepted() {
        let edit = fixer()
            .handle_keystroke(&Keystroke::plain("'"), "c")
            .expect("intercepted");
        assert_eq!(edit.line_before_cursor, "c’");
    }

    #[test]
    fn apostrophe_after_space_passes_through() {
        assert!(
            fixer()
                .handle_keystroke(&Keystroke::plain("'"), "dit ")
                .is_none()
        );
    }
}
