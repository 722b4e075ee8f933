//! French no-break spacing rules for tall punctuation and guillemets.
//!
//! Only active under `fr*` locales; other locales pass through untouched.
//! A position already carrying a no-break space (plain or narrow) is
//! considered correctly spaced and left alone, so this rule never fights
//! the guillemet padding the smart-quotes rule emits.

use super::{Fixer, FixerExample, FixerMeta, replace_to_fixpoint};
use crate::keystroke::{Keystroke, KeystrokeEdit};
use regex::Regex;
use std::sync::LazyLock;
use typofix_chars::{NO_BREAK_SPACE, NO_BREAK_THIN_SPACE};
use typofix_types::{FixerCategory, Locale};

static BEFORE_TALL_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*([;!?»])").expect("BEFORE_TALL_PUNCT pattern is valid"));

static BEFORE_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*(:)").expect("BEFORE_COLON pattern is valid"));

static AFTER_LAQUO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"«[ \t]*").expect("AFTER_LAQUO pattern is valid"));

static DIGIT_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d)[^\S\r\n]+(\d{3})\b").expect("DIGIT_GROUP pattern is valid")
});

pub fn fixer() -> Fixer {
    Fixer::new(
        FixerMeta {
            id: "french-spacing",
            name: "French spacing",
            description: "Inserts no-break spaces around French punctuation and guillemets",
            category: FixerCategory::Spacing,
            priority: 3,
            default_enabled: true,
            locale_sensitive: true,
        },
        fix,
        Some(keystroke),
        example,
    )
}

fn fix(text: &str, locale: &Locale) -> anyhow::Result<String> {
    if !locale.is_french() {
        return Ok(text.to_string());
    }

    let out = space_before(text, &BEFORE_TALL_PUNCT, NO_BREAK_THIN_SPACE);
    let out = space_before(&out, &BEFORE_COLON, NO_BREAK_SPACE);
    let out = space_after_laquo(&out);
    // Grouped figures can chain (10 000 000).
    let grouped = format!("${{1}}{NO_BREAK_THIN_SPACE}${{2}}");
    Ok(replace_to_fixpoint(&DIGIT_GROUP, &grouped, &out))
}

/// Normalize the breakable whitespace before each match of `re` to the
/// given no-break space. A punctuation mark already preceded by a no-break
/// space (plain or narrow) is correctly spaced and copied through.
fn space_before(text: &str, re: &Regex, space: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let m = caps.get(0).expect("group 0 always participates");
        out.push_str(&text[last..m.start()]);
        if already_spaced(text[..m.start()].chars().next_back()) {
            out.push_str(m.as_str());
        } else {
            out.push_str(space);
            out.push_str(&caps[1]);
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Same idea after `«`: only breakable whitespace is rewritten.
fn space_after_laquo(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in AFTER_LAQUO.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if already_spaced(text[m.end()..].chars().next()) {
            out.push_str(m.as_str());
        } else {
            out.push('«');
            out.push_str(NO_BREAK_SPACE);
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

fn already_spaced(neighbour: Option<char>) -> bool {
    matches!(neighbour, Some('\u{00A0}') | Some('\u{202F}'))
}

fn keystroke(
    keystroke: &Keystroke,
    line_before_cursor: &str,
    locale: &Locale,
) -> Option<KeystrokeEdit> {
    if !locale.is_french() {
        return None;
    }
    let space = match keystroke.key.as_str() {
        "!" | "?" | ";" => NO_BREAK_THIN_SPACE,
        ":" => NO_BREAK_SPACE,
        _ => return None,
    };
    // Any pending space is replaced by the no-break one.
    let stem = line_before_cursor.trim_end_matches(char::is_whitespace);
    Some(KeystrokeEdit::at_end(format!(
        "{stem}{space}{}",
        keystroke.key
    )))
}

fn example(_locale: &Locale) -> FixerExample {
    FixerExample {
        before: "Bonjour ! Comment allez-vous ? Très bien ; merci.".to_string(),
        after: format!(
            "Bonjour{t}! Comment allez-vous{t}? Très bien{t}; merci.",
            t = NO_BREAK_THIN_SPACE
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fix_fr(text: &str) -> String {
        super::fix(text, &Locale::default()).unwrap()
    }

    #[test]
    fn thin_space_before_tall_punctuation() {
        assert_eq!(fix_fr("Quoi ?"), "Quoi\u{202F}?");
        assert_eq!(fix_fr("Non!"), "Non\u{202F}!");
        assert_eq!(fix_fr("ainsi ;"), "ainsi\u{202F};");
    }

    #[test]
    fn nbsp_before_colon_and_after_opening_guillemet() {
        assert_eq!(fix_fr("Note : lire"), "Note\u{00A0}: lire");
        assert_eq!(fix_fr("« citation"), "«\u{00A0}citation");
        assert_eq!(fix_fr("citation »"), "citation\u{202F}»");
    }

    #[test]
    fn existing_no_break_spacing_is_respected() {
        // Guillemets already padded by the smart-quotes rule stay exactly
        // as they are.
        assert_eq!(fix_fr("«\u{00A0}mot\u{00A0}»"), "«\u{00A0}mot\u{00A0}»");
        assert_eq!(fix_fr("fin\u{202F}!"), "fin\u{202F}!");
    }

    #[test]
    fn digit_groups_are_tightened() {
        assert_eq!(fix_fr("1 000 habitants"), "1\u{202F}000 habitants");
        assert_eq!(fix_fr("10 000 000"), "10\u{202F}000\u{202F}000");
        // Two independent numbers are not a grouped figure.
        assert_eq!(fix_fr("2024 2025"), "2024 2025");
    }

    #[test]
    fn never_joins_lines() {
        assert_eq!(fix_fr("ligne\n! suite"), "ligne\n\u{202F}! suite");
    }

    #[test]
    fn inactive_outside_french() {
        let text = "Quoi ? « oui » : non";
        assert_eq!(super::fix(text, &Locale::new("en_GB")).unwrap(), text);
    }

    #[test]
    fn idempotent() {
        let once = fix_fr("Eh bien ! Note : 1 000 « mots »");
        assert_eq!(fix_fr(&once), once);
    }

    #[test]
    fn punctuation_keystroke_replaces_pending_space() {
        let edit = fixer()
            .handle_keystroke(&Keystroke::plain("?"), "Comment ")
            .expect("intercepted");
        assert_eq!(edit.line_before_cursor, "Comment\u{202F}?");

        let edit = fixer()
            .handle_keystroke(&Keystroke::plain(":"), "Note")
            .expect("intercepted");
        assert_eq!(edit.line_before_cursor, "Note\u{00A0}:");
    }

    #[test]
    fn keystrokes_pass_through_outside_french() {
        let mut fixer = fixer();
        fixer.set_locale(&Locale::new("en_GB"));
        assert!(
            fixer
                .handle_keystroke(&Keystroke::plain("?"), "Why ")
                .is_none()
        );
    }
}
