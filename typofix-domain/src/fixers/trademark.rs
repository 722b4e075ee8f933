//! `(c)`, `(r)` and `(tm)` become ©, ® and ™.
//!
//! A match sitting in a URL-ish or slash-delimited context is left alone;
//! `(c)` inside a path segment is almost never a copyright mark.

use super::{Fixer, FixerExample, FixerMeta};
use regex::Regex;
use std::sync::LazyLock;
use typofix_chars::{COPY, REG, TRADE};
use typofix_types::{FixerCategory, Locale};

static COPYRIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([cC]\)").expect("COPYRIGHT pattern is valid"));

static REGISTERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([rR]\)").expect("REGISTERED pattern is valid"));

static TRADEMARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(tm\)").expect("TRADEMARK pattern is valid"));

/// How far around a match the context guard looks.
const CONTEXT_WINDOW: usize = 20;

pub fn fixer() -> Fixer {
    Fixer::new(
        FixerMeta {
            id: "trademark",
            name: "Trademark symbols",
            description: "Converts (c) → ©, (r) → ®, (tm) → ™",
            category: FixerCategory::Symbols,
            priority: 9,
            default_enabled: true,
            locale_sensitive: false,
        },
        fix,
        None,
        example,
    )
}

fn fix(text: &str, _locale: &Locale) -> anyhow::Result<String> {
    let out = replace_guarded(text, &COPYRIGHT, COPY);
    let out = replace_guarded(&out, &REGISTERED, REG);
    Ok(replace_guarded(&out, &TRADEMARK, TRADE))
}

fn replace_guarded(text: &str, re: &Regex, symbol: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in re.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if in_protected_context(text, m.start(), m.end()) {
            out.push_str(m.as_str());
        } else {
            out.push_str(symbol);
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

fn in_protected_context(text: &str, start: usize, end: usize) -> bool {
    let before = window_before(text, start);
    let after = window_after(text, end);

    if before.contains("http") || before.contains("www.") {
        return true;
    }
    // Slash on both sides: a path segment or pattern literal.
    before.contains('/') && after.contains('/')
}

fn window_before(text: &str, start: usize) -> &str {
    let mut lo = start.saturating_sub(CONTEXT_WINDOW);
    while !text.is_char_boundary(lo) {
        lo += 1;
    }
    &text[lo..start]
}

fn window_after(text: &str, end: usize) -> &str {
    let mut hi = (end + CONTEXT_WINDOW).min(text.len());
    while !text.is_char_boundary(hi) {
        hi -= 1;
    }
    &text[end..hi]
}

fn example(_locale: &Locale) -> FixerExample {
    FixerExample {
        before: "Microsoft (c) 2025, iPhone (r), Google Search (tm)".to_string(),
        after: format!("Microsoft {COPY} 2025, iPhone {REG}, Google Search {TRADE}"),
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
    fn converts_all_three_marks() {
        assert_eq!(fix("Example (c) 2024"), "Example © 2024");
        assert_eq!(fix("Brand (R)"), "Brand ®");
        assert_eq!(fix("Name (TM) and (tm)"), "Name ™ and ™");
    }

    #[test]
    fn urls_are_left_alone() {
        let text = "see http://example.com/(c)page";
        assert_eq!(fix(text), text);

        let text = "at www.site.org/(r)";
        assert_eq!(fix(text), text);
    }

    #[test]
    fn slash_delimited_contexts_are_left_alone() {
        let text = "path /usr/(c)/share/ here";
        assert_eq!(fix(text), text);
    }

    #[test]
    fn prose_next_to_a_url_still_converts() {
        assert_eq!(
            fix("Copyright (c) 2024.\nDocs: later"),
            "Copyright © 2024.\nDocs: later"
        );
    }

    #[test]
    fn idempotent() {
        let once = fix("Acme (c) 2024 (tm)");
        assert_eq!(fix(&once), once);
    }
}
