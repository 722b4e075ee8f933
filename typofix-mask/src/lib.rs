//! Masking: shield protected regions behind opaque placeholders.
//!
//! Fixers must never see front-matter, code, links, URLs, pattern literals
//! or template tags. [`mask_with`] swaps each such region for a placeholder
//! token, [`unmask`] restores the original bytes afterwards.
//!
//! The placeholder alphabet is uppercase ASCII, digits and underscores —
//! characters no fixer rewrites — and the prefix is extended until it does
//! not occur in the input, so a collision with document content is
//! impossible by construction rather than merely unlikely.
//!
//! Unterminated constructs (an opening fence with no closer) are left
//! unmasked: every scan pattern requires the closing delimiter, and a
//! missing closer is a document error outside this crate's responsibility.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

/// Which protection rule produced a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    FrontMatter,
    CodeBlock,
    Shortcode,
    Wikilink,
    Url,
    PatternLiteral,
    InlineCode,
    MarkdownLink,
}

impl ZoneKind {
    /// Tag embedded in the placeholder token.
    fn tag(self) -> &'static str {
        match self {
            ZoneKind::FrontMatter => "FRONTMATTER",
            ZoneKind::CodeBlock => "CODEBLOCK",
            ZoneKind::Shortcode => "SHORTCODE",
            ZoneKind::Wikilink => "WIKILINK",
            ZoneKind::Url => "URL",
            ZoneKind::PatternLiteral => "PATTERN",
            ZoneKind::InlineCode => "INLINECODE",
            ZoneKind::MarkdownLink => "MDLINK",
        }
    }
}

/// One shielded region: its placeholder and the exact original bytes.
///
/// Created during masking, read-only while fixers run, consumed by
/// [`unmask`]; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedZone {
    pub placeholder: String,
    pub content: String,
    pub kind: ZoneKind,
}

/// Result of one masking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOutcome {
    pub masked: String,
    pub zones: Vec<ProtectedZone>,
}

static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---[^\S\r\n]*\n(?s:.*?)\n---[^\S\r\n]*(?:\n|\z)")
        .expect("FRONT_MATTER pattern is valid")
});

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("CODE_FENCE pattern is valid"));

static SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{%\s+(\w+)\s+(.*?)\s+%\}").expect("SHORTCODE pattern is valid")
});

static CAPTION_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"caption:\s*"([^"]*)""#).expect("CAPTION_ATTR pattern is valid"));

static NOTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\(notes?\s*:\s*"(.*?)"\s*\)"#).expect("NOTES pattern is valid")
});

static WIKILINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("WIKILINK pattern is valid"));

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s\])}]+").expect("URL pattern is valid"));

static PATTERN_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/[^/\s]+/[gimuy]*").expect("PATTERN_LITERAL pattern is valid"));

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("INLINE_CODE pattern is valid"));

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]+\)").expect("MARKDOWN_LINK pattern is valid"));

/// Mask without correcting embedded caption/notes content.
pub fn mask(text: &str) -> MaskOutcome {
    mask_with(text, |s| s.to_string())
}

/// Mask `text`, running `correct` over the content that must be fixed even
/// though it sits inside an otherwise opaque construct: shortcode
/// `caption: "..."` attributes and inline `(notes: "...")` patterns.
pub fn mask_with<F>(text: &str, correct: F) -> MaskOutcome
where
    F: Fn(&str) -> String,
{
    let mut shield = Shield::new(text);

    // 1. Front-matter at document start. Anchored, so first match only.
    let masked = FRONT_MATTER
        .replace(text, |caps: &Captures<'_>| {
            shield.zone(ZoneKind::FrontMatter, &caps[0])
        })
        .into_owned();

    // 2. Fenced code blocks.
    let masked = CODE_FENCE
        .replace_all(&masked, |caps: &Captures<'_>| {
            shield.zone(ZoneKind::CodeBlock, &caps[0])
        })
        .into_owned();

    // 3. Template shortcodes. Captions inside the tag are corrected first,
    //    then the whole tag is shielded.
    let masked = SHORTCODE
        .replace_all(&masked, |caps: &Captures<'_>| {
            let body = CAPTION_ATTR.replace_all(&caps[2], |attr: &Captures<'_>| {
                format!(r#"caption: "{}""#, correct(&attr[1]))
            });
            let tag = format!("{{% {} {} %}}", &caps[1], body);
            shield.zone(ZoneKind::Shortcode, &tag)
        })
        .into_owned();

    // 4. Inline notes: corrected in place, not shielded, so neighbouring
    //    masking cannot split them.
    let masked = NOTES
        .replace_all(&masked, |caps: &Captures<'_>| {
            format!(r#"(notes: "{}")"#, correct(&caps[1]))
        })
        .into_owned();

    // 5. Wikilinks.
    let masked = WIKILINK
        .replace_all(&masked, |caps: &Captures<'_>| {
            shield.zone(ZoneKind::Wikilink, &caps[0])
        })
        .into_owned();

    // 6. Bare URLs.
    let masked = URL
        .replace_all(&masked, |caps: &Captures<'_>| {
            shield.zone(ZoneKind::Url, &caps[0])
        })
        .into_owned();

    // 7. Slash-delimited pattern literals.
    let masked = PATTERN_LITERAL
        .replace_all(&masked, |caps: &Captures<'_>| {
            shield.zone(ZoneKind::PatternLiteral, &caps[0])
        })
        .into_owned();

    // 8. Inline code spans.
    let masked = INLINE_CODE
        .replace_all(&masked, |caps: &Captures<'_>| {
            shield.zone(ZoneKind::InlineCode, &caps[0])
        })
        .into_owned();

    // 9. Markdown links.
    let masked = MARKDOWN_LINK
        .replace_all(&masked, |caps: &Captures<'_>| {
            shield.zone(ZoneKind::MarkdownLink, &caps[0])
        })
        .into_owned();

    let zones = shield.zones;
    debug!(zones = zones.len(), "masked protected regions");
    MaskOutcome { masked, zones }
}

/// Restore every placeholder to its original content.
///
/// Zones are restored in reverse creation order: a later zone (say a
/// Markdown link) can have swallowed the placeholder of an earlier one
/// (the URL inside it), so the outer zone must be expanded first to bring
/// the inner placeholder back into the text.
pub fn unmask(masked: &str, zones: &[ProtectedZone]) -> String {
    let mut restored = masked.to_string();
    for zone in zones.iter().rev() {
        restored = restored.replacen(&zone.placeholder, &zone.content, 1);
    }
    restored
}

/// Placeholder factory for one masking pass.
struct Shield {
    prefix: String,
    counter: usize,
    zones: Vec<ProtectedZone>,
}

impl Shield {
    fn new(text: &str) -> Self {
        let mut prefix = String::from("__TYPOFIX_SHIELD");
        // Grow until the prefix cannot occur in the input; fixers only ever
        // emit lowercase glyphs and spaces, so no later pass can mint it.
        while text.contains(&prefix) {
            prefix.push('_');
        }
        Shield {
            prefix,
            counter: 0,
            zones: Vec::new(),
        }
    }

    /// Record a zone and hand back its placeholder.
    fn zone(&mut self, kind: ZoneKind, content: &str) -> String {
        let placeholder = format!("{}_{}_{}__", self.prefix, kind.tag(), self.counter);
        self.counter += 1;
        self.zones.push(ProtectedZone {
            placeholder: placeholder.clone(),
            content: content.to_string(),
            kind,
        });
        placeholder
    }
}
