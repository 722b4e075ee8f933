//! The fixed character table: named Unicode code points used by the fixers.
//!
//! Every constant is a `&str` so it can be spliced directly into
//! replacement strings. Loaded once at process start; no logic lives here.

// ── spaces ───────────────────────────────────────────────────────────────

/// Narrow no-break space (U+202F), used before `;` `!` `?` `»` in French.
pub const NO_BREAK_THIN_SPACE: &str = "\u{202F}";

/// No-break space (U+00A0), used before `:` and inside guillemets.
pub const NO_BREAK_SPACE: &str = "\u{00A0}";

// ── punctuation ──────────────────────────────────────────────────────────

/// Horizontal ellipsis (U+2026), replaces `...`.
pub const ELLIPSIS: &str = "\u{2026}";

/// En dash (U+2013), for numeric ranges.
pub const NDASH: &str = "\u{2013}";

/// Em dash (U+2014), for parenthetical breaks.
pub const MDASH: &str = "\u{2014}";

// ── quotes and apostrophes ───────────────────────────────────────────────

/// Left double quotation mark (U+201C).
pub const LDQUO: &str = "\u{201C}";

/// Right double quotation mark (U+201D).
pub const RDQUO: &str = "\u{201D}";

/// Left single quotation mark (U+2018).
pub const LSQUO: &str = "\u{2018}";

/// Right single quotation mark (U+2019), the typographic apostrophe.
pub const RSQUO: &str = "\u{2019}";

/// Left-pointing guillemet (U+00AB).
pub const LAQUO: &str = "\u{00AB}";

/// Right-pointing guillemet (U+00BB).
pub const RAQUO: &str = "\u{00BB}";

// ── math symbols ─────────────────────────────────────────────────────────

/// Multiplication sign (U+00D7), replaces `x`/`*` between numbers.
pub const TIMES: &str = "\u{00D7}";

/// Division sign (U+00F7).
pub const DIVIDE: &str = "\u{00F7}";

/// Plus-minus sign (U+00B1).
pub const PLUS_MINUS: &str = "\u{00B1}";

// ── trademark symbols ────────────────────────────────────────────────────

/// Trade mark sign (U+2122), replaces `(tm)`.
pub const TRADE: &str = "\u{2122}";

/// Registered sign (U+00AE), replaces `(r)`.
pub const REG: &str = "\u{00AE}";

/// Copyright sign (U+00A9), replaces `(c)`.
pub const COPY: &str = "\u{00A9}";

// ── other symbols ────────────────────────────────────────────────────────

/// Degree sign (U+00B0).
pub const DEGREE: &str = "\u{00B0}";

/// Prime (U+2032): minutes, feet.
pub const PRIME: &str = "\u{2032}";

/// Double prime (U+2033): seconds, inches.
pub const DOUBLE_PRIME: &str = "\u{2033}";

/// Section sign (U+00A7).
pub const SECTION: &str = "\u{00A7}";

/// Pilcrow (U+00B6).
pub const PARAGRAPH: &str = "\u{00B6}";
