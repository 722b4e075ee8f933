use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grouping of fixers, used for bulk enable/disable only.
///
/// Categories never influence execution order; that is controlled solely
/// by each fixer's priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixerCategory {
    Punctuation,
    Spacing,
    Quotes,
    Symbols,
}

impl FixerCategory {
    pub const ALL: [FixerCategory; 4] = [
        FixerCategory::Punctuation,
        FixerCategory::Spacing,
        FixerCategory::Quotes,
        FixerCategory::Symbols,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FixerCategory::Punctuation => "punctuation",
            FixerCategory::Spacing => "spacing",
            FixerCategory::Quotes => "quotes",
            FixerCategory::Symbols => "symbols",
        }
    }
}

impl fmt::Display for FixerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixerCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "punctuation" => Ok(FixerCategory::Punctuation),
            "spacing" => Ok(FixerCategory::Spacing),
            "quotes" => Ok(FixerCategory::Quotes),
            "symbols" => Ok(FixerCategory::Symbols),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Returned when parsing an unrecognized category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fixer category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
