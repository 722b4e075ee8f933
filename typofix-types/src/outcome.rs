use serde::{Deserialize, Serialize};

/// Result of one `process_text_with_details` call.
///
/// Masking makes reliable per-fixer attribution impossible, so the report
/// is deliberately coarse: a single dirty flag, never a fabricated
/// per-rule breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionOutcome {
    pub original: String,
    pub corrected: String,
    pub changed: bool,
}

impl CorrectionOutcome {
    pub fn new(original: String, corrected: String) -> Self {
        let changed = original != corrected;
        CorrectionOutcome {
            original,
            corrected,
            changed,
        }
    }
}
