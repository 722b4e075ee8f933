//! The correction engine: fixer registry, configuration sync, and the
//! mask → fix → unmask pipeline.

use tracing::{debug, warn};
use typofix_domain::{Fixer, Keystroke, KeystrokeEdit, builtin_fixers};
use typofix_mask::{mask_with, unmask};
use typofix_types::{CorrectionOutcome, FixerCategory, TypographySettings};

/// Fixer ids the reset-to-defaults essential set keeps for French locales.
const FRENCH_ESSENTIALS: &[&str] = &["ellipsis", "dash", "french-spacing", "smart-quotes", "comma"];

/// Fixer ids the reset-to-defaults essential set keeps elsewhere.
const ENGLISH_ESSENTIALS: &[&str] = &["ellipsis", "dash", "smart-quotes", "comma"];

/// Owns the fixer registry and the current configuration.
///
/// Stateless between calls apart from those two: no per-document session
/// state survives a `process_text` invocation. The engine expects a single
/// logical thread of control; the host serializes configuration changes
/// against text processing.
pub struct Engine {
    /// Registration order is the tie-break for equal priorities.
    fixers: Vec<Fixer>,
    settings: TypographySettings,
}

impl Engine {
    /// An engine with the builtin rule set, configured from `settings`.
    pub fn new(settings: TypographySettings) -> Self {
        Self::with_fixers(builtin_fixers(), settings)
    }

    pub fn with_fixers(fixers: Vec<Fixer>, settings: TypographySettings) -> Self {
        let mut engine = Engine {
            fixers,
            settings: TypographySettings::default(),
        };
        engine.set_configuration(&settings);
        engine
    }

    /// Add a fixer; a duplicate id replaces the prior registration in
    /// place, keeping its position in the tie-break order.
    pub fn register_fixer(&mut self, mut fixer: Fixer) {
        sync_fixer(&self.settings, &mut fixer);
        match self.fixers.iter_mut().find(|f| f.id() == fixer.id()) {
            Some(slot) => *slot = fixer,
            None => self.fixers.push(fixer),
        }
    }

    /// Swap in a new configuration and re-sync every fixer.
    ///
    /// Idempotent; no side effects beyond state assignment. Bad data is
    /// sanitized here (unknown locale → default), never rejected.
    pub fn set_configuration(&mut self, settings: &TypographySettings) {
        self.settings = settings.sanitized();
        for fixer in &mut self.fixers {
            sync_fixer(&self.settings, fixer);
        }
    }

    pub fn settings(&self) -> &TypographySettings {
        &self.settings
    }

    /// All fixers, ascending priority, stable on registration order.
    pub fn fixers(&self) -> Vec<&Fixer> {
        let mut fixers: Vec<&Fixer> = self.fixers.iter().collect();
        fixers.sort_by_key(|f| f.priority());
        fixers
    }

    /// Enabled fixers only, in execution order.
    pub fn enabled_fixers(&self) -> Vec<&Fixer> {
        self.fixers()
            .into_iter()
            .filter(|f| f.enabled())
            .collect()
    }

    pub fn fixer(&self, id: &str) -> Option<&Fixer> {
        self.fixers.iter().find(|f| f.id() == id)
    }

    pub fn fixers_by_category(&self, category: FixerCategory) -> Vec<&Fixer> {
        self.fixers()
            .into_iter()
            .filter(|f| f.category() == category)
            .collect()
    }

    /// Enable or disable one fixer. Returns false for an unknown id.
    pub fn toggle_fixer(&mut self, id: &str, enabled: bool) -> bool {
        let Some(fixer) = self.fixers.iter_mut().find(|f| f.id() == id) else {
            return false;
        };
        fixer.set_enabled(enabled);
        self.settings.fixers.insert(id.to_string(), enabled);
        true
    }

    /// Enable or disable every fixer in a category. Returns how many were
    /// affected.
    pub fn toggle_category(&mut self, category: FixerCategory, enabled: bool) -> usize {
        let mut count = 0;
        for fixer in self.fixers.iter_mut().filter(|f| f.category() == category) {
            fixer.set_enabled(enabled);
            self.settings
                .fixers
                .insert(fixer.id().to_string(), enabled);
            count += 1;
        }
        count
    }

    /// Restore the locale-dependent essential set.
    pub fn reset_to_defaults(&mut self) {
        let essentials: &[&str] = if self.settings.locale.is_french() {
            FRENCH_ESSENTIALS
        } else {
            ENGLISH_ESSENTIALS
        };
        for fixer in &mut self.fixers {
            let enabled = essentials.contains(&fixer.id());
            fixer.set_enabled(enabled);
            self.settings
                .fixers
                .insert(fixer.id().to_string(), enabled);
        }
    }

    /// Batch-correct a document: mask once, fold the enabled fixers over
    /// the masked text, unmask once.
    pub fn process_text(&self, text: &str) -> String {
        let outcome = mask_with(text, |inner| self.apply_fixers(inner));
        let corrected = self.apply_fixers(&outcome.masked);
        unmask(&corrected, &outcome.zones)
    }

    /// [`Self::process_text`] plus a coarse dirty flag.
    pub fn process_text_with_details(&self, text: &str) -> CorrectionOutcome {
        let corrected = self.process_text(text);
        CorrectionOutcome::new(text.to_string(), corrected)
    }

    /// Offer a keystroke to the enabled fixers in priority order.
    ///
    /// Returns `None` when real-time correction is off, when the host
    /// determined the cursor sits inside a protected construct, or when no
    /// fixer claims the key. First claim wins.
    pub fn dispatch_keystroke(
        &self,
        keystroke: &Keystroke,
        line_before_cursor: &str,
        cursor_protected: bool,
    ) -> Option<KeystrokeEdit> {
        if !self.settings.enable_real_time_correction || cursor_protected {
            return None;
        }
        for fixer in self.enabled_fixers() {
            if let Some(edit) = fixer.handle_keystroke(keystroke, line_before_cursor) {
                debug!(fixer = fixer.id(), "keystroke intercepted");
                return Some(edit);
            }
        }
        None
    }

    /// Fold the enabled fixers over `text` in priority order.
    ///
    /// A fixer that errors is skipped — its input passes through unchanged
    /// and the failure is logged. One bad rule never aborts or corrupts the
    /// whole document.
    fn apply_fixers(&self, text: &str) -> String {
        let mut out = text.to_string();
        for fixer in self.enabled_fixers() {
            match fixer.fix(&out) {
                Ok(fixed) => out = fixed,
                Err(error) => {
                    warn!(fixer = fixer.id(), %error, "fixer failed; skipping");
                }
            }
        }
        out
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(TypographySettings::default())
    }
}

fn sync_fixer(settings: &TypographySettings, fixer: &mut Fixer) {
    if let Some(enabled) = settings.fixer_enabled(fixer.id()) {
        fixer.set_enabled(enabled);
    }
    fixer.set_locale(&settings.locale);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use typofix_types::Locale;

    fn engine_for(locale: &str) -> Engine {
        Engine::new(TypographySettings::for_locale(locale))
    }

    #[test]
    fn enabled_fixers_are_priority_ordered() {
        let engine = Engine::default();
        let priorities: Vec<u8> = engine.enabled_fixers().iter().map(|f| f.priority()).collect();
        let mut sorted = priorities.clone();
        sorted.sort_unstable();
        assert_eq!(priorities, sorted);
        assert!(engine.enabled_fixers().iter().all(|f| f.id() != "hyphen"));
    }

    #[test]
    fn set_configuration_syncs_enabled_and_locale() {
        let mut engine = Engine::default();
        let mut settings = TypographySettings::for_locale("en_GB");
        settings.fixers.insert("dash".to_string(), false);
        engine.set_configuration(&settings);

        assert!(!engine.fixer("dash").unwrap().enabled());
        assert_eq!(engine.fixer("smart-quotes").unwrap().locale().as_str(), "en_GB");
    }

    #[test]
    fn set_configuration_sanitizes_unknown_locale() {
        let mut engine = Engine::default();
        let mut settings = TypographySettings::default();
        settings.locale = Locale::new("xx_XX");
        engine.set_configuration(&settings);
        assert_eq!(engine.settings().locale, Locale::default());
    }

    #[test]
    fn unknown_fixer_ids_in_settings_are_ignored() {
        let mut settings = TypographySettings::default();
        settings.fixers.insert("imaginary".to_string(), true);
        let engine = Engine::new(settings);
        assert!(engine.fixer("imaginary").is_none());
        assert!(engine.fixer("ellipsis").is_some());
    }

    #[test]
    fn register_fixer_replaces_duplicates_in_place() {
        let mut engine = Engine::default();
        let count = engine.fixers().len();

        let replacement = builtin_fixers()
            .into_iter()
            .find(|f| f.id() == "ellipsis")
            .unwrap();
        engine.register_fixer(replacement);
        assert_eq!(engine.fixers().len(), count);
    }

    #[test]
    fn toggle_fixer_and_category() {
        let mut engine = Engine::default();
        assert!(engine.toggle_fixer("ellipsis", false));
        assert!(!engine.fixer("ellipsis").unwrap().enabled());
        assert!(!engine.toggle_fixer("imaginary", true));

        let affected = engine.toggle_category(FixerCategory::Quotes, false);
        assert_eq!(affected, 2);
        assert!(!engine.fixer("smart-quotes").unwrap().enabled());
        assert!(!engine.fixer("curly-quote").unwrap().enabled());
    }

    #[test]
    fn reset_to_defaults_uses_locale_essentials() {
        let mut engine = engine_for("fr_FR");
        engine.toggle_fixer("trademark", true);
        engine.reset_to_defaults();
        assert!(engine.fixer("french-spacing").unwrap().enabled());
        assert!(!engine.fixer("trademark").unwrap().enabled());

        let mut engine = engine_for("en_GB");
        engine.reset_to_defaults();
        assert!(!engine.fixer("french-spacing").unwrap().enabled());
        assert!(engine.fixer("smart-quotes").unwrap().enabled());
    }

    #[test]
    fn keystroke_dispatch_respects_gates() {
        let engine = engine_for("fr_FR");
        let dot = Keystroke::plain(".");

        assert!(engine.dispatch_keystroke(&dot, "Eh..", false).is_some());
        assert!(engine.dispatch_keystroke(&dot, "Eh..", true).is_none());

        let mut settings = TypographySettings::for_locale("fr_FR");
        settings.enable_real_time_correction = false;
        let engine = Engine::new(settings);
        assert!(engine.dispatch_keystroke(&dot, "Eh..", false).is_none());
    }

    #[test]
    fn keystroke_dispatch_first_claim_wins() {
        let engine = engine_for("fr_FR");
        // Both dash (priority 2) and hyphen-style rules could care about
        // "-"; the lowest priority claimant answers.
        let edit = engine
            .dispatch_keystroke(&Keystroke::plain("-"), "donc -", false)
            .expect("intercepted");
        assert!(edit.line_before_cursor.ends_with(" — "));
    }
}
