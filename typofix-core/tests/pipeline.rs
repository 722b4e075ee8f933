//! End-to-end pipeline behavior: masking, priority ordering, configuration
//! gates, and the documented correction outcomes.

use pretty_assertions::assert_eq;
use typofix_core::{Engine, Keystroke, cursor_in_protected_zone};
use typofix_domain::builtin_fixers;
use typofix_types::TypographySettings;

fn engine(locale: &str) -> Engine {
    Engine::new(TypographySettings::for_locale(locale))
}

#[test]
fn priority_ordering_applies_all_rules_in_one_pass() {
    let engine = engine("fr_FR");
    assert_eq!(
        engine.process_text("2020-2024 -- ...encore..."),
        "2020–2024 — …encore…"
    );
}

#[test]
fn fenced_code_survives_byte_for_byte() {
    let engine = engine("fr_FR");
    let doc = "Avant...\n```rust\nlet s = \"a -- b ... c\";\n```\nApres...";
    let out = engine.process_text(doc);
    assert!(out.contains("let s = \"a -- b ... c\";"));
    assert!(out.starts_with("Avant…"));
    assert!(out.ends_with("Apres…"));
}

#[test]
fn front_matter_survives_byte_for_byte() {
    let engine = engine("fr_FR");
    let doc = "---\ntitle: \"Un titre...\"\ndate: 2020-2024\n---\nTexte...";
    let out = engine.process_text(doc);
    assert!(out.starts_with("---\ntitle: \"Un titre...\"\ndate: 2020-2024\n---\n"));
    assert!(out.ends_with("Texte…"));
}

#[test]
fn urls_survive_and_neighbouring_prose_is_corrected() {
    let engine = engine("fr_FR");
    let doc = "Voir https://exemple.fr/a--b...c et ensuite...";
    let out = engine.process_text(doc);
    assert!(out.contains("https://exemple.fr/a--b...c"));
    assert!(out.ends_with("ensuite…"));
}

#[test]
fn inline_code_and_wikilinks_survive() {
    let engine = engine("fr_FR");
    let doc = "La commande `ls -- tout...` et [[Note|Mon alias...]] restent.";
    let out = engine.process_text(doc);
    assert!(out.contains("`ls -- tout...`"));
    assert!(out.contains("[[Note|Mon alias...]]"));
}

#[test]
fn disabled_rule_is_equivalent_to_unregistered_rule() {
    let doc = "Attends... 2020-2024 \"fin\"";

    let mut toggled = engine("fr_FR");
    assert!(toggled.toggle_fixer("ellipsis", false));

    let without = Engine::with_fixers(
        builtin_fixers()
            .into_iter()
            .filter(|f| f.id() != "ellipsis")
            .collect(),
        TypographySettings::for_locale("fr_FR"),
    );

    assert_eq!(toggled.process_text(doc), without.process_text(doc));
}

#[test]
fn locale_branching_through_the_whole_pipeline() {
    let doc = "Il a dit \"Bonjour\".";
    assert_eq!(
        engine("fr_FR").process_text(doc),
        "Il a dit «\u{00A0}Bonjour\u{00A0}»."
    );
    assert_eq!(engine("en_GB").process_text(doc), "Il a dit “Bonjour”.");
}

#[test]
fn unit_spacing_skips_heading_markers() {
    let engine = engine("en_GB");
    assert_eq!(engine.process_text("# 1h"), "# 1h");
    assert_eq!(engine.process_text("Durée: 2h"), "Durée: 2\u{00A0}h");
}

#[test]
fn trademark_conversion_is_suppressed_inside_urls() {
    let engine = engine("en_GB");
    let doc = "see http://example.com/(c)page";
    assert_eq!(engine.process_text(doc), doc);
    assert_eq!(
        engine.process_text("Example (c) 2024"),
        "Example © 2024"
    );
}

#[test]
fn shortcode_captions_are_corrected_while_the_tag_is_shielded() {
    let engine = engine("fr_FR");
    let doc = r#"{% image src="a--b.png" caption: "Un essai..." %}"#;
    assert_eq!(
        engine.process_text(doc),
        r#"{% image src="a--b.png" caption: "Un essai…" %}"#
    );
}

#[test]
fn notes_content_is_corrected_in_place() {
    // The construct itself stays visible to the fixers, so use a locale
    // and rule set that leave its punctuation untouched.
    let mut engine = engine("en_GB");
    engine.toggle_fixer("smart-quotes", false);
    assert_eq!(
        engine.process_text(r#"fin (notes: "to be continued...")"#),
        r#"fin (notes: "to be continued…")"#
    );
}

#[test]
fn placeholder_shaped_document_text_round_trips() {
    let engine = engine("fr_FR");
    let doc = "__TYPOFIX_SHIELD_URL_0__ voir https://exemple.fr puis...";
    let out = engine.process_text(doc);
    assert!(out.starts_with("__TYPOFIX_SHIELD_URL_0__"));
    assert!(out.contains("https://exemple.fr"));
    assert!(out.ends_with("puis…"));
}

#[test]
fn details_report_a_boolean_dirty_flag_only() {
    let engine = engine("fr_FR");

    let dirty = engine.process_text_with_details("Eh bien...");
    assert!(dirty.changed);
    assert_eq!(dirty.corrected, "Eh bien…");

    let clean = engine.process_text_with_details("Rien de neuf");
    assert!(!clean.changed);
    assert_eq!(clean.original, clean.corrected);
}

#[test]
fn keystroke_dispatch_combines_with_the_cursor_check() {
    let engine = engine("fr_FR");
    let doc = "Prose libre..\n```\nlet x = 1..\n```";

    // Inside the fence: the host reports protection, nothing intercepts.
    let protected = cursor_in_protected_zone(doc, 2, 11);
    assert!(protected);
    assert!(
        engine
            .dispatch_keystroke(&Keystroke::plain("."), "let x = 1..", protected)
            .is_none()
    );

    // In prose: the ellipsis rule claims the third dot.
    let protected = cursor_in_protected_zone(doc, 0, 12);
    assert!(!protected);
    let edit = engine
        .dispatch_keystroke(&Keystroke::plain("."), "Prose libre..", protected)
        .expect("intercepted");
    assert_eq!(edit.line_before_cursor, "Prose libre…");
}

#[test]
fn engine_is_idempotent_end_to_end() {
    let engine = engine("fr_FR");
    let doc = "Il a dit \"Oui...\" -- 2020-2024, 50 % et 12 x 34 !";
    let once = engine.process_text(doc);
    assert_eq!(engine.process_text(&once), once);
}
