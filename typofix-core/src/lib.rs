//! Embeddable correction engine for typofix.
//!
//! Host-agnostic and I/O-free: the engine reads a configuration object,
//! rewrites strings, and judges keystrokes. It never calls back into an
//! editor or UI API; binding to a host is the embedder's job.
//!
//! # Entry points
//!
//! - [`Engine::process_text`] — batch-correct a document
//! - [`Engine::process_text_with_details`] — same, plus a dirty flag
//! - [`Engine::dispatch_keystroke`] — live-typing interception
//! - [`cursor_in_protected_zone`] — helper for the host's cursor check

pub mod engine;
pub mod protection;

pub use engine::Engine;
pub use protection::cursor_in_protected_zone;

// Re-export the domain's fixer types so embedders don't need typofix-domain
// directly.
pub use typofix_domain::{Fixer, FixerExample, Keystroke, KeystrokeEdit};
