//! The typographic rules: a closed, enumerated set of fixers.
//!
//! This crate owns *what* gets rewritten and how each rule matches. It does
//! not own scheduling, masking, or configuration sync; that's the
//! `typofix-core` engine.

pub mod fixers;
pub mod keystroke;

pub use fixers::{Fixer, FixerExample, FixerMeta, builtin_fixers};
pub use keystroke::{Keystroke, KeystrokeEdit};
