//! Configuration file loading for typofix.
//!
//! Discovers and loads `typofix.toml` from the working directory, then
//! merges it with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;
use typofix_types::TypographySettings;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "typofix.toml";

/// Top-level configuration from typofix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypofixConfig {
    /// Locale tag, e.g. `fr_FR` or `en_GB`.
    pub locale: Option<String>,

    /// Live keystroke correction (only meaningful to editor hosts).
    pub real_time_correction: Option<bool>,

    /// Per-fixer overrides on top of the locale preset.
    pub fixers: BTreeMap<String, bool>,
}

impl TypofixConfig {
    /// Resolve to engine settings: locale preset first, then overrides.
    pub fn into_settings(self) -> TypographySettings {
        let mut settings = match &self.locale {
            Some(tag) => TypographySettings::for_locale(tag.as_str()),
            None => TypographySettings::default(),
        };
        if let Some(real_time) = self.real_time_correction {
            settings.enable_real_time_correction = real_time;
        }
        for (id, enabled) in self.fixers {
            settings.fixers.insert(id, enabled);
        }
        settings
    }
}

/// Discover the typofix.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file at {}", config_path);
        None
    }
}

/// Load and parse a typofix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<TypofixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<TypofixConfig> {
    let config: TypofixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return defaults if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<TypofixConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(TypofixConfig::default()),
    }
}
