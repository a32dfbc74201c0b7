//! Tooltip engine configuration persistence.
//!
//! Stores site and service settings as JSON at
//! `~/.local/share/d3-tooltips/config.json`. Loaded once on startup, falling
//! back to defaults when missing or unreadable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Default config file path.
pub fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("d3-tooltips")
        .join("config.json")
}

/// Persisted engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Domain hosting tooltip-eligible links (`{region}.{site_domain}`).
    #[serde(default = "default_site_domain")]
    pub site_domain: String,
    /// First path segment of tooltip-eligible links.
    #[serde(default = "default_product")]
    pub product: String,
    /// Prefix of outbound fetch URLs; `{region}` and `{locale}` are substituted.
    #[serde(default = "default_service_base")]
    pub service_base: String,
    #[serde(default = "default_format_suffix")]
    pub format_suffix: String,
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u64,
    /// Transport timeout for the HTTP gateway.
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
    #[serde(default = "default_region")]
    pub default_region: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_site_domain() -> String { "example.org".into() }
fn default_product() -> String { "d3".into() }
fn default_service_base() -> String { "https://{region}.example.org/d3/{locale}/tooltip/".into() }
fn default_format_suffix() -> String { "?format=jsonp".into() }
fn default_loading_delay_ms() -> u64 { 500 }
fn default_fetch_timeout_ms() -> u64 { 10_000 }
fn default_region() -> String { "us".into() }
fn default_locale() -> String { "en".into() }

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            site_domain: default_site_domain(),
            product: default_product(),
            service_base: default_service_base(),
            format_suffix: default_format_suffix(),
            loading_delay_ms: default_loading_delay_ms(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            default_region: default_region(),
            default_locale: default_locale(),
            path: default_path(),
        }
    }
}

/// Keys accepted by [`TooltipConfig::set`].
pub const KEYS: [&str; 8] = [
    "site_domain",
    "product",
    "service_base",
    "format_suffix",
    "loading_delay_ms",
    "fetch_timeout_ms",
    "default_region",
    "default_locale",
];

impl TooltipConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path())
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.path = path.to_path_buf();
        config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist current config to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Update one setting by key, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "site_domain" => self.site_domain = non_empty(key, value)?,
            "product" => self.product = non_empty(key, value)?,
            "service_base" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    return Err(Error::Config(format!(
                        "service_base must be an http(s) URL, got {value}"
                    )));
                }
                self.service_base = value.to_string();
            }
            "format_suffix" => self.format_suffix = value.to_string(),
            "loading_delay_ms" => self.loading_delay_ms = parse_millis(key, value)?,
            "fetch_timeout_ms" => self.fetch_timeout_ms = parse_millis(key, value)?,
            "default_region" => self.default_region = two_letter(key, value)?,
            "default_locale" => self.default_locale = two_letter(key, value)?,
            _ => {
                return Err(Error::Config(format!(
                    "unknown key {key}; valid keys: {}",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{key} must not be empty")));
    }
    Ok(value.trim().to_string())
}

fn parse_millis(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("{key} must be a whole number of milliseconds")))
}

fn two_letter(key: &str, value: &str) -> Result<String> {
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_lowercase()) {
        Ok(value.to_string())
    } else {
        Err(Error::Config(format!("{key} must be two lowercase letters, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TooltipConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(config.site_domain, "example.org");
        assert_eq!(config.loading_delay_ms, 500);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = TooltipConfig::load_from(&path);
        config.set("default_region", "eu").unwrap();
        config.set("loading_delay_ms", "250").unwrap();
        config.save().unwrap();

        let reloaded = TooltipConfig::load_from(&path);
        assert_eq!(reloaded.default_region, "eu");
        assert_eq!(reloaded.loading_delay_ms, 250);
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"site_domain": "battle.net"}"#).unwrap();
        let config = TooltipConfig::load_from(&path);
        assert_eq!(config.site_domain, "battle.net");
        assert_eq!(config.product, "d3");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = TooltipConfig::default();
        assert!(matches!(config.set("default_region", "USA"), Err(Error::Config(_))));
        assert!(matches!(config.set("loading_delay_ms", "soon"), Err(Error::Config(_))));
        assert!(matches!(config.set("service_base", "ftp://x/"), Err(Error::Config(_))));
        assert!(matches!(config.set("colour", "red"), Err(Error::Config(_))));
    }
}
