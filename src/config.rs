use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Runtime settings for the terminal session
///
/// The dataset itself is fixed and has no settings here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    /// Directory for the diagnostic log file
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".agrodash"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Read `~/.agrodash/config.json` if it exists
    ///
    /// Returns an error only when the file exists but cannot be read or parsed.
    pub fn load_file() -> anyhow::Result<Option<Config>> {
        let Some(path) = Self::config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let config = Self::from_json(&contents)?;
        Ok(Some(config))
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Apply `AGRODASH_TICK_RATE_MS` / `AGRODASH_LOG_DIR` when set
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ms) = lookup("AGRODASH_TICK_RATE_MS").and_then(|v| v.trim().parse().ok()) {
            self.tick_rate_ms = ms;
        }
        if let Some(dir) = lookup("AGRODASH_LOG_DIR").filter(|v| !v.trim().is_empty()) {
            self.log_dir = dir;
        }
        self
    }

    /// Effective configuration for this run
    ///
    /// Never fails: an unreadable file falls back to defaults. The returned
    /// warning (if any) should be logged once logging is up.
    pub fn resolve() -> (Config, Option<String>) {
        let (base, warning) = match Self::load_file() {
            Ok(Some(config)) => (config, None),
            Ok(None) => (Config::default(), None),
            Err(e) => (
                Config::default(),
                Some(format!("Ignoring config file, using defaults: {}", e)),
            ),
        };
        (base.with_overrides(|key| env::var(key).ok()), warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = Config::from_json(r#"{ "tick_rate_ms": 250 }"#).unwrap();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn test_dataset_keys_are_ignored() {
        let config =
            Config::from_json(r#"{ "seed": 7, "period_days": 7, "origin": "+262142-12-01" }"#)
                .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Config::from_json("{ tick_rate_ms: ").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().with_overrides(|key| match key {
            "AGRODASH_TICK_RATE_MS" => Some("not a number".to_string()),
            "AGRODASH_LOG_DIR" => Some("/tmp/agrodash-logs".to_string()),
            "AGRODASH_PERIOD_DAYS" => Some("7".to_string()),
            _ => None,
        });
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_dir, "/tmp/agrodash-logs");
    }
}
