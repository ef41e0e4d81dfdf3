use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TOAST_MS: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Contacts document; defaults to `contacts.json` in the config dir
    #[serde(default)]
    pub data_file: Option<String>,
    /// How long each toast stays on screen
    #[serde(default = "default_toast_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_toast_ms() -> u64 {
    DEFAULT_TOAST_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            toast_duration_ms: DEFAULT_TOAST_MS,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".agenda-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, falling back to defaults when it is missing or unreadable
    pub fn load() -> Config {
        let Some(config_path) = Self::config_path() else {
            return Config::default();
        };
        if !config_path.exists() {
            return Config::default();
        }

        fs::read_to_string(&config_path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Resolved contacts document path
    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(ref file) = self.data_file {
            return Ok(PathBuf::from(file));
        }
        Self::config_dir()
            .map(|dir| dir.join("contacts.json"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory; pass --data-file"))
    }

    pub fn log_dir() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("logs"))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.toast_duration(), Duration::from_millis(2000));
    }

    #[test]
    fn test_explicit_data_file_wins() {
        let config = Config {
            data_file: Some("/tmp/people.json".to_string()),
            ..Config::default()
        };
        assert_eq!(config.data_path().unwrap(), PathBuf::from("/tmp/people.json"));
    }

    #[test]
    fn test_roundtrip_through_json() {
        let config = Config {
            data_file: Some("contacts.json".to_string()),
            toast_duration_ms: 500,
            log_level: "debug".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
