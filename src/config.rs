//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (`~/.config/postdeck` on Linux) and includes:
//! - The API base URL
//! - Paging, preview, and long-post thresholds
//! - The authors hidden by the hide-by-user toggle
//! - An optional per-request timeout

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use postdeck_model::UserId;
use serde::{Deserialize, Serialize};

use crate::error::{PostdeckError, Result};
use crate::search::SearchMode;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "POSTDECK_CONFIG";

/// Environment variable overriding `base_url`
pub const BASE_URL_ENV: &str = "POSTDECK_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Configuration keys accepted by `config set`
pub const VALID_KEYS: &[&str] = &[
    "base_url",
    "page_size",
    "search_debounce_ms",
    "long_post_threshold",
    "preview_chars",
    "hidden_user_ids",
    "request_timeout_secs",
    "default_search_mode",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the posts API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Posts per page (default: 10)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Quiet window for query input in milliseconds (default: 400)
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Body length in characters above which a post counts as long (default: 120)
    #[serde(default = "default_long_post_threshold")]
    pub long_post_threshold: usize,

    /// Characters of body shown in list previews (default: 80)
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Authors whose posts are excluded while hide-by-user is on
    #[serde(default = "default_hidden_user_ids")]
    pub hidden_user_ids: Vec<UserId>,

    /// Per-request timeout in seconds. Absent or 0 means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Search mode selected at startup
    #[serde(default)]
    pub default_search_mode: SearchMode,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_search_debounce_ms() -> u64 {
    400
}

fn default_long_post_threshold() -> usize {
    120
}

fn default_preview_chars() -> usize {
    80
}

fn default_hidden_user_ids() -> Vec<UserId> {
    vec![1]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
            long_post_threshold: default_long_post_threshold(),
            preview_chars: default_preview_chars(),
            hidden_user_ids: default_hidden_user_ids(),
            request_timeout_secs: None,
            default_search_mode: SearchMode::default(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    ///
    /// `POSTDECK_CONFIG` wins over the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("", "", "postdeck").ok_or_else(|| {
            PostdeckError::Config("could not determine a home directory".to_string())
        })?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    ///
    /// Environment overrides are applied after the file is read.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit path without env overrides
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            PostdeckError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PostdeckError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            PostdeckError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(url) = env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            self.base_url = url;
        }
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PostdeckError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        if url::Url::parse(&self.base_url).is_err() {
            return Err(PostdeckError::InvalidUrl(self.base_url.clone()));
        }
        Ok(())
    }

    /// Set a single key from its string form (used by `config set`)
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base_url" => self.base_url = value.to_string(),
            "page_size" => self.page_size = parse_number(key, value)?,
            "search_debounce_ms" => self.search_debounce_ms = parse_number(key, value)?,
            "long_post_threshold" => self.long_post_threshold = parse_number(key, value)?,
            "preview_chars" => self.preview_chars = parse_number(key, value)?,
            "hidden_user_ids" => {
                self.hidden_user_ids = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| parse_number(key, s))
                    .collect::<Result<Vec<UserId>>>()?;
            }
            "request_timeout_secs" => {
                let secs: u64 = parse_number(key, value)?;
                self.request_timeout_secs = (secs > 0).then_some(secs);
            }
            "default_search_mode" => {
                self.default_search_mode = value.parse().map_err(PostdeckError::Config)?;
            }
            _ => {
                return Err(PostdeckError::Config(format!(
                    "unknown key '{}', expected one of: {}",
                    key,
                    VALID_KEYS.join(", ")
                )));
            }
        }
        self.validate()
    }

    /// The search debounce window
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// The per-request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        PostdeckError::Config(format!("invalid value '{}' for {}", value, key))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_debounce_ms, 400);
        assert_eq!(config.long_post_threshold, 120);
        assert_eq!(config.preview_chars, 80);
        assert_eq!(config.hidden_user_ids, vec![1]);
        assert!(config.request_timeout().is_none());
        assert_eq!(config.default_search_mode, SearchMode::Title);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
page_size: 5
default_search_mode: fuzzy
"#;
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.default_search_mode, SearchMode::Fuzzy);
        assert_eq!(config.search_debounce_ms, 400);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.set_value("hidden_user_ids", "2, 3").unwrap();
        config.set_value("request_timeout_secs", "15").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.hidden_user_ids, vec![2, 3]);
        assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let mut config = Config::default();
        config.set_value("request_timeout_secs", "0").unwrap();
        assert!(config.request_timeout_secs.is_none());
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_set_value_rejects_zero_page_size() {
        let mut config = Config::default();
        assert!(config.set_value("page_size", "0").is_err());
    }

    #[test]
    fn test_set_value_rejects_unknown_key() {
        let mut config = Config::default();
        let err = config.set_value("colour", "blue").unwrap_err();
        assert!(err.to_string().contains("unknown key 'colour'"));
    }

    #[test]
    fn test_set_value_rejects_bad_number() {
        let mut config = Config::default();
        assert!(config.set_value("preview_chars", "lots").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PostdeckError::InvalidUrl(_))
        ));
    }

    #[test]
    #[serial]
    fn test_env_overrides_path_and_base_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "page_size: 25\n").unwrap();

        // SAFETY: serialized with the other env-touching tests
        unsafe {
            env::set_var(CONFIG_PATH_ENV, &path);
            env::set_var(BASE_URL_ENV, "http://127.0.0.1:9");
        }
        let config = Config::load();
        unsafe {
            env::remove_var(CONFIG_PATH_ENV);
            env::remove_var(BASE_URL_ENV);
        }

        let config = config.unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.base_url, "http://127.0.0.1:9");
    }
}
