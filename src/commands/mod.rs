mod browse;
mod config;
mod list;
mod show;

pub use browse::cmd_browse;
pub use config::{cmd_config_path, cmd_config_set, cmd_config_show};
pub use list::{ListOptions, cmd_list};
pub use show::cmd_show;

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;

/// Per-run overrides from global CLI flags
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub page_size: Option<usize>,
}

/// Load configuration and apply per-run overrides
pub fn effective_config(overrides: &Overrides) -> Result<Config> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, overrides)?;
    Ok(config)
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) -> Result<()> {
    if let Some(base_url) = &overrides.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(page_size) = overrides.page_size {
        config.page_size = page_size;
    }
    config.validate()
}

/// Output of a one-shot command: JSON always, text when not in JSON mode
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, as_json: bool) -> Result<()> {
        if as_json || self.text.is_none() {
            println!("{}", serde_json::to_string_pretty(&self.json)?);
        } else if let Some(text) = self.text {
            println!("{text}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = Config::default();
        apply_overrides(
            &mut config,
            &Overrides {
                base_url: Some("http://localhost:3000".to_string()),
                page_size: Some(4),
            },
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.page_size, 4);
    }

    #[test]
    fn test_overrides_are_validated() {
        let mut config = Config::default();
        let result = apply_overrides(
            &mut config,
            &Overrides {
                base_url: Some("::".to_string()),
                page_size: None,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = Config::default();
        apply_overrides(&mut config, &Overrides::default()).unwrap();
        assert_eq!(config, Config::default());
    }
}
