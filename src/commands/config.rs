//! Configuration commands.
//!
//! - `config show`: Display the effective configuration
//! - `config path`: Print the config file location
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, Overrides, effective_config};
use crate::config::Config;
use crate::error::Result;

/// Show the effective configuration (file, env, and flags applied)
pub fn cmd_config_show(overrides: &Overrides, output_json: bool) -> Result<()> {
    let config = effective_config(overrides)?;
    let path = Config::config_path()?;

    let text = format!(
        "{}\n\n{}\n{}",
        "Configuration:".cyan().bold(),
        serde_yaml_ng::to_string(&config)?.trim_end(),
        format!("Config file: {}", path.display()).dimmed()
    );

    let mut value = serde_json::to_value(&config)?;
    value["config_file"] = json!(path.to_string_lossy());

    CommandOutput::new(value).with_text(text).print(output_json)
}

/// Print the config file location
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_from(&Config::config_path()?)?;
    config.set_value(key, value)?;
    config.save()?;

    println!("Set {} = {}", key.cyan(), value);
    Ok(())
}
