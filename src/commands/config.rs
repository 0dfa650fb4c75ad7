//! Configuration commands for managing qaplan settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;

    let json_output = json!({
        "color": config.color.to_string(),
        "table_style": config.table_style.to_string(),
        "strict": config.strict,
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}: {}\n", "color".cyan(), config.color));
    text_output.push_str(&format!(
        "{}: {}\n",
        "table_style".cyan(),
        config.table_style
    ));
    text_output.push_str(&format!("{}: {}\n", "strict".cyan(), config.strict));
    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    tracing::debug!(key, value, "updated config");

    println!("Set {} to {}", key.cyan(), config.get(key)?);
    Ok(())
}
