//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set a value and save the file

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandContext, CommandOutput};
use crate::config::CONFIG_KEYS;
use crate::error::{Result, SlaError};

/// Show current configuration
pub fn cmd_config_show(ctx: &CommandContext, json: bool) -> Result<()> {
    let config = &ctx.config;

    let json_output = json!({
        "api_url": ctx.api_url(),
        "stale_responses": config.stale_responses.to_string(),
        "filters": config.filters(),
        "chat": {
            "enabled": config.chat.enabled,
            "prime_message": config.chat.prime_message,
        },
        "log": {
            "level": config.log.level,
            "file": config.log_file().to_string_lossy(),
        },
        "config_file": ctx.config_path.to_string_lossy(),
    });

    let mut text = format!("{}\n\n", "Configuration:".cyan().bold());
    text.push_str(&format!("{}: {}\n", "api_url".cyan(), ctx.api_url()));
    text.push_str(&format!(
        "{}: {}\n",
        "stale_responses".cyan(),
        config.stale_responses
    ));
    text.push_str(&format!("{}: {}\n", "filters".cyan(), config.filters().join(", ")));

    text.push_str(&format!("\n{}:\n", "chat".cyan()));
    text.push_str(&format!("  enabled: {}\n", config.chat.enabled));
    text.push_str(&format!("  prime_message: {}\n", config.chat.prime_message));

    text.push_str(&format!("\n{}:\n", "log".cyan()));
    match &config.log.level {
        Some(level) => text.push_str(&format!("  level: {level}\n")),
        None => text.push_str(&format!("  level: {}\n", "not configured".dimmed())),
    }
    text.push_str(&format!("  file: {}\n", config.log_file().display()));

    text.push('\n');
    text.push_str(&format!(
        "{}",
        format!("Config file: {}", ctx.config_path.display()).dimmed()
    ));

    CommandOutput::new(json_output).with_text(text).print(json)
}

/// Get a specific configuration value
pub fn cmd_config_get(ctx: &CommandContext, key: &str, json: bool) -> Result<()> {
    let value = match key {
        "api_url" => Some(ctx.api_url()),
        _ => ctx.config.get(key)?,
    };
    let Some(value) = value else {
        return Err(SlaError::Config(format!("{key} not set")));
    };

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value.clone())
    .print(json)
}

/// Set a configuration value
pub fn cmd_config_set(ctx: &CommandContext, key: &str, value: &str, json: bool) -> Result<()> {
    if !CONFIG_KEYS.contains(&key) {
        return Err(SlaError::Config(format!(
            "unknown config key '{key}'. Valid keys: {}",
            CONFIG_KEYS.join(", ")
        )));
    }

    let mut config = ctx.config.clone();
    config.set(key, value)?;
    config.save_to(&ctx.config_path)?;
    tracing::info!(key, path = %ctx.config_path.display(), "config updated");

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": value,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.cyan(), value))
    .print(json)
}
