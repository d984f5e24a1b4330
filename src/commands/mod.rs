mod chat;
mod config;
mod dashboard;
mod health;
mod metrics;
mod show;
mod tickets;

pub use chat::cmd_chat;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use health::cmd_health;
pub use metrics::cmd_metrics;
pub use show::cmd_show;
pub use tickets::cmd_tickets;

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde_json::Value;

use crate::api::HttpBackend;
use crate::config::Config;
use crate::error::Result;
use crate::types::TicketPriority;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config_path: PathBuf,
    pub config: Config,
    /// `--api-url`, taking precedence over environment and config file
    pub api_url: Option<String>,
    /// `--log` filter directive
    pub log: Option<String>,
}

impl CommandContext {
    pub fn load(
        config_path: Option<PathBuf>,
        api_url: Option<String>,
        log: Option<String>,
    ) -> Result<Self> {
        let config_path = config_path.unwrap_or_else(Config::default_path);
        let config = Config::load_from(&config_path)?;
        Ok(Self {
            config_path,
            config,
            api_url,
            log,
        })
    }

    /// Effective backend base URL
    pub fn api_url(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| self.config.api_url())
    }

    pub fn backend(&self) -> Result<HttpBackend> {
        HttpBackend::new(&self.api_url())
    }
}

/// Output of a one-shot command in both of its forms
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

    /// Print as pretty JSON when `json` is set, otherwise as text
    pub fn print(self, json: bool) -> Result<()> {
        match self.text {
            Some(text) if !json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Priority label coloured the way the dashboard tags it
pub fn colored_priority(priority: TicketPriority) -> String {
    match priority {
        TicketPriority::High => priority.as_str().red().bold().to_string(),
        TicketPriority::Medium => priority.as_str().yellow().to_string(),
        TicketPriority::Low => priority.as_str().green().to_string(),
    }
}

/// Countdown text, red once breached
pub fn colored_countdown(countdown: &str, breached: bool) -> String {
    if breached {
        countdown.red().to_string()
    } else {
        countdown.to_string()
    }
}
