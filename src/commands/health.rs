use owo_colors::OwoColorize;

use super::{CommandContext, CommandOutput};
use crate::api::Backend;
use crate::error::Result;

/// Probe the backend's health endpoint
pub async fn cmd_health(ctx: &CommandContext, json: bool) -> Result<()> {
    let api_url = ctx.api_url();
    let health = ctx.backend()?.health().await?;

    let status = if health.status.eq_ignore_ascii_case("ok") {
        health.status.green().to_string()
    } else {
        health.status.yellow().to_string()
    };
    let mut text = format!("{} {}", api_url.cyan(), status);
    if let Some(time) = &health.time {
        text.push_str(&format!(" {}", format!("({time})").dimmed()));
    }

    CommandOutput::new(serde_json::json!({
        "api_url": api_url,
        "status": health.status,
        "time": health.time,
    }))
    .with_text(text)
    .print(json)
}
