use owo_colors::OwoColorize;

use super::CommandContext;
use crate::api::Backend;
use crate::dashboard::chat::split_reply;
use crate::error::{Result, SlaError};

/// Send one message to the chat endpoint and print the reply line by line
pub async fn cmd_chat(ctx: &CommandContext, words: &[String]) -> Result<()> {
    let message = words.join(" ");
    let message = message.trim();
    if message.is_empty() {
        return Err(SlaError::Other("chat message cannot be empty".to_string()));
    }

    let reply = ctx.backend()?.send_chat(message).await?;
    for line in split_reply(&reply) {
        println!("{} {}", "bot>".green().bold(), line);
    }
    Ok(())
}
