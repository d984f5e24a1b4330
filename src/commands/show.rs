use owo_colors::OwoColorize;

use super::{CommandContext, CommandOutput, colored_countdown, colored_priority};
use crate::api::Backend;
use crate::dashboard::rows::{RenderedRow, RowId};
use crate::error::Result;

/// Show a single ticket
pub async fn cmd_show(ctx: &CommandContext, id: &str, json: bool) -> Result<()> {
    let ticket = ctx.backend()?.fetch_ticket(id).await?;
    let row = RenderedRow::from_ticket(RowId::new(0, 0), &ticket);

    let mut text = format!("{} {}\n\n", row.ticket_id.cyan().bold(), row.title.bold());
    text.push_str(&format!("  Priority:        {}\n", colored_priority(row.priority)));
    text.push_str(&format!("  Status:          {}\n", row.status));
    text.push_str(&format!(
        "  Time to breach:  {}\n",
        colored_countdown(&row.countdown(), row.is_breached())
    ));
    text.push_str(&format!(
        "  Est. effort:     ~ {} hours\n",
        row.estimated_effort_hours
    ));
    text.push_str(&format!("  Assigned to:     {}", row.assignee));

    CommandOutput::new(serde_json::json!({
        "ticket": ticket,
        "remaining_seconds": row.remaining_seconds(),
        "breached": row.is_breached(),
        "estimated_effort_hours": row.estimated_effort_hours,
    }))
    .with_text(text)
    .print(json)
}
