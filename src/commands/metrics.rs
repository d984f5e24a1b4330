use owo_colors::OwoColorize;

use super::{CommandContext, CommandOutput};
use crate::api::Backend;
use crate::dashboard::metrics::MetricsPanel;
use crate::dashboard::query::ViewSelector;
use crate::dashboard::table::count_unassigned;
use crate::error::Result;

const GAUGE_WIDTH: usize = 30;

/// Show the summary counters and SLA achievement
pub async fn cmd_metrics(ctx: &CommandContext, json: bool) -> Result<()> {
    let backend = ctx.backend()?;
    let (snapshot, tickets) = futures::future::join(
        backend.fetch_metrics(),
        backend.fetch_tickets(&ViewSelector::All),
    )
    .await;
    let snapshot = snapshot?;

    let mut panel = MetricsPanel::new();
    panel.apply(snapshot.clone());
    match tickets {
        Ok(tickets) => panel.set_unassigned(count_unassigned(&tickets)),
        Err(e) => tracing::warn!("unassigned count unavailable: {e}"),
    }
    let view = panel.view();

    let mut text = String::new();
    text.push_str(&format!("{}\n\n", "SLA Summary".cyan().bold()));
    text.push_str(&format!("  Total tickets:  {}\n", view.total));
    text.push_str(&format!("  High priority:  {}\n", view.high.red()));
    text.push_str(&format!("  Medium:         {}\n", view.medium.yellow()));
    text.push_str(&format!("  Low:            {}\n", view.low.green()));
    text.push_str(&format!("  Unassigned:     {}\n", view.unassigned));
    if let Some(breached) = view.breached {
        text.push_str(&format!("  Breached:       {}\n", breached.red()));
    }

    if !view.by_status.is_empty() {
        text.push_str(&format!("\n{}\n", "By status".cyan()));
        for (status, count) in &view.by_status {
            text.push_str(&format!("  {status:<14}  {count}\n"));
        }
    }

    text.push_str(&format!("\n{} {}\n", "SLA achieved:".cyan(), view.sla_percentage.bold()));
    if let Some(gauge) = view.gauge {
        let (achieved, missed) = gauge.segments(GAUGE_WIDTH);
        text.push_str(&format!(
            "  {}{}",
            "█".repeat(achieved).green(),
            "░".repeat(missed).red()
        ));
    }

    CommandOutput::new(serde_json::json!({
        "metrics": snapshot,
        "unassigned": panel.unassigned(),
    }))
    .with_text(text)
    .print(json)
}
