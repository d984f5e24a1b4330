use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{CommandContext, colored_countdown, colored_priority, print_json};
use crate::api::Backend;
use crate::dashboard::query::ViewSelector;
use crate::dashboard::table::{IncidentTable, TableLine};
use crate::error::Result;

/// A row in the incident table
#[derive(Tabled)]
struct IncidentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Time to Breach")]
    countdown: String,
    #[tabled(rename = "Est. Effort")]
    effort: String,
    #[tabled(rename = "Assigned To")]
    assignee: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// List incidents for a status filter or search term
pub async fn cmd_tickets(
    ctx: &CommandContext,
    status: Option<&str>,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let selector = match (search, status) {
        (Some(q), _) => ViewSelector::for_search(q),
        (None, Some(s)) => ViewSelector::for_filter(s),
        (None, None) => ViewSelector::All,
    };

    let backend = ctx.backend()?;
    let tickets = backend.fetch_tickets(&selector).await?;
    tracing::info!(%selector, count = tickets.len(), "fetched tickets");

    if json {
        return print_json(&serde_json::json!({
            "selector": selector.to_string(),
            "tickets": tickets,
        }));
    }

    let mut table = IncidentTable::new();
    table.replace(&tickets);

    let rows: Vec<IncidentRow> = table
        .view()
        .lines
        .into_iter()
        .filter_map(|line| match line {
            TableLine::Row(row) => Some(row),
            TableLine::Placeholder { .. } => None,
        })
        .zip(&tickets)
        .map(|(row, ticket)| {
            let [id, title, _, countdown, effort, assignee, _] = row.cells.clone();
            IncidentRow {
                id,
                title,
                priority: colored_priority(row.priority),
                countdown: colored_countdown(&countdown, row.time_breached),
                effort,
                assignee,
                status: ticket.status.clone(),
            }
        })
        .collect();

    if rows.is_empty() {
        if let Some(placeholder) = table.placeholder() {
            println!("{}", placeholder.message());
        }
        return Ok(());
    }

    let mut rendered = Table::new(rows);
    rendered.with(Style::modern());
    println!("{rendered}");

    println!(
        "\n{} incident(s), {} unassigned {}",
        tickets.len(),
        table.unassigned_count(),
        format!("({selector})").dimmed()
    );

    Ok(())
}
