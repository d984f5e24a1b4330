//! Rendered row state derived from a backend ticket.

use crate::types::{Ticket, TicketPriority};

/// Label of the completion control before and after completion
pub const MARK_DONE_LABEL: &str = "Mark as Done";
pub const COMPLETED_LABEL: &str = "Completed";

/// Identity of a rendered row: the table load that created it and its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId {
    pub load: u64,
    pub position: usize,
}

impl RowId {
    pub fn new(load: u64, position: usize) -> Self {
        Self { load, position }
    }
}

/// Local-only acknowledgement state of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalStatus {
    #[default]
    Pending,
    Completed,
}

/// Row styling derived from the backend status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Breached,
    AtRisk,
    Normal,
}

impl RowStyle {
    pub fn from_status(status: &str) -> Self {
        match status {
            "breached" => RowStyle::Breached,
            "at-risk" => RowStyle::AtRisk,
            _ => RowStyle::Normal,
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            RowStyle::Breached => Some("breached"),
            RowStyle::AtRisk => Some("at-risk"),
            RowStyle::Normal => None,
        }
    }
}

/// UI-owned state for one visible ticket
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub id: RowId,
    pub ticket_id: String,
    pub title: String,
    pub priority: TicketPriority,
    pub status: String,
    pub style: RowStyle,
    pub assignee: String,
    pub estimated_effort_hours: u64,
    pub local_status: LocalStatus,
    /// Written once here, afterwards only by the countdown tick
    remaining_seconds: i64,
}

impl RenderedRow {
    /// Derive the row for `ticket`, applying priority and assignee defaults.
    pub fn from_ticket(id: RowId, ticket: &Ticket) -> Self {
        Self {
            id,
            ticket_id: ticket.id.clone(),
            title: ticket.title.clone(),
            priority: ticket.effective_priority(),
            status: ticket.status.clone(),
            style: RowStyle::from_status(&ticket.status),
            assignee: ticket.effective_assignee().to_string(),
            estimated_effort_hours: estimated_effort_hours(ticket.hours_left),
            local_status: LocalStatus::Pending,
            remaining_seconds: initial_remaining_seconds(ticket.hours_left),
        }
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    pub fn is_breached(&self) -> bool {
        self.remaining_seconds < 0
    }

    pub fn is_completed(&self) -> bool {
        self.local_status == LocalStatus::Completed
    }

    /// Countdown text, `-HH:MM:SS` once breached
    pub fn countdown(&self) -> String {
        format_remaining(self.remaining_seconds)
    }

    pub(crate) fn tick(&mut self) {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
    }

    /// Mark the row done. Returns false if it already was.
    pub(crate) fn complete(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        self.local_status = LocalStatus::Completed;
        true
    }
}

/// `floor(hours * 3600)`
pub fn initial_remaining_seconds(hours_left: f64) -> i64 {
    (hours_left * 3600.0).floor() as i64
}

/// `max(1, |floor(hours * 2)|)`
pub fn estimated_effort_hours(hours_left: f64) -> u64 {
    let doubled = (hours_left * 2.0).floor() as i64;
    doubled.unsigned_abs().max(1)
}

/// Format signed seconds as `HH:MM:SS`, prefixed with `-` when negative.
///
/// Hours are padded to two digits but never truncated.
pub fn format_remaining(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let magnitude = seconds.unsigned_abs();
    let hours = magnitude / 3600;
    let minutes = (magnitude % 3600) / 60;
    let secs = magnitude % 60;
    format!("{sign}{hours:02}:{minutes:02}:{secs:02}")
}
