//! Mock data builders for backend responses.

use slaboard::types::{MetricsSnapshot, PriorityCounts, Ticket};

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: id.to_string(),
                title: format!("Incident {id}"),
                priority: Some("Medium".to_string()),
                status: "ok".to_string(),
                hours_left: 4.0,
                assigned_to: Some("oncall".to_string()),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    pub fn priority(mut self, priority: &str) -> Self {
        self.ticket.priority = Some(priority.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.ticket.status = status.to_string();
        self
    }

    pub fn hours_left(mut self, hours: f64) -> Self {
        self.ticket.hours_left = hours;
        self
    }

    pub fn assigned_to(mut self, who: Option<&str>) -> Self {
        self.ticket.assigned_to = who.map(str::to_string);
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Metrics snapshot with the given totals and achievement rate
pub fn metrics(total: u64, high: u64, medium: u64, low: u64, rate: f64) -> MetricsSnapshot {
    MetricsSnapshot {
        total_tickets: total,
        by_priority: PriorityCounts { high, medium, low },
        sla_achievement_rate_pct: rate,
        by_status: None,
        breached_count: None,
    }
}
