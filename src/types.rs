//! Wire types exchanged with the SLA backend.
//!
//! Decoding is deliberately lenient: the backend is only checked for the
//! presence of the fields the dashboard reads, and missing optional fields are
//! defaulted at render time rather than here.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::SlaError;

/// Label shown for tickets without an assignee
pub const UNASSIGNED: &str = "Unassigned";

/// Filter value reserved for "no status filter"
pub const ALL_FILTER: &str = "all";

/// Default status filter buttons
pub const DEFAULT_FILTERS: &[&str] = &[ALL_FILTER, "breached", "at-risk", "ok"];

/// A ticket record as returned by `/tickets`, `/search` and `/tickets/<id>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Opaque identifier; numbers are kept in their textual form
    #[serde(default, deserialize_with = "display_string")]
    pub id: String,
    #[serde(default, deserialize_with = "display_string")]
    pub title: String,
    /// Raw priority label, defaulted when rendered
    #[serde(default, deserialize_with = "optional_string")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "display_string")]
    pub status: String,
    /// Hours until breach, negative once breached
    #[serde(default, deserialize_with = "lenient_hours")]
    pub hours_left: f64,
    #[serde(default, deserialize_with = "optional_string")]
    pub assigned_to: Option<String>,
}

impl Ticket {
    /// Priority with the render-time default applied
    pub fn effective_priority(&self) -> TicketPriority {
        self.priority
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default()
    }

    /// Assignee with the render-time default applied
    pub fn effective_assignee(&self) -> &str {
        match self.assigned_to.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNASSIGNED,
        }
    }
}

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TicketPriority {
    High,
    Medium,
    #[default]
    Low,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 3] = [
        TicketPriority::High,
        TicketPriority::Medium,
        TicketPriority::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::High => "High",
            TicketPriority::Medium => "Medium",
            TicketPriority::Low => "Low",
        }
    }

    /// Lowercase tag class used by the priority column
    pub fn tag_class(&self) -> &'static str {
        match self {
            TicketPriority::High => "high",
            TicketPriority::Medium => "medium",
            TicketPriority::Low => "low",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = SlaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(TicketPriority::High),
            "medium" => Ok(TicketPriority::Medium),
            "low" => Ok(TicketPriority::Low),
            _ => Err(SlaError::Other(format!("unknown priority '{}'", s))),
        }
    }
}

/// Response of `GET /tickets` and `GET /search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketListResponse {
    #[serde(default)]
    pub tickets: Option<Vec<Ticket>>,
    #[serde(default)]
    pub results: Option<Vec<Ticket>>,
}

impl TicketListResponse {
    /// `tickets` wins over `results`; neither means an empty list
    pub fn into_tickets(self) -> Vec<Ticket> {
        self.tickets.or(self.results).unwrap_or_default()
    }
}

/// Per-priority ticket counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    #[serde(rename = "High", default)]
    pub high: u64,
    #[serde(rename = "Medium", default)]
    pub medium: u64,
    #[serde(rename = "Low", default)]
    pub low: u64,
}

impl PriorityCounts {
    pub fn get(&self, priority: TicketPriority) -> u64 {
        match priority {
            TicketPriority::High => self.high,
            TicketPriority::Medium => self.medium,
            TicketPriority::Low => self.low,
        }
    }
}

/// Response of `GET /metrics/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_tickets: u64,
    pub by_priority: PriorityCounts,
    pub sla_achievement_rate_pct: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_status: Option<BTreeMap<String, u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breached_count: Option<u64>,
}

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Response of `POST /chat`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub time: Option<String>,
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string).unwrap_or_default())
}

fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string))
}

/// Numbers and numeric strings are accepted; anything else counts as zero hours.
fn lenient_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let hours = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    Ok(if hours.is_finite() { hours } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_numeric_id_and_missing_fields() {
        let ticket: Ticket = serde_json::from_str(r#"{"id": 1, "title": "X"}"#).unwrap();
        assert_eq!(ticket.id, "1");
        assert_eq!(ticket.title, "X");
        assert_eq!(ticket.priority, None);
        assert_eq!(ticket.hours_left, 0.0);
        assert_eq!(ticket.effective_priority(), TicketPriority::Low);
        assert_eq!(ticket.effective_assignee(), UNASSIGNED);
    }

    #[test]
    fn test_hours_left_lenient() {
        let ticket: Ticket = serde_json::from_str(r#"{"hours_left": "2.5"}"#).unwrap();
        assert_eq!(ticket.hours_left, 2.5);

        let ticket: Ticket = serde_json::from_str(r#"{"hours_left": "soon"}"#).unwrap();
        assert_eq!(ticket.hours_left, 0.0);

        let ticket: Ticket = serde_json::from_str(r#"{"hours_left": null}"#).unwrap();
        assert_eq!(ticket.hours_left, 0.0);
    }

    #[test]
    fn test_priority_parse_case_insensitive() {
        assert_eq!("high".parse::<TicketPriority>().unwrap(), TicketPriority::High);
        assert_eq!("MEDIUM".parse::<TicketPriority>().unwrap(), TicketPriority::Medium);
        assert!("urgent".parse::<TicketPriority>().is_err());

        let ticket = Ticket {
            priority: Some("urgent".to_string()),
            ..Default::default()
        };
        assert_eq!(ticket.effective_priority(), TicketPriority::Low);
    }

    #[test]
    fn test_empty_assignee_defaults() {
        let ticket = Ticket {
            assigned_to: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(ticket.effective_assignee(), "Unassigned");

        let ticket = Ticket {
            assigned_to: Some("Bob".to_string()),
            ..Default::default()
        };
        assert_eq!(ticket.effective_assignee(), "Bob");
    }

    #[test]
    fn test_ticket_list_prefers_tickets() {
        let list: TicketListResponse =
            serde_json::from_str(r#"{"tickets": [{"id": "A"}], "results": [{"id": "B"}]}"#)
                .unwrap();
        let tickets = list.into_tickets();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, "A");
    }

    #[test]
    fn test_ticket_list_results_and_empty() {
        let list: TicketListResponse =
            serde_json::from_str(r#"{"query": "db", "results": [{"id": "B"}]}"#).unwrap();
        assert_eq!(list.into_tickets()[0].id, "B");

        let list: TicketListResponse = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(list.into_tickets().is_empty());
    }

    #[test]
    fn test_metrics_snapshot_decodes_backend_shape() {
        let json = r#"{
            "total_tickets": 4,
            "by_priority": {"High": 2, "Low": 2},
            "by_status": {"breached": 1, "at-risk": 1, "ok": 2},
            "breached_count": 1,
            "sla_achievement_rate_pct": 75.0
        }"#;
        let metrics: MetricsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.total_tickets, 4);
        assert_eq!(metrics.by_priority.get(TicketPriority::High), 2);
        assert_eq!(metrics.by_priority.get(TicketPriority::Medium), 0);
        assert_eq!(metrics.breached_count, Some(1));
    }

    #[test]
    fn test_metrics_snapshot_requires_priority_block() {
        let result: Result<MetricsSnapshot, _> =
            serde_json::from_str(r#"{"total_tickets": 4, "sla_achievement_rate_pct": 75.0}"#);
        assert!(result.is_err());
    }
}
