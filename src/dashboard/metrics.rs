//! Summary counters and the SLA achievement gauge.

use jiff::Timestamp;

use crate::types::{MetricsSnapshot, TicketPriority};

/// Shown for counters that have never been loaded
pub const BLANK: &str = "-";

#[derive(Debug, Clone, Default)]
pub struct MetricsPanel {
    snapshot: Option<MetricsSnapshot>,
    unassigned: Option<usize>,
    updated_at: Option<Timestamp>,
}

impl MetricsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the previous snapshot wholesale
    pub fn apply(&mut self, snapshot: MetricsSnapshot) {
        self.snapshot = Some(snapshot);
        self.updated_at = Some(Timestamp::now());
    }

    /// Publish the unassigned count computed from the current ticket list
    pub fn set_unassigned(&mut self, count: usize) {
        self.unassigned = Some(count);
    }

    pub fn snapshot(&self) -> Option<&MetricsSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn unassigned(&self) -> Option<usize> {
        self.unassigned
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    pub fn view(&self) -> MetricsView {
        let snapshot = self.snapshot.as_ref();

        MetricsView {
            total: counter(snapshot, |s| s.total_tickets),
            high: counter(snapshot, |s| s.by_priority.get(TicketPriority::High)),
            medium: counter(snapshot, |s| s.by_priority.get(TicketPriority::Medium)),
            low: counter(snapshot, |s| s.by_priority.get(TicketPriority::Low)),
            unassigned: self
                .unassigned
                .map(|n| n.to_string())
                .unwrap_or_else(|| BLANK.to_string()),
            sla_percentage: self
                .snapshot
                .as_ref()
                .map(|s| format!("{}%", s.sla_achievement_rate_pct))
                .unwrap_or_else(|| BLANK.to_string()),
            gauge: self
                .snapshot
                .as_ref()
                .map(|s| Gauge::new(s.sla_achievement_rate_pct)),
            breached: self.snapshot.as_ref().and_then(|s| s.breached_count),
            by_status: self
                .snapshot
                .as_ref()
                .and_then(|s| s.by_status.as_ref())
                .map(|m| m.iter().map(|(k, v)| (k.clone(), *v)).collect())
                .unwrap_or_default(),
        }
    }
}

fn counter(snapshot: Option<&MetricsSnapshot>, f: impl Fn(&MetricsSnapshot) -> u64) -> String {
    snapshot
        .map(|s| f(s).to_string())
        .unwrap_or_else(|| BLANK.to_string())
}

/// Display projection of the metrics panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsView {
    pub total: String,
    pub high: String,
    pub medium: String,
    pub low: String,
    pub unassigned: String,
    pub sla_percentage: String,
    pub gauge: Option<Gauge>,
    pub breached: Option<u64>,
    pub by_status: Vec<(String, u64)>,
}

/// Two-segment radial indicator, split at the achievement percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    achieved_pct: f64,
}

impl Gauge {
    pub fn new(pct: f64) -> Self {
        let achieved_pct = if pct.is_finite() {
            pct.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self { achieved_pct }
    }

    pub fn achieved_pct(&self) -> f64 {
        self.achieved_pct
    }

    /// Cell widths of the achieved and missed segments for a bar of `width` cells
    pub fn segments(&self, width: usize) -> (usize, usize) {
        let achieved = ((width as f64) * self.achieved_pct / 100.0).round() as usize;
        let achieved = achieved.min(width);
        (achieved, width - achieved)
    }
}
