//! Incident table state and its projection into seven display columns.

use std::collections::BTreeMap;

use unicase::UniCase;

use crate::types::{Ticket, TicketPriority, UNASSIGNED};

use super::completion::{CompletionBindings, CompletionOutcome};
use super::rows::{COMPLETED_LABEL, MARK_DONE_LABEL, RenderedRow, RowId};

/// Columns: id, title, priority, countdown, effort, assignee, completion control
pub const COLUMN_COUNT: usize = 7;

pub const COLUMN_HEADERS: [&str; COLUMN_COUNT] = [
    "ID",
    "Title",
    "Priority",
    "Time to Breach",
    "Est. Effort",
    "Assigned To",
    "Action",
];

/// Single full-width row shown instead of data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    NoIncidents,
    LoadError,
}

impl Placeholder {
    pub fn message(&self) -> &'static str {
        match self {
            Placeholder::NoIncidents => "No incidents found.",
            Placeholder::LoadError => "Error loading data.",
        }
    }
}

/// Rows of the most recent table load, keyed by row identity.
#[derive(Debug, Clone, Default)]
pub struct IncidentTable {
    load: u64,
    rows: BTreeMap<RowId, RenderedRow>,
    placeholder: Option<Placeholder>,
    unassigned: usize,
    bindings: CompletionBindings,
}

impl IncidentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the current row set; bumps on every replace
    pub fn load(&self) -> u64 {
        self.load
    }

    /// Replace every row with rows derived from `tickets`.
    ///
    /// Returns the new load generation.
    pub fn replace(&mut self, tickets: &[Ticket]) -> u64 {
        self.load += 1;
        self.rows.clear();

        if tickets.is_empty() {
            self.placeholder = Some(Placeholder::NoIncidents);
        } else {
            self.placeholder = None;
            for (position, ticket) in tickets.iter().enumerate() {
                let id = RowId::new(self.load, position);
                self.rows.insert(id, RenderedRow::from_ticket(id, ticket));
            }
        }

        self.unassigned = count_unassigned(tickets);
        self.bindings.bind(self.rows.keys().copied());
        self.load
    }

    /// Drop every row and show the load error placeholder.
    ///
    /// The unassigned count keeps its previous value.
    pub fn show_error(&mut self) -> u64 {
        self.load += 1;
        self.rows.clear();
        self.placeholder = Some(Placeholder::LoadError);
        self.bindings.bind(std::iter::empty());
        self.load
    }

    /// Advance every row's countdown by one second
    pub fn tick(&mut self) {
        for row in self.rows.values_mut() {
            row.tick();
        }
    }

    /// Activate the completion control of a row
    pub fn complete(&mut self, id: RowId) -> CompletionOutcome {
        if !self.bindings.is_bound(id) {
            return CompletionOutcome::Unbound;
        }
        match self.rows.get_mut(&id) {
            Some(row) => {
                if row.complete() {
                    CompletionOutcome::Completed
                } else {
                    CompletionOutcome::AlreadyCompleted
                }
            }
            None => CompletionOutcome::Unbound,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &RenderedRow> {
        self.rows.values()
    }

    pub fn row(&self, id: RowId) -> Option<&RenderedRow> {
        self.rows.get(&id)
    }

    /// Row at a display position in the current load
    pub fn row_at(&self, position: usize) -> Option<&RenderedRow> {
        self.rows.get(&RowId::new(self.load, position))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        self.placeholder
    }

    pub fn unassigned_count(&self) -> usize {
        self.unassigned
    }

    pub fn bound_controls(&self) -> usize {
        self.bindings.len()
    }

    /// Project the current state into display lines
    pub fn view(&self) -> TableView {
        let lines = match self.placeholder {
            Some(placeholder) => vec![TableLine::Placeholder {
                message: placeholder.message(),
                span: COLUMN_COUNT,
            }],
            None => self.rows.values().map(|row| TableLine::Row(RowView::from(row))).collect(),
        };
        TableView {
            load: self.load,
            lines,
        }
    }
}

/// Count tickets whose assignee is missing, empty or "Unassigned" in any case
pub fn count_unassigned(tickets: &[Ticket]) -> usize {
    let unassigned = UniCase::new(UNASSIGNED);
    tickets
        .iter()
        .filter(|t| UniCase::new(t.effective_assignee()) == unassigned)
        .count()
}

/// Display projection of the whole table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    pub load: u64,
    pub lines: Vec<TableLine>,
}

impl TableView {
    /// Number of data rows (placeholders excluded)
    pub fn data_row_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, TableLine::Row(_)))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableLine {
    Placeholder { message: &'static str, span: usize },
    Row(RowView),
}

/// Display projection of one rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: RowId,
    pub cells: [String; COLUMN_COUNT],
    pub priority: TicketPriority,
    /// Row classes: `breached`, `at-risk`, `completed`
    pub classes: Vec<&'static str>,
    /// Countdown cell is past zero
    pub time_breached: bool,
    /// Completion control can still be activated
    pub control_enabled: bool,
}

impl RowView {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class)
    }

    pub fn countdown(&self) -> &str {
        &self.cells[3]
    }
}

impl From<&RenderedRow> for RowView {
    fn from(row: &RenderedRow) -> Self {
        let mut classes = Vec::new();
        if let Some(class) = row.style.class() {
            classes.push(class);
        }
        if row.is_completed() {
            classes.push("completed");
        }
        let label = if row.is_completed() {
            COMPLETED_LABEL
        } else {
            MARK_DONE_LABEL
        };

        RowView {
            id: row.id,
            cells: [
                row.ticket_id.clone(),
                row.title.clone(),
                row.priority.to_string(),
                row.countdown(),
                format!("~ {} hours", row.estimated_effort_hours),
                row.assignee.clone(),
                label.to_string(),
            ],
            priority: row.priority,
            classes,
            time_breached: row.is_breached(),
            control_enabled: !row.is_completed(),
        }
    }
}
