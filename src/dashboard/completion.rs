//! Completion controls bound to rendered rows.
//!
//! Rows are rendered as plain data; this binding pass decides which rows have
//! a live completion control. It is keyed by [`RowId`], so running it again
//! over the same rows never attaches a second control.

use std::collections::HashSet;

use super::rows::RowId;

/// Result of activating a completion control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The row moved to completed
    Completed,
    /// The control was already disabled; nothing changed
    AlreadyCompleted,
    /// No control is bound to that row (unknown or from a previous load)
    Unbound,
}

#[derive(Debug, Clone, Default)]
pub struct CompletionBindings {
    bound: HashSet<RowId>,
}

impl CompletionBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind controls for the given live rows.
    ///
    /// Bindings for rows not in `rows` are dropped. Returns how many rows were
    /// newly bound.
    pub fn bind(&mut self, rows: impl IntoIterator<Item = RowId>) -> usize {
        let live: HashSet<RowId> = rows.into_iter().collect();
        self.bound.retain(|id| live.contains(id));
        let before = self.bound.len();
        self.bound.extend(live);
        self.bound.len() - before
    }

    pub fn is_bound(&self, id: RowId) -> bool {
        self.bound.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}
