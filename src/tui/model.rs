//! Dashboard model types for testable state management
//!
//! Key mapping and selection bookkeeping live here as pure functions so they
//! can be exercised without the iocraft runtime. Anything that talks to the
//! backend is dispatched by the view after the reducer has run.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::dashboard::rows::RowId;
use crate::dashboard::table::{TableLine, TableView};
use crate::tui::components::footer::{
    Shortcut, chat_shortcuts, search_shortcuts, table_shortcuts,
};

// ============================================================================
// State Types
// ============================================================================

/// Which pane receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Search,
    Chat,
}

/// Local UI state; everything else is read from the dashboard on render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub focus: Focus,
    /// Index into the table lines
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub should_exit: bool,
}

// ============================================================================
// Action Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,

    // Search
    FocusSearch,
    /// Leave the search box keeping the term
    ExitSearch,
    /// Empty the search box and leave it
    ClearSearchAndExit,

    // Chat
    FocusChat,
    ExitChat,
    SubmitChat,

    // Filters
    NextFilter,
    PrevFilter,
    /// Filter button by zero-based position
    SelectFilter(usize),

    // Table
    Refresh,
    CompleteSelected,
    ShowDetail,

    Quit,
}

// ============================================================================
// Reducer
// ============================================================================

/// Apply an action to the UI state.
///
/// `row_count` is the number of table lines currently shown and
/// `list_height` the number that fit on screen.
pub fn reduce_dashboard_state(
    mut state: DashboardState,
    action: DashboardAction,
    row_count: usize,
    list_height: usize,
) -> DashboardState {
    let last = row_count.saturating_sub(1);
    let half_page = (list_height / 2).max(1);

    match action {
        DashboardAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }
        DashboardAction::MoveDown => {
            state.selected_index = (state.selected_index + 1).min(last);
        }
        DashboardAction::GoToTop => state.selected_index = 0,
        DashboardAction::GoToBottom => state.selected_index = last,
        DashboardAction::PageUp => {
            state.selected_index = state.selected_index.saturating_sub(half_page);
        }
        DashboardAction::PageDown => {
            state.selected_index = (state.selected_index + half_page).min(last);
        }

        DashboardAction::FocusSearch => state.focus = Focus::Search,
        DashboardAction::FocusChat => state.focus = Focus::Chat,
        DashboardAction::ExitSearch | DashboardAction::ExitChat => state.focus = Focus::Table,
        DashboardAction::ClearSearchAndExit => {
            state.focus = Focus::Table;
            state.selected_index = 0;
        }
        // Focus stays on the chat input after sending
        DashboardAction::SubmitChat => {}

        DashboardAction::NextFilter
        | DashboardAction::PrevFilter
        | DashboardAction::SelectFilter(_)
        | DashboardAction::Refresh => {
            state.selected_index = 0;
        }

        DashboardAction::CompleteSelected | DashboardAction::ShowDetail => {}

        DashboardAction::Quit => state.should_exit = true,
    }

    state.selected_index = state.selected_index.min(last);
    state.scroll_offset = adjust_scroll(state.scroll_offset, state.selected_index, list_height);
    state
}

/// Keep the selection within `row_count` after the table was replaced
pub fn clamp_selection(
    mut state: DashboardState,
    row_count: usize,
    list_height: usize,
) -> DashboardState {
    state.selected_index = state.selected_index.min(row_count.saturating_sub(1));
    state.scroll_offset = adjust_scroll(state.scroll_offset, state.selected_index, list_height);
    state
}

/// Adjust scroll offset to keep the selected item visible
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Convert a key event to a DashboardAction (pure function)
///
/// The search and chat inputs capture printable keys themselves, so only
/// their control keys are mapped while they have focus.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &DashboardState,
) -> Option<DashboardAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(DashboardAction::Quit),
            _ => None,
        };
    }

    match state.focus {
        Focus::Search => match code {
            KeyCode::Esc => Some(DashboardAction::ClearSearchAndExit),
            KeyCode::Enter | KeyCode::Tab => Some(DashboardAction::ExitSearch),
            _ => None,
        },
        Focus::Chat => match code {
            KeyCode::Esc | KeyCode::Tab => Some(DashboardAction::ExitChat),
            KeyCode::Enter => Some(DashboardAction::SubmitChat),
            _ => None,
        },
        Focus::Table => table_key_to_action(code),
    }
}

fn table_key_to_action(code: KeyCode) -> Option<DashboardAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(DashboardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(DashboardAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(DashboardAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(DashboardAction::GoToBottom),
        KeyCode::PageUp => Some(DashboardAction::PageUp),
        KeyCode::PageDown => Some(DashboardAction::PageDown),

        KeyCode::Char('/') => Some(DashboardAction::FocusSearch),
        KeyCode::Char('c') => Some(DashboardAction::FocusChat),

        KeyCode::Tab => Some(DashboardAction::NextFilter),
        KeyCode::BackTab => Some(DashboardAction::PrevFilter),
        KeyCode::Char(ch @ '1'..='9') => {
            Some(DashboardAction::SelectFilter(ch as usize - '1' as usize))
        }

        KeyCode::Char('r') => Some(DashboardAction::Refresh),
        KeyCode::Char(' ') => Some(DashboardAction::CompleteSelected),
        KeyCode::Enter => Some(DashboardAction::ShowDetail),

        KeyCode::Char('q') | KeyCode::Esc => Some(DashboardAction::Quit),
        _ => None,
    }
}

// ============================================================================
// View Model
// ============================================================================

/// Identity and ticket id of the row under the cursor, if it is a data row
pub fn selected_row(view: &TableView, selected_index: usize) -> Option<(RowId, String)> {
    match view.lines.get(selected_index)? {
        TableLine::Row(row) => Some((row.id, row.cells[0].clone())),
        TableLine::Placeholder { .. } => None,
    }
}

/// Footer shortcuts for the focused pane
pub fn compute_shortcuts(focus: Focus) -> Vec<Shortcut> {
    match focus {
        Focus::Table => table_shortcuts(),
        Focus::Search => search_shortcuts(),
        Focus::Chat => chat_shortcuts(),
    }
}

// ============================================================================
// Tests
// ============================================================================
