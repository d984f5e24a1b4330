//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Ctrl+S", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Refresh")
    pub action: String,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts while the incident table has focus
pub fn table_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .with_search()
        .with_filters()
        .add("Space", "Mark Done")
        .add("Enter", "Details")
        .add("r", "Refresh")
        .add("c", "Chat")
        .with_quit()
        .build()
}

/// Shortcuts while typing a search
pub fn search_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Back to Table")
        .add("Esc", "Clear & Exit")
        .add("C-q", "Quit")
        .build()
}

/// Shortcuts while typing a chat message
pub fn chat_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Send")
        .add("Esc", "Back to Table")
        .add("C-q", "Quit")
        .build()
}
