//! Scrollable incident table
//!
//! Renders the projection produced by the dashboard: either one placeholder
//! line spanning every column or one line per rendered row.

use iocraft::prelude::*;

use crate::dashboard::rows::RowStyle;
use crate::dashboard::table::{COLUMN_HEADERS, RowView, TableLine, TableView};
use crate::tui::theme::theme;

/// Fixed widths of every column but the title, which takes the rest
const WIDTHS: [u32; 7] = [10, 0, 9, 15, 13, 16, 14];

#[derive(Default, Props)]
pub struct IncidentTableProps {
    pub view: TableView,
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Number of data lines that fit below the header
    pub visible_height: usize,
    pub has_focus: bool,
}

#[component]
pub fn IncidentTable(props: &IncidentTableProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let start = props.scroll_offset.min(props.view.lines.len());
    let end = (start + props.visible_height).min(props.view.lines.len());
    let visible: Vec<(usize, TableLine)> = props.view.lines[start..end]
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, line)| (start + i, line))
        .collect();
    let more_below = props.view.lines.len() - end;

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color,
        ) {
            View(height: 1, width: 100pct, flex_direction: FlexDirection::Row, padding_left: 1) {
                #(COLUMN_HEADERS.iter().zip(WIDTHS).map(|(header, width)| element! {
                    View(
                        width: if width == 0 { Size::Auto } else { Size::Length(width) },
                        flex_grow: if width == 0 { 1.0 } else { 0.0 },
                        flex_shrink: if width == 0 { 1.0 } else { 0.0 },
                        overflow: Overflow::Hidden,
                    ) {
                        Text(content: *header, color: theme.text_dimmed, weight: Weight::Bold)
                    }
                }))
            }

            #(visible.into_iter().map(|(index, line)| match line {
                TableLine::Placeholder { message, .. } => element! {
                    View(height: 1, width: 100pct, justify_content: JustifyContent::Center) {
                        Text(content: message, color: theme.text_dimmed)
                    }
                }
                .into_any(),
                TableLine::Row(row) => element! {
                    IncidentRow(
                        row,
                        is_selected: index == props.selected_index,
                        has_focus: props.has_focus,
                    )
                }
                .into_any(),
            }))

            #((more_below > 0).then(|| element! {
                View(height: 1, padding_left: 1) {
                    Text(
                        content: format!("  {} more below", more_below),
                        color: theme.text_dimmed,
                    )
                }
            }))
        }
    }
}

#[derive(Default, Props)]
pub struct IncidentRowProps {
    pub row: Option<RowView>,
    pub is_selected: bool,
    pub has_focus: bool,
}

#[component]
pub fn IncidentRow(props: &IncidentRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(row) = props.row.as_ref() else {
        return element! { View() }.into_any();
    };

    let style = if row.has_class("breached") {
        RowStyle::Breached
    } else if row.has_class("at-risk") {
        RowStyle::AtRisk
    } else {
        RowStyle::Normal
    };
    let completed = row.has_class("completed");
    let row_color = theme.row_color(style, completed);
    let background = (props.is_selected && props.has_focus).then_some(theme.selected_background);

    let colors = [
        if completed { row_color } else { theme.id_color },
        row_color,
        if completed { row_color } else { theme.priority_color(row.priority) },
        if row.time_breached { theme.time_breached } else { row_color },
        row_color,
        row_color,
        if row.control_enabled { theme.highlight } else { theme.row_completed },
    ];

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            background_color: background,
        ) {
            #(row.cells.iter().zip(WIDTHS).zip(colors).enumerate().map(|(column, ((cell, width), color))| {
                let content = if column == 6 {
                    format!("[{cell}]")
                } else {
                    cell.clone()
                };
                element! {
                    View(
                        width: if width == 0 { Size::Auto } else { Size::Length(width) },
                        flex_grow: if width == 0 { 1.0 } else { 0.0 },
                        flex_shrink: if width == 0 { 1.0 } else { 0.0 },
                        overflow: Overflow::Hidden,
                    ) {
                        Text(content, color)
                    }
                }
            }))
        }
    }
    .into_any()
}
