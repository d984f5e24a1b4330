//! App header bar component
//!
//! Displays the application title, the backend and the active view selector.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Backend base URL
    pub api_url: String,
    /// Active view selector, e.g. `/tickets?status=breached`
    pub selector: String,
    /// Number of data rows on screen
    pub row_count: usize,
}

/// App header bar
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: "SLA Incident Dashboard",
                    color: theme.text,
                    weight: Weight::Bold,
                )
                Text(content: props.api_url.clone(), color: theme.text_dimmed)
            }
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: props.selector.clone(), color: theme.text)
                Text(
                    content: format!("{} incidents", props.row_count),
                    color: theme.text_dimmed,
                )
            }
        }
    }
}
