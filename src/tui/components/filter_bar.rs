//! Status filter buttons with the search input beside them

use iocraft::prelude::*;

use super::search_box::InlineInput;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct FilterBarProps {
    pub filters: Vec<String>,
    pub active: usize,
    pub search: Option<State<String>>,
    pub search_focused: bool,
}

#[component]
pub fn FilterBar(props: &FilterBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            gap: 1,
        ) {
            #(props.filters.iter().enumerate().map(|(i, filter)| {
                let active = i == props.active;
                element! {
                    Text(
                        content: if active {
                            format!("[{}:{}]", i + 1, filter)
                        } else {
                            format!(" {}:{} ", i + 1, filter)
                        },
                        color: if active { theme.text } else { theme.text_dimmed },
                        weight: if active { Weight::Bold } else { Weight::Normal },
                    )
                }
            }))

            View(flex_grow: 1.0, margin_left: 2) {
                InlineInput(
                    prompt: "/",
                    value: props.search,
                    placeholder: "search incidents",
                    has_focus: props.search_focused,
                )
            }
        }
    }
}
