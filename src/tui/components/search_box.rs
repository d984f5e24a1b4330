//! Single-line text input used for search and chat

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the InlineInput component
#[derive(Default, Props)]
pub struct InlineInputProps {
    /// Prefix glyph shown before the input (e.g. "/" or ">")
    pub prompt: &'static str,
    /// State holding the input text
    pub value: Option<State<String>>,
    /// Shown dimmed while the input is empty and unfocused
    pub placeholder: &'static str,
    /// Whether the input has focus
    pub has_focus: bool,
}

/// Inline text input without borders
#[component]
pub fn InlineInput(props: &InlineInputProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_focus = props.has_focus;

    let Some(mut value) = props.value else {
        return element! {
            View(flex_direction: FlexDirection::Row, height: 1) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    let show_placeholder = !has_focus && value.read().is_empty();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            width: 100pct,
            height: 1,
        ) {
            View(margin_right: 1) {
                Text(
                    content: props.prompt,
                    color: if has_focus { theme.border_focused } else { theme.text_dimmed },
                )
            }

            View(flex_grow: 1.0) {
                #(if show_placeholder {
                    element! {
                        Text(content: props.placeholder, color: theme.text_dimmed)
                    }
                    .into_any()
                } else {
                    element! {
                        TextInput(
                            value: value.to_string(),
                            has_focus,
                            on_change: move |new_value| value.set(new_value),
                            color: theme.text,
                        )
                    }
                    .into_any()
                })
            }
        }
    }
}
