//! Chat transcript with its input line

use iocraft::prelude::*;
use jiff::tz::TimeZone;

use super::search_box::InlineInput;
use crate::dashboard::chat::{ChatMessage, Sender};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ChatPaneProps {
    pub messages: Vec<ChatMessage>,
    pub input: Option<State<String>>,
    pub has_focus: bool,
    /// Lines of transcript that fit above the input
    pub visible_height: usize,
}

/// Latest bubbles first trimmed to fit, newest at the bottom
#[component]
pub fn ChatPane(props: &ChatPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let mut lines: Vec<(String, Color)> = Vec::new();
    for message in &props.messages {
        let (who, color) = match message.sender {
            Sender::User => ("you", theme.chat_user),
            Sender::Bot => ("bot", theme.chat_bot),
        };
        let time = message.at.to_zoned(TimeZone::system()).strftime("%H:%M");
        lines.push((format!("{who} {time}"), theme.text_dimmed));
        for line in &message.lines {
            lines.push((format!("  {line}"), color));
        }
    }
    let skip = lines.len().saturating_sub(props.visible_height);

    element! {
        View(
            width: 40,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: "SLA Assistant", weight: Weight::Bold, color: theme.text)
            View(flex_grow: 1.0, flex_direction: FlexDirection::Column, overflow: Overflow::Hidden) {
                #(lines.into_iter().skip(skip).map(|(content, color)| element! {
                    Text(content, color)
                }))
            }
            InlineInput(
                prompt: ">",
                value: props.input,
                placeholder: "ask about your SLAs (c)",
                has_focus: props.has_focus,
            )
        }
    }
}
