//! Theme system for TUI colors and styles
//!
//! Defines color constants consistent with the CLI output (commands/mod.rs).

use iocraft::prelude::Color;

use crate::dashboard::rows::RowStyle;
use crate::types::TicketPriority;

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Priority tag colors (consistent with CLI)
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,

    // Row classes
    pub row_breached: Color,
    pub row_at_risk: Color,
    pub row_completed: Color,
    pub time_breached: Color,

    // Gauge segments
    pub gauge_achieved: Color,
    pub gauge_missed: Color,

    // Chat bubbles
    pub chat_user: Color,
    pub chat_bot: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub selected_background: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            priority_high: Color::Red,
            priority_medium: Color::Yellow,
            priority_low: Color::Green,

            row_breached: Color::Red,
            row_at_risk: Color::Yellow,
            row_completed: GREY,
            time_breached: Color::Red,

            gauge_achieved: Color::Green,
            gauge_missed: Color::Red,

            chat_user: Color::Cyan,
            chat_bot: Color::Green,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            selected_background: Color::Rgb {
                r: 40,
                g: 40,
                b: 80,
            },
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a priority tag
    pub fn priority_color(&self, priority: TicketPriority) -> Color {
        match priority {
            TicketPriority::High => self.priority_high,
            TicketPriority::Medium => self.priority_medium,
            TicketPriority::Low => self.priority_low,
        }
    }

    /// Text color for a row given its style class and completion state
    pub fn row_color(&self, style: RowStyle, completed: bool) -> Color {
        if completed {
            return self.row_completed;
        }
        match style {
            RowStyle::Breached => self.row_breached,
            RowStyle::AtRisk => self.row_at_risk,
            RowStyle::Normal => self.text,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
