//! Transient status line shown above the footer

use iocraft::prelude::*;
use std::time::{Duration, Instant};

use crate::dashboard::LoadOutcome;
use crate::dashboard::completion::CompletionOutcome;
use crate::types::Ticket;

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub timestamp: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            timestamp: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    /// Error toast for a failed table load; `None` when the load applied or was discarded
    pub fn for_load(outcome: LoadOutcome) -> Option<Self> {
        match outcome {
            LoadOutcome::Failed { kind, .. } => {
                Some(Self::error(format!("Error loading data ({kind:?})")))
            }
            LoadOutcome::Loaded { .. } | LoadOutcome::Discarded { .. } => None,
        }
    }

    /// Feedback for pressing the completion control on `ticket_id`'s row
    pub fn for_completion(ticket_id: &str, outcome: CompletionOutcome) -> Self {
        match outcome {
            CompletionOutcome::Completed => Self::success(format!("{ticket_id} marked as done")),
            CompletionOutcome::AlreadyCompleted => {
                Self::info(format!("{ticket_id} is already completed"))
            }
            CompletionOutcome::Unbound => Self::warning("Row was replaced by a newer load"),
        }
    }

    /// One-line summary of a single ticket
    pub fn for_ticket(ticket: &Ticket) -> Self {
        Self::info(format!(
            "{} | {} | {} | {} | {:.1}h left | {}",
            ticket.id,
            ticket.title,
            ticket.effective_priority(),
            ticket.status,
            ticket.hours_left,
            ticket.effective_assignee(),
        ))
    }

    pub fn is_expired(&self) -> bool {
        self.timestamp.elapsed() >= TOAST_TTL
    }

    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Warning => Color::Yellow,
            ToastLevel::Error => Color::Red,
            ToastLevel::Success => Color::Green,
        }
    }
}

/// Render the toast unless it is absent or expired
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    toast.as_ref().filter(|t| !t.is_expired()).map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: Color::Black,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: t.color(),
            ) {
                Text(content: t.message.clone(), color: t.color())
            }
        }
        .into_any()
    })
}
