//! Dashboard building blocks

pub mod chat_pane;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod incident_table;
pub mod metrics_panel;
pub mod search_box;
pub mod shortcuts;
pub mod toast;

pub use chat_pane::{ChatPane, ChatPaneProps};
pub use filter_bar::{FilterBar, FilterBarProps};
pub use footer::{Footer, FooterProps, Shortcut, chat_shortcuts, search_shortcuts, table_shortcuts};
pub use header::{Header, HeaderProps};
pub use incident_table::{IncidentRow, IncidentRowProps, IncidentTable, IncidentTableProps};
pub use metrics_panel::{MetricsPanel, MetricsPanelProps};
pub use search_box::{InlineInput, InlineInputProps};
pub use shortcuts::ShortcutsBuilder;
pub use toast::{Toast, ToastLevel, render_toast};
