pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod tui;
pub mod types;

pub use api::{Backend, HttpBackend};
pub use config::{Config, StaleResponsePolicy};
pub use dashboard::{ChatOutcome, Dashboard, DashboardOptions, LoadOutcome};
pub use error::{Result, SlaError};
pub use types::{HealthStatus, MetricsSnapshot, Ticket, TicketPriority};
