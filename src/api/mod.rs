//! Client side of the SLA backend contract.
//!
//! The dashboard only talks to the backend through the [`Backend`] trait so
//! the coordinator can be driven by an in-memory fake in tests.

pub mod error;
pub mod http;

use crate::dashboard::query::ViewSelector;
use crate::error::Result;
use crate::types::{HealthStatus, MetricsSnapshot, Ticket};

pub use error::ApiError;
pub use http::HttpBackend;

/// Common interface for SLA backends
pub trait Backend: Send + Sync + 'static {
    /// Fetch the summary counters (`GET /metrics/summary`)
    fn fetch_metrics(&self) -> impl std::future::Future<Output = Result<MetricsSnapshot>> + Send;

    /// Fetch the tickets matching a view selector (`GET /tickets` or `GET /search`)
    fn fetch_tickets(
        &self,
        selector: &ViewSelector,
    ) -> impl std::future::Future<Output = Result<Vec<Ticket>>> + Send;

    /// Fetch a single ticket (`GET /tickets/<id>`)
    fn fetch_ticket(&self, id: &str) -> impl std::future::Future<Output = Result<Ticket>> + Send;

    /// Send a chat message and return the raw reply text (`POST /chat`)
    fn send_chat(&self, message: &str) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Probe backend liveness (`GET /health`)
    fn health(&self) -> impl std::future::Future<Output = Result<HealthStatus>> + Send;
}
