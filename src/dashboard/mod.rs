//! Dashboard coordinator.
//!
//! [`Dashboard`] owns the incident table, its countdown, the metrics panel,
//! the query controller and the chat log, and performs every backend load.
//! Locks are `parking_lot` mutexes that are never held across an `.await`;
//! when both are needed the table lock is taken before the countdown lock.

pub mod chat;
pub mod completion;
pub mod countdown;
pub mod metrics;
pub mod query;
pub mod rows;
pub mod table;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::api::Backend;
use crate::config::{Config, StaleResponsePolicy};
use crate::error::{ErrorKind, Result};
use crate::types::{HealthStatus, Ticket};

use chat::{CHAT_FALLBACK, ChatLog, ChatMessage, PRIME_FALLBACK};
use completion::CompletionOutcome;
use countdown::CountdownEngine;
use metrics::{MetricsPanel, MetricsView};
use query::{QueryController, ViewSelector};
use rows::RowId;
use table::{IncidentTable, TableView};

/// Construction options, usually taken from [`Config`]
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub stale_responses: StaleResponsePolicy,
    pub filters: Vec<String>,
    /// Message sent once at startup; `None` disables priming
    pub prime_message: Option<String>,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for DashboardOptions {
    fn from(config: &Config) -> Self {
        Self {
            stale_responses: config.stale_responses,
            filters: config.filters(),
            prime_message: config.prime_message().map(str::to_string),
        }
    }
}

/// Result of one table load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rows replaced; `rows` is zero when the placeholder is shown
    Loaded { load: u64, rows: usize },
    /// The fetch failed and the error placeholder is shown
    Failed { load: u64, kind: ErrorKind },
    /// A newer request was issued while this one was in flight
    Discarded { request: u64 },
}

/// Result of a chat exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    Replied,
    Fallback,
    /// Blank input, or priming already done or disabled
    Skipped,
}

pub struct Dashboard<B: Backend> {
    backend: Arc<B>,
    table: Arc<Mutex<IncidentTable>>,
    countdown: Mutex<CountdownEngine>,
    metrics: Mutex<MetricsPanel>,
    query: Mutex<QueryController>,
    chat: Mutex<ChatLog>,
    requests: AtomicU64,
    policy: StaleResponsePolicy,
    prime_message: Option<String>,
}

impl<B: Backend> Dashboard<B> {
    pub fn new(backend: B, options: DashboardOptions) -> Self {
        let table = Arc::new(Mutex::new(IncidentTable::new()));
        Self {
            backend: Arc::new(backend),
            countdown: Mutex::new(CountdownEngine::new(Arc::clone(&table))),
            table,
            metrics: Mutex::new(MetricsPanel::new()),
            query: Mutex::new(QueryController::new(options.filters)),
            chat: Mutex::new(ChatLog::new()),
            requests: AtomicU64::new(0),
            policy: options.stale_responses,
            prime_message: options.prime_message,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Startup sequence: metrics and the current view load together, then
    /// the chat is primed.
    pub async fn start(&self) {
        let selector = self.query.lock().selector().clone();
        futures::future::join(self.load_metrics(), self.load_table(selector)).await;
        self.prime_chat().await;
    }

    /// Fetch the summary counters. Failures keep the previous values.
    pub async fn load_metrics(&self) -> bool {
        match self.backend.fetch_metrics().await {
            Ok(snapshot) => {
                self.metrics.lock().apply(snapshot);
                true
            }
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), "failed to load metrics: {e}");
                false
            }
        }
    }

    /// Fetch tickets for `selector` and replace the table with them.
    pub async fn load_table(&self, selector: ViewSelector) -> LoadOutcome {
        let request = self.requests.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(request, %selector, "loading tickets");
        let result = self.backend.fetch_tickets(&selector).await;

        let mut table = self.table.lock();
        if self.policy == StaleResponsePolicy::Discard
            && self.requests.load(Ordering::SeqCst) != request
        {
            tracing::debug!(request, %selector, "discarding stale ticket response");
            return LoadOutcome::Discarded { request };
        }

        match result {
            Ok(tickets) => {
                let load = table.replace(&tickets);
                let unassigned = table.unassigned_count();
                {
                    let mut countdown = self.countdown.lock();
                    if table.is_empty() {
                        countdown.cancel();
                    } else {
                        countdown.restart(load);
                    }
                }
                drop(table);

                self.metrics.lock().set_unassigned(unassigned);
                LoadOutcome::Loaded {
                    load,
                    rows: tickets.len(),
                }
            }
            Err(e) => {
                tracing::error!(kind = ?e.kind(), %selector, "failed to load tickets: {e}");
                let load = table.show_error();
                self.countdown.lock().cancel();
                LoadOutcome::Failed {
                    load,
                    kind: e.kind(),
                }
            }
        }
    }

    /// Apply new search box text and reload
    pub async fn search_input(&self, input: &str) -> LoadOutcome {
        let selector = self.query.lock().search_input(input);
        self.load_table(selector).await
    }

    /// Activate a status filter by value and reload
    pub async fn select_filter(&self, value: &str) -> Result<LoadOutcome> {
        let selector = self.query.lock().select_filter(value)?;
        Ok(self.load_table(selector).await)
    }

    /// Move the active filter by `delta` positions and reload
    pub async fn cycle_filter(&self, delta: isize) -> LoadOutcome {
        let selector = self.query.lock().cycle_filter(delta);
        self.load_table(selector).await
    }

    /// Reissue the current selector
    pub async fn refresh(&self) -> LoadOutcome {
        let selector = self.query.lock().selector().clone();
        self.load_table(selector).await
    }

    /// Mark a row done locally
    pub fn complete(&self, id: RowId) -> CompletionOutcome {
        let outcome = self.table.lock().complete(id);
        tracing::debug!(?id, ?outcome, "completion control activated");
        outcome
    }

    /// Send a user message and record the reply
    pub async fn send_chat(&self, input: &str) -> ChatOutcome {
        let Some(message) = self.chat.lock().push_user(input) else {
            return ChatOutcome::Skipped;
        };
        self.exchange(&message, CHAT_FALLBACK).await
    }

    /// Send the priming message, at most once per dashboard
    pub async fn prime_chat(&self) -> ChatOutcome {
        let Some(message) = self.prime_message.as_deref() else {
            return ChatOutcome::Skipped;
        };
        if !self.chat.lock().begin_prime() {
            return ChatOutcome::Skipped;
        }
        self.exchange(message, PRIME_FALLBACK).await
    }

    async fn exchange(&self, message: &str, fallback: &str) -> ChatOutcome {
        match self.backend.send_chat(message).await {
            Ok(reply) => {
                self.chat.lock().push_bot(&reply);
                ChatOutcome::Replied
            }
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), "chat request failed: {e}");
                self.chat.lock().push_bot(fallback);
                ChatOutcome::Fallback
            }
        }
    }

    pub async fn fetch_ticket(&self, id: &str) -> Result<Ticket> {
        self.backend.fetch_ticket(id).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.backend.health().await
    }

    pub fn table_view(&self) -> TableView {
        self.table.lock().view()
    }

    pub fn metrics_view(&self) -> MetricsView {
        self.metrics.lock().view()
    }

    pub fn chat_messages(&self) -> Vec<ChatMessage> {
        self.chat.lock().messages().to_vec()
    }

    /// Snapshot of the query controller for display
    pub fn query(&self) -> QueryController {
        self.query.lock().clone()
    }

    /// Receiver bumped after every countdown tick
    pub fn subscribe_ticks(&self) -> watch::Receiver<u64> {
        self.countdown.lock().subscribe()
    }

    /// Load served by the running countdown, if any
    pub fn countdown_load(&self) -> Option<u64> {
        self.countdown.lock().running_load()
    }

    /// Number of table loads requested so far
    pub fn requests_issued(&self) -> u64 {
        self.requests.load(Ordering::SeqCst)
    }
}
