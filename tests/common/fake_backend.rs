//! Scripted in-memory backend for driving the dashboard coordinator.
//!
//! Responses are queued per endpoint. The last queued response for an
//! endpoint is repeated once the queue runs down to it, so a single
//! `respond_*` call serves every later request.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::StatusCode;

use slaboard::api::{ApiError, Backend};
use slaboard::dashboard::query::ViewSelector;
use slaboard::error::{Result, SlaError};
use slaboard::types::{HealthStatus, MetricsSnapshot, Ticket};

#[derive(Debug, Clone)]
struct Scripted<T> {
    delay: Duration,
    value: Option<T>,
}

impl<T: Clone> Scripted<T> {
    async fn resolve(self, path: &str) -> Result<T> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.value.ok_or_else(|| {
            SlaError::Api(ApiError::new(path, StatusCode::INTERNAL_SERVER_ERROR))
        })
    }
}

fn next<T: Clone>(queue: &mut VecDeque<Scripted<T>>) -> Option<Scripted<T>> {
    if queue.len() > 1 {
        queue.pop_front()
    } else {
        queue.front().cloned()
    }
}

#[derive(Default)]
pub struct FakeBackend {
    /// Keyed by the selector's display form, e.g. `/tickets?status=breached`
    tickets: Mutex<HashMap<String, VecDeque<Scripted<Vec<Ticket>>>>>,
    metrics: Mutex<VecDeque<Scripted<MetricsSnapshot>>>,
    chat: Mutex<VecDeque<Scripted<String>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_tickets(&self, selector: &str, tickets: Vec<Ticket>) -> &Self {
        self.respond_tickets_after(selector, Duration::ZERO, tickets)
    }

    pub fn respond_tickets_after(
        &self,
        selector: &str,
        delay: Duration,
        tickets: Vec<Ticket>,
    ) -> &Self {
        self.tickets
            .lock()
            .entry(selector.to_string())
            .or_default()
            .push_back(Scripted {
                delay,
                value: Some(tickets),
            });
        self
    }

    pub fn fail_tickets(&self, selector: &str) -> &Self {
        self.tickets
            .lock()
            .entry(selector.to_string())
            .or_default()
            .push_back(Scripted {
                delay: Duration::ZERO,
                value: None,
            });
        self
    }

    pub fn respond_metrics(&self, snapshot: MetricsSnapshot) -> &Self {
        self.metrics.lock().push_back(Scripted {
            delay: Duration::ZERO,
            value: Some(snapshot),
        });
        self
    }

    pub fn fail_metrics(&self) -> &Self {
        self.metrics.lock().push_back(Scripted {
            delay: Duration::ZERO,
            value: None,
        });
        self
    }

    pub fn respond_chat(&self, reply: &str) -> &Self {
        self.chat.lock().push_back(Scripted {
            delay: Duration::ZERO,
            value: Some(reply.to_string()),
        });
        self
    }

    pub fn fail_chat(&self) -> &Self {
        self.chat.lock().push_back(Scripted {
            delay: Duration::ZERO,
            value: None,
        });
        self
    }

    /// Every request seen so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }
}

impl Backend for FakeBackend {
    async fn fetch_metrics(&self) -> Result<MetricsSnapshot> {
        self.record("GET /metrics/summary".to_string());
        let scripted = next(&mut self.metrics.lock());
        match scripted {
            Some(s) => s.resolve("/metrics/summary").await,
            None => Err(SlaError::Other("no metrics scripted".to_string())),
        }
    }

    async fn fetch_tickets(&self, selector: &ViewSelector) -> Result<Vec<Ticket>> {
        let key = selector.to_string();
        self.record(format!("GET {key}"));
        let scripted = self.tickets.lock().get_mut(&key).and_then(next);
        match scripted {
            Some(s) => s.resolve(selector.path()).await,
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_ticket(&self, id: &str) -> Result<Ticket> {
        self.record(format!("GET /tickets/{id}"));
        let found = self
            .tickets
            .lock()
            .values()
            .flat_map(|queue| queue.iter())
            .filter_map(|s| s.value.as_ref())
            .flatten()
            .find(|t| t.id == id)
            .cloned();
        found.ok_or_else(|| SlaError::TicketNotFound(id.to_string()))
    }

    async fn send_chat(&self, message: &str) -> Result<String> {
        self.record(format!("POST /chat {message}"));
        let scripted = next(&mut self.chat.lock());
        match scripted {
            Some(s) => s.resolve("/chat").await,
            None => Err(SlaError::Other("no chat reply scripted".to_string())),
        }
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.record("GET /health".to_string());
        Ok(HealthStatus {
            status: "ok".to_string(),
            time: None,
        })
    }
}
