//! reqwest implementation of [`Backend`].
//!
//! No request timeout is configured and failed requests are never retried:
//! a failure is reported once and the next user action gets a fresh attempt.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::dashboard::query::ViewSelector;
use crate::error::{Result, SlaError};
use crate::types::{
    ChatRequest, ChatResponse, HealthStatus, MetricsSnapshot, Ticket, TicketListResponse,
};

use super::error::{ApiError, extract_error_message};
use super::Backend;

/// HTTP client for the SLA backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    /// Base URL, always ending in `/` so relative joins keep any path prefix
    base_url: Url,
}

impl HttpBackend {
    /// Create a client for the given base URL, e.g. `http://127.0.0.1:8080`
    pub fn new(base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url.trim())?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(SlaError::Config(format!(
                "api_url must be an http(s) URL, got '{}'",
                base_url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);

        let client = Client::builder()
            .user_agent(concat!("slaboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: url,
        })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a backend path (without leading slash) plus query pairs
    pub fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// URL fetched for a view selector
    pub fn selector_url(&self, selector: &ViewSelector) -> Result<Url> {
        match selector.query_pair() {
            Some(pair) => self.endpoint(selector.path(), &[pair]),
            None => self.endpoint(selector.path(), &[]),
        }
    }

    /// URL of a single ticket; the id is percent-encoded as one path segment
    pub fn ticket_url(&self, id: &str) -> Result<Url> {
        let mut url = self.endpoint("tickets/", &[])?;
        url.path_segments_mut()
            .map_err(|_| SlaError::Config("api_url cannot carry path segments".to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let path = url.path().to_string();
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        decode_json(&path, check_status(&path, response).await?).await
    }
}

/// Turn non-success responses into [`ApiError`]
async fn check_status(path: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::new(path, status)
        .with_message(extract_error_message(&body))
        .into())
}

async fn decode_json<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| SlaError::Malformed {
        path: path.to_string(),
        message: e.to_string(),
    })
}

impl Backend for HttpBackend {
    async fn fetch_metrics(&self) -> Result<MetricsSnapshot> {
        let url = self.endpoint("metrics/summary", &[])?;
        self.get_json(url).await
    }

    async fn fetch_tickets(&self, selector: &ViewSelector) -> Result<Vec<Ticket>> {
        let url = self.selector_url(selector)?;
        let list: TicketListResponse = self.get_json(url).await?;
        Ok(list.into_tickets())
    }

    async fn fetch_ticket(&self, id: &str) -> Result<Ticket> {
        let url = self.ticket_url(id)?;
        match self.get_json(url).await {
            Err(SlaError::Api(e)) if e.is_not_found() => {
                Err(SlaError::TicketNotFound(id.to_string()))
            }
            other => other,
        }
    }

    async fn send_chat(&self, message: &str) -> Result<String> {
        let url = self.endpoint("chat", &[])?;
        let path = url.path().to_string();
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .json(&ChatRequest { message })
            .send()
            .await?;
        let reply: ChatResponse = decode_json(&path, check_status(&path, response).await?).await?;
        Ok(reply.response)
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("health", &[])?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(base).unwrap()
    }

    #[test]
    fn test_selector_urls() {
        let b = backend("http://127.0.0.1:8080");
        assert_eq!(
            b.selector_url(&ViewSelector::All).unwrap().as_str(),
            "http://127.0.0.1:8080/tickets"
        );
        assert_eq!(
            b.selector_url(&ViewSelector::Status("at-risk".to_string()))
                .unwrap()
                .as_str(),
            "http://127.0.0.1:8080/tickets?status=at-risk"
        );
        assert_eq!(
            b.selector_url(&ViewSelector::Search("db & cache".to_string()))
                .unwrap()
                .as_str(),
            "http://127.0.0.1:8080/search?q=db+%26+cache"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let b = backend("https://example.com/sla");
        assert_eq!(b.base_url().as_str(), "https://example.com/sla/");
        assert_eq!(
            b.endpoint("metrics/summary", &[]).unwrap().as_str(),
            "https://example.com/sla/metrics/summary"
        );
    }

    #[test]
    fn test_ticket_url_encodes_id() {
        let b = backend("http://localhost:8080/");
        assert_eq!(
            b.ticket_url("INC-001").unwrap().as_str(),
            "http://localhost:8080/tickets/INC-001"
        );
        assert_eq!(
            b.ticket_url("a/b").unwrap().as_str(),
            "http://localhost:8080/tickets/a%2Fb"
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert!(HttpBackend::new("ftp://example.com").is_err());
        assert!(HttpBackend::new("not a url").is_err());
    }
}
