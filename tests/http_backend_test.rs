#[path = "common/mod.rs"]
mod common;

use common::stub_server::StubServer;
use serde_json::json;

use slaboard::api::{Backend, HttpBackend};
use slaboard::dashboard::query::ViewSelector;
use slaboard::dashboard::table::TableLine;
use slaboard::dashboard::{Dashboard, DashboardOptions, LoadOutcome};
use slaboard::error::{ErrorKind, SlaError};

fn tickets_body() -> String {
    json!({
        "tickets": [
            {
                "id": "INC-100",
                "title": "Payment gateway timeout",
                "priority": "High",
                "status": "at-risk",
                "hours_left": 0.75,
                "assigned_to": "Dana"
            },
            {
                "id": 101,
                "title": "Slow dashboard",
                "status": "ok",
                "hours_left": "6"
            }
        ]
    })
    .to_string()
}

fn metrics_body() -> String {
    json!({
        "total_tickets": 2,
        "by_priority": {"High": 1, "Medium": 0, "Low": 1},
        "sla_achievement_rate_pct": 87.5,
        "breached_count": 0
    })
    .to_string()
}

// ============================================================================
// Endpoint contract
// ============================================================================

#[tokio::test]
async fn test_fetch_tickets_decodes_lenient_records() {
    let server = StubServer::start(vec![("GET /tickets", 200, tickets_body())]).await;
    let backend = HttpBackend::new(&server.base_url).unwrap();

    let tickets = backend.fetch_tickets(&ViewSelector::All).await.unwrap();
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].id, "INC-100");
    assert_eq!(tickets[0].assigned_to.as_deref(), Some("Dana"));
    assert_eq!(tickets[1].id, "101");
    assert_eq!(tickets[1].priority, None);
    assert_eq!(tickets[1].hours_left, 6.0);
}

#[tokio::test]
async fn test_search_uses_results_field_and_encodes_term() {
    let server = StubServer::start(vec![(
        "GET /search?q=db+outage",
        200,
        json!({"results": [{"id": "INC-7", "title": "db outage"}]}).to_string(),
    )])
    .await;
    let backend = HttpBackend::new(&server.base_url).unwrap();

    let tickets = backend
        .fetch_tickets(&ViewSelector::for_search(" db outage "))
        .await
        .unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(server.requests(), vec!["GET /search?q=db+outage"]);
}

#[tokio::test]
async fn test_missing_list_field_is_empty() {
    let server =
        StubServer::start(vec![("GET /tickets?status=ok", 200, "{}".to_string())]).await;
    let backend = HttpBackend::new(&server.base_url).unwrap();

    let tickets = backend
        .fetch_tickets(&ViewSelector::for_filter("ok"))
        .await
        .unwrap();
    assert!(tickets.is_empty());
}

#[tokio::test]
async fn test_fetch_ticket_not_found() {
    let server = StubServer::start(vec![]).await;
    let backend = HttpBackend::new(&server.base_url).unwrap();

    let err = backend.fetch_ticket("INC-404").await.unwrap_err();
    assert!(matches!(err, SlaError::TicketNotFound(ref id) if id == "INC-404"));
}

#[tokio::test]
async fn test_status_error_carries_backend_message() {
    let server = StubServer::start(vec![(
        "GET /metrics/summary",
        500,
        json!({"error": "database unavailable"}).to_string(),
    )])
    .await;
    let backend = HttpBackend::new(&server.base_url).unwrap();

    let err = backend.fetch_metrics().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HttpStatus);
    assert!(err.to_string().contains("database unavailable"));
}

#[tokio::test]
async fn test_metrics_missing_required_field_is_malformed() {
    let server = StubServer::start(vec![(
        "GET /metrics/summary",
        200,
        json!({"total_tickets": 3}).to_string(),
    )])
    .await;
    let backend = HttpBackend::new(&server.base_url).unwrap();

    let err = backend.fetch_metrics().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[tokio::test]
async fn test_chat_posts_message_json() {
    let server = StubServer::start(vec![(
        "POST /chat",
        200,
        json!({"response": "Hello."}).to_string(),
    )])
    .await;
    let backend = HttpBackend::new(&server.base_url).unwrap();

    let reply = backend.send_chat("menu").await.unwrap();
    assert_eq!(reply, "Hello.");
    assert_eq!(server.requests(), vec![r#"POST /chat {"message":"menu"}"#]);
}

#[tokio::test]
async fn test_chat_without_response_field_is_malformed() {
    let server = StubServer::start(vec![(
        "POST /chat",
        200,
        json!({"reply": "Hello."}).to_string(),
    )])
    .await;
    let backend = HttpBackend::new(&server.base_url).unwrap();

    let err = backend.send_chat("hi").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(&format!("http://{addr}")).unwrap();
    let err = backend.health().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

// ============================================================================
// Dashboard over HTTP
// ============================================================================

#[tokio::test]
async fn test_dashboard_start_over_http() {
    let server = StubServer::start(vec![
        ("GET /tickets", 200, tickets_body()),
        ("GET /metrics/summary", 200, metrics_body()),
        (
            "POST /chat",
            200,
            json!({"response": "Hi! Ask about breaches."}).to_string(),
        ),
    ])
    .await;
    let backend = HttpBackend::new(&server.base_url).unwrap();
    let dashboard = Dashboard::new(backend, DashboardOptions::default());

    dashboard.start().await;

    let view = dashboard.table_view();
    assert_eq!(view.data_row_count(), 2);
    let TableLine::Row(first) = &view.lines[0] else {
        panic!("expected a data row");
    };
    assert!(first.has_class("at-risk"));
    assert_eq!(first.countdown(), "00:45:00");

    let metrics = dashboard.metrics_view();
    assert_eq!(metrics.total, "2");
    assert_eq!(metrics.unassigned, "1");
    assert_eq!(metrics.sla_percentage, "87.5%");

    let chat = dashboard.chat_messages();
    assert_eq!(chat.len(), 1);
    assert_eq!(chat[0].lines, vec!["Hi!", "Ask about breaches."]);

    let mut requests = server.requests();
    requests.sort();
    assert_eq!(
        requests,
        vec![
            "GET /metrics/summary",
            "GET /tickets",
            r#"POST /chat {"message":"menu"}"#,
        ]
    );
}

#[tokio::test]
async fn test_dashboard_backend_down() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(&format!("http://{addr}")).unwrap();
    let dashboard = Dashboard::new(backend, DashboardOptions::default());
    dashboard.start().await;

    assert!(matches!(
        dashboard.refresh().await,
        LoadOutcome::Failed {
            kind: ErrorKind::Transport,
            ..
        }
    ));
    let view = dashboard.table_view();
    assert!(matches!(
        view.lines.as_slice(),
        [TableLine::Placeholder {
            message: "Error loading data.",
            ..
        }]
    ));
    assert_eq!(dashboard.metrics_view().total, "-");
    assert_eq!(
        dashboard.chat_messages()[0].lines,
        vec!["Unable to connect to the backend.", "Please start the backend server."]
    );
}
