//! Minimal HTTP/1.1 server answering canned JSON per request line.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<()>,
}

impl StubServer {
    /// Serve `routes`, keyed by `"<METHOD> <target>"`, e.g. `"GET /tickets?status=ok"`.
    ///
    /// Unknown routes get a 404 with a JSON `error` field.
    pub async fn start(routes: Vec<(&str, u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Failed to read stub address");
        let routes: Arc<HashMap<String, (u16, String)>> = Arc::new(
            routes
                .into_iter()
                .map(|(key, status, body)| (key.to_string(), (status, body)))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let task = tokio::spawn({
            let requests = Arc::clone(&requests);
            async move {
                while let Ok((stream, _)) = listener.accept().await {
                    let routes = Arc::clone(&routes);
                    let requests = Arc::clone(&requests);
                    tokio::spawn(async move {
                        let _ = serve(stream, &routes, &requests).await;
                    });
                }
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            task,
        }
    }

    /// Requests seen so far as `"<METHOD> <target>"`, with the body appended when present
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(
    mut stream: TcpStream,
    routes: &HashMap<String, (u16, String)>,
    requests: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request_line = head.lines().next().unwrap_or_default();
    let key = request_line
        .rsplit_once(' ')
        .map(|(key, _version)| key.to_string())
        .unwrap_or_default();
    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();
    requests.lock().push(if body.is_empty() {
        key.clone()
    } else {
        format!("{key} {body}")
    });

    let (status, body) = routes
        .get(&key)
        .cloned()
        .unwrap_or_else(|| (404, r#"{"error":"not found"}"#.to_string()));
    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        if status < 400 { "OK" } else { "Error" },
        body.len()
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
