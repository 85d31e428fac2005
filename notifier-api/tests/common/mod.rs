//! Shared test utilities: a minimal in-process HTTP server that mocks the
//! notifier configuration api (the two GET list endpoints and the
//! per-record PUT endpoints) and records every request it receives.
#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use serde_json::{Value, json};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    sync::{Mutex, oneshot},
};

pub const TEST_TOKEN: &str = "test-token-abc123";

/// One recorded PUT request.
#[derive(Debug, Clone)]
pub struct RecordedPut {
    pub path: String,
    pub token: Option<String>,
    pub body: Value,
}

/// Mock server state: canned responses plus the recorded requests.
#[derive(Debug, Default)]
pub struct MockState {
    /// Response body for `GET /notifier/api/addressbook` (a JSON array)
    pub address_book: Value,
    /// Response body for `GET /notifier/api/reminder` (the wrapped form)
    pub reminder_list: Value,
    /// Respond 500 to the reminder list endpoint
    pub fail_reminder_list: bool,
    /// Respond 500 to the Nth PUT (1-based), counted across both collections
    pub fail_put_at: Option<usize>,
    /// Every PUT received, in order, including failed ones
    pub puts: Vec<RecordedPut>,
    /// Every GET received: (path, token header)
    pub gets: Vec<(String, Option<String>)>,
}

/// Handle to a running mock server.
pub struct MockServer {
    addr: SocketAddr,
    pub state: Arc<Mutex<MockState>>,
    shutdown: oneshot::Sender<()>,
    task: tokio::task::JoinHandle<()>,
}

impl MockServer {
    pub async fn start(state: MockState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("local addr");
        let state = Arc::new(Mutex::new(state));
        let (shutdown, mut shutdown_rx) = oneshot::channel::<()>();

        let accept_state = state.clone();
        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { break };
                        let conn_state = accept_state.clone();
                        tokio::spawn(async move {
                            handle_connection(stream, conn_state).await;
                        });
                    }
                }
            }
        });

        MockServer {
            addr,
            state,
            shutdown,
            task,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        let _ = self.task.await;
    }
}

/// Reads one HTTP/1.1 request, answers it, and closes the connection.
async fn handle_connection(mut stream: TcpStream, state: Arc<Mutex<MockState>>) {
    let Some(request) = read_request(&mut stream).await else {
        return;
    };

    let (code, reason, body) = route(&request, &state).await;
    let response = format!(
        "HTTP/1.1 {code} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

struct Request {
    method: String,
    path: String,
    token: Option<String>,
    body: Vec<u8>,
}

async fn read_request(stream: &mut TcpStream) -> Option<Request> {
    let mut buf = Vec::new();
    let header_end = loop {
        let mut chunk = [0u8; 1024];
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut token = None;
    let mut content_length = 0usize;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match name.to_ascii_lowercase().as_str() {
            "x-token" => token = Some(value.to_string()),
            "content-length" => content_length = value.parse().ok()?,
            _ => {}
        }
    }

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let mut chunk = [0u8; 1024];
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    Some(Request {
        method,
        path,
        token,
        body,
    })
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}

async fn route(
    request: &Request,
    state: &Arc<Mutex<MockState>>,
) -> (u16, &'static str, String) {
    let mut state = state.lock().await;
    match (request.method.as_str(), request.path.as_str()) {
        ("GET", "/notifier/api/addressbook") => {
            state
                .gets
                .push((request.path.clone(), request.token.clone()));
            (200, "OK", state.address_book.to_string())
        }
        ("GET", "/notifier/api/reminder") => {
            state
                .gets
                .push((request.path.clone(), request.token.clone()));
            if state.fail_reminder_list {
                (500, "Internal Server Error", json!("boom").to_string())
            } else {
                (200, "OK", state.reminder_list.to_string())
            }
        }
        ("PUT", path)
            if path.starts_with("/notifier/api/addressbook/")
                || path.starts_with("/notifier/api/reminder/") =>
        {
            let body = serde_json::from_slice(&request.body).expect("json PUT body");
            state.puts.push(RecordedPut {
                path: path.to_string(),
                token: request.token.clone(),
                body,
            });
            if state.fail_put_at == Some(state.puts.len()) {
                (500, "Internal Server Error", json!("boom").to_string())
            } else {
                (200, "OK", json!({}).to_string())
            }
        }
        _ => (404, "Not Found", json!("no such route").to_string()),
    }
}
