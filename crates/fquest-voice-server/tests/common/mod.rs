//! In-process agent endpoint for webhook tests.
//!
//! Serves canned SSE bodies over raw TCP, one per accepted connection in
//! order, and records every run document it received.

use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub struct MockAgent {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockAgent {
    pub async fn start(responses: Vec<(u16, String)>) -> MockAgent {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));

        let seen = requests.clone();
        tokio::spawn(async move {
            let mut served = 0usize;
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let (status, body) = responses
                    .get(served.min(responses.len().saturating_sub(1)))
                    .cloned()
                    .unwrap_or((200, String::new()));
                served += 1;

                if let Some(doc) = read_request_body(&mut socket).await {
                    seen.lock().unwrap().push(doc);
                }

                let reason = if status == 200 { "OK" } else { "Error" };
                let head = format!(
                    "HTTP/1.1 {status} {reason}\r\ncontent-type: text/event-stream\r\nconnection: close\r\ncontent-length: {}\r\n\r\n",
                    body.len()
                );
                let _ = socket.write_all(head.as_bytes()).await;
                for chunk in body.as_bytes().chunks(23) {
                    if socket.write_all(chunk).await.is_err() {
                        break;
                    }
                    let _ = socket.flush().await;
                }
                let _ = socket.shutdown().await;
            }
        });

        MockAgent { url, requests }
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_request_body(socket: &mut tokio::net::TcpStream) -> Option<Value> {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let n = socket.read(&mut buf).await.ok()?;
        if n == 0 {
            return None;
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let headers = String::from_utf8_lossy(&raw[..header_end]).to_lowercase();
    let content_length: usize = headers
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())?;

    let body_start = header_end + 4;
    while raw.len() < body_start + content_length {
        let n = socket.read(&mut buf).await.ok()?;
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
    }

    serde_json::from_slice(&raw[body_start..body_start + content_length]).ok()
}

pub fn sse_body(events: &[Value]) -> String {
    let mut body = String::new();
    for event in events {
        body.push_str(&format!("data: {event}\n\n"));
    }
    body.push_str("data: [DONE]\n\n");
    body
}
