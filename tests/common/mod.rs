#![allow(dead_code)]

use reqwest::Url;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration as StdDuration;
use tiny_http::{Header, Response, Server};

#[derive(Debug)]
pub struct MockHttpResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl MockHttpResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub params: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).expect("json request body")
    }
}

/// Serves `responses` in order, one per incoming request, and reports each
/// request on the returned channel.
pub fn spawn_sequence_server(
    responses: Vec<MockHttpResponse>,
) -> (String, Receiver<CapturedRequest>, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").expect("mock server");
    let base_url = format!("http://{}", server.server_addr());
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        for response_spec in responses {
            let mut request = match server.recv_timeout(StdDuration::from_secs(8)) {
                Ok(Some(request)) => request,
                Ok(None) => break,
                Err(_) => break,
            };

            let parsed =
                Url::parse(&format!("http://localhost{}", request.url())).expect("request url");
            let params = parsed
                .query_pairs()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect::<HashMap<String, String>>();
            let headers = request
                .headers()
                .iter()
                .map(|header| {
                    (
                        header.field.as_str().as_str().to_ascii_lowercase(),
                        header.value.as_str().to_string(),
                    )
                })
                .collect::<HashMap<String, String>>();
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);
            let captured = CapturedRequest {
                method: request.method().to_string(),
                path: parsed.path().to_string(),
                params,
                headers,
                body,
            };
            let _ = tx.send(captured);

            let mut response = match response_spec.body {
                Some(body) => {
                    let mut response = Response::from_string(body);
                    response.add_header(
                        Header::from_bytes("Content-Type", "application/json")
                            .expect("content-type header"),
                    );
                    response
                }
                None => Response::from_string(String::new()),
            };
            response = response.with_status_code(response_spec.status);
            let _ = request.respond(response);
        }
    });

    (base_url, rx, handle)
}

pub fn next_request(rx: &Receiver<CapturedRequest>) -> CapturedRequest {
    rx.recv_timeout(StdDuration::from_secs(3))
        .expect("captured request")
}

pub fn join_with_timeout(handle: thread::JoinHandle<()>, timeout: StdDuration) {
    let start = std::time::Instant::now();
    while !handle.is_finished() {
        assert!(
            start.elapsed() < timeout,
            "mock server join timed out after {:?}",
            timeout
        );
        thread::sleep(StdDuration::from_millis(10));
    }
    handle.join().expect("mock server thread panicked");
}
