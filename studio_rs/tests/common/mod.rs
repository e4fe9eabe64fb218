//! In-process stand-in for the contact backend.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct Backend {
    received: Arc<Mutex<Vec<Received>>>,
    status: StatusCode,
    delay: Option<Duration>,
}

async fn contact(State(backend): State<Backend>, headers: HeaderMap, body: String) -> StatusCode {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    backend
        .received
        .lock()
        .unwrap()
        .push(Received { content_type, body });
    if let Some(delay) = backend.delay {
        tokio::time::sleep(delay).await;
    }
    backend.status
}

fn router(status: StatusCode, delay: Option<Duration>) -> (Router, Arc<Mutex<Vec<Received>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let backend = Backend {
        received: received.clone(),
        status,
        delay,
    };
    let app = Router::new()
        .route("/api/contact", post(contact))
        .with_state(backend);
    (app, received)
}

/// Handle to a running mock backend.
pub struct MockBackend {
    pub base_url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl MockBackend {
    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

/// Serve on the caller's tokio runtime.
pub async fn spawn(status: StatusCode, delay: Option<Duration>) -> MockBackend {
    let (app, received) = router(status, delay);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    MockBackend {
        base_url: format!("http://{addr}"),
        received,
    }
}

/// Serve from a dedicated thread, for tests that block on a child process.
pub fn spawn_detached(status: StatusCode) -> MockBackend {
    let (app, received) = router(status, None);
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    std_listener.set_nonblocking(true).unwrap();
    let addr = std_listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    MockBackend {
        base_url: format!("http://{addr}"),
        received,
    }
}

/// A local address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
