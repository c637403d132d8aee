// Local fixture server for the scenario tests
//
// Serves the bundled todo application on an ephemeral port so the suite
// runs deterministically without network access. Setting TODO_APP_URL
// points the scenarios at a live instance instead; the server still
// starts, it just goes unused.

// Note: Functions appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

use axum::{Router, response::Html, routing::get};
use std::net::SocketAddr;
use tokio::task::JoinHandle;

use todomvc_e2e::fixture::TODO_APP_HTML;

/// Fixture server handle
pub struct TodoServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TodoServer {
    /// Start the fixture server on a random available port
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fixture server");

        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router())
                .await
                .expect("Fixture server failed");
        });

        TodoServer { addr, handle }
    }

    /// Get the base URL of the fixture server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shutdown the fixture server
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

/// Router serving the todo application document at the root path
pub fn router() -> Router {
    Router::new().route("/", get(todo_app))
}

async fn todo_app() -> Html<&'static str> {
    Html(TODO_APP_HTML)
}
