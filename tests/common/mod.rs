#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use llm_service::llm;
use llm_service::relay::client::{LlmClient, Timeouts};
use llm_service::relay::{self, AppState};

/// Serves the router on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn spawn_llm_service() -> String {
    spawn(llm::router()).await
}

pub async fn spawn_test_service(llm_service_url: &str) -> String {
    spawn_test_service_with(llm_service_url, Timeouts::default()).await
}

pub async fn spawn_test_service_with(llm_service_url: &str, timeouts: Timeouts) -> String {
    let client = LlmClient::new(llm_service_url, timeouts).unwrap();
    let state = AppState {
        client,
        llm_service_url: llm_service_url.to_string(),
    };
    spawn(relay::router(state)).await
}

/// A URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn short_timeouts() -> Timeouts {
    Timeouts {
        metadata: Duration::from_millis(500),
        process: Duration::from_millis(500),
    }
}
