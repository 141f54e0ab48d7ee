//! A mock LLM processing service and a companion test service that relays
//! requests to it.

use tracing::{error, info};

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod extractors;
pub mod llm;
pub mod relay;
pub mod telemetry;

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
