//! The LLM processing service: validates requests and answers with a
//! simulated model response.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::api::{
    HealthResponse, HealthStatus, ModelsResponse, PlatformsResponse, ProcessingRequest,
    ProcessingResponse,
};
use crate::clock::iso_now;
use crate::error::ServiceResult;
use crate::extractors::JsonBody;
use crate::llm::validator::{SUPPORTED_MODELS, SUPPORTED_PLATFORMS};

pub mod composer;
pub mod processor;
pub mod validator;

pub const SERVICE_NAME: &str = "LLM Microservice";
pub const SERVICE_DESCRIPTION: &str = "Microservice for offline local LLM processing";

pub fn router() -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/models", get(handle_models))
        .route("/platforms", get(handle_platforms))
        .route("/process", post(handle_process))
        .layer(TraceLayer::new_for_http())
}

async fn handle_root() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": SERVICE_DESCRIPTION,
        "endpoints": {
            "health": "/health",
            "process": "/process",
            "models": "/models",
            "platforms": "/platforms"
        }
    }))
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: iso_now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn handle_models() -> Json<ModelsResponse> {
    Json(ModelsResponse::new(
        SUPPORTED_MODELS.iter().map(|m| m.to_string()).collect(),
    ))
}

async fn handle_platforms() -> Json<PlatformsResponse> {
    Json(PlatformsResponse::new(
        SUPPORTED_PLATFORMS.iter().map(|p| p.to_string()).collect(),
    ))
}

#[axum_macros::debug_handler]
async fn handle_process(
    JsonBody(req): JsonBody<ProcessingRequest>,
) -> ServiceResult<(StatusCode, Json<ProcessingResponse>)> {
    Ok((StatusCode::OK, Json(processor::process(&req)?)))
}
