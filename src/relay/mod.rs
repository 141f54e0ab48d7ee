//! The test service: relays requests to the LLM service and serves a small
//! web form for trying it out.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::api::relay::{
    SourcedModels, SourcedPlatforms, TestHealthResponse, TestResponse, LLM_SERVICE_SOURCE,
};
use crate::api::{HealthStatus, ModelsResponse, PlatformsResponse, ProcessingRequest};
use crate::clock::iso_now;
use crate::error::ServiceResult;
use crate::extractors::JsonBody;
use crate::relay::client::LlmClient;

pub mod client;
pub mod service;
pub mod ui;

pub const SERVICE_NAME: &str = "LLM Test Service";
pub const SERVICE_DESCRIPTION: &str = "Microservice for testing the LLM service";

#[derive(Clone, Debug)]
pub struct AppState {
    pub client: LlmClient,
    /// The LLM service URL as configured, reported by `GET /`
    pub llm_service_url: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/models", get(handle_models))
        .route("/platforms", get(handle_platforms))
        .route("/test", post(handle_test))
        .route("/ui", get(handle_ui))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": SERVICE_DESCRIPTION,
        "llm_service_url": state.llm_service_url,
        "endpoints": {
            "health": "/health",
            "test": "/test",
            "models": "/models",
            "platforms": "/platforms",
            "ui": "/ui"
        }
    }))
}

async fn handle_health(State(state): State<AppState>) -> Json<TestHealthResponse> {
    let (status, llm_service_status) = if state.client.check_health().await {
        (HealthStatus::Healthy, HealthStatus::Healthy)
    } else {
        (HealthStatus::Degraded, HealthStatus::Unhealthy)
    };

    Json(TestHealthResponse {
        status,
        timestamp: iso_now(),
        llm_service_status,
    })
}

async fn handle_models(State(state): State<AppState>) -> Json<SourcedModels> {
    Json(SourcedModels {
        models: ModelsResponse::new(state.client.supported_models().await),
        source: LLM_SERVICE_SOURCE.to_string(),
    })
}

async fn handle_platforms(State(state): State<AppState>) -> Json<SourcedPlatforms> {
    Json(SourcedPlatforms {
        platforms: PlatformsResponse::new(state.client.supported_platforms().await),
        source: LLM_SERVICE_SOURCE.to_string(),
    })
}

#[axum_macros::debug_handler]
async fn handle_test(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ProcessingRequest>,
) -> ServiceResult<(StatusCode, Json<TestResponse>)> {
    Ok((
        StatusCode::OK,
        Json(service::run_test(&state.client, req).await?),
    ))
}

async fn handle_ui(State(state): State<AppState>) -> Html<String> {
    let (platforms, models) = tokio::join!(
        state.client.supported_platforms(),
        state.client.supported_models()
    );
    Html(ui::render(&platforms, &models))
}
