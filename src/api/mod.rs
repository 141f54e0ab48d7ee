//! JSON bodies exchanged by the LLM service, the test service and their clients.

use serde::{Deserialize, Serialize};

pub mod relay;

/// Body of `POST /process` on the LLM service and `POST /test` on the test service.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessingRequest {
    /// Base artifacts such as documents, models or source files
    pub artifacts: Vec<String>,

    /// Platform the request targets, e.g. huggingface or ollama
    pub platform: String,

    /// Model name, e.g. llama-7b
    pub model: String,

    /// Natural language prompt
    pub prompt: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessingMetadata {
    pub platform_used: String,
    pub model_used: String,
    pub artifacts_count: usize,
    /// Prompt length in characters
    pub prompt_length: usize,
    /// Response length in characters
    pub response_length: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProcessingResponse {
    pub request_id: String,
    pub status: Status,
    pub response_text: String,
    pub metadata: ProcessingMetadata,
    pub timestamp: String,
    pub processing_time_ms: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub version: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ModelsResponse {
    pub supported_models: Vec<String>,
    pub count: usize,
}

impl ModelsResponse {
    pub fn new(supported_models: Vec<String>) -> Self {
        let count = supported_models.len();
        Self {
            supported_models,
            count,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PlatformsResponse {
    pub supported_platforms: Vec<String>,
    pub count: usize,
}

impl PlatformsResponse {
    pub fn new(supported_platforms: Vec<String>) -> Self {
        let count = supported_platforms.len();
        Self {
            supported_platforms,
            count,
        }
    }
}
