use serde::{Deserialize, Serialize};

use crate::api::{HealthStatus, ModelsResponse, PlatformsResponse, ProcessingRequest, Status};

/// Value of the `source` field on discovery responses mirrored from the LLM service.
pub const LLM_SERVICE_SOURCE: &str = "llm_service";

/// Metadata as seen from the test service. Every field is optional so a
/// partial payload still decodes, while a wrongly typed one does not.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_length: Option<usize>,
}

/// A `ProcessingResponse` decoded by the test service.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LlmResponse {
    pub request_id: String,
    pub status: Status,
    pub response_text: String,
    #[serde(default)]
    pub metadata: UpstreamMetadata,
    pub timestamp: String,
    pub processing_time_ms: f64,
}

/// Body returned by `POST /test`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TestResponse {
    pub test_id: String,
    pub llm_request: ProcessingRequest,
    pub llm_response: LlmResponse,
    pub status: Status,
    pub timestamp: String,
    pub test_duration_ms: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TestHealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub llm_service_status: HealthStatus,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SourcedModels {
    #[serde(flatten)]
    pub models: ModelsResponse,
    pub source: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SourcedPlatforms {
    #[serde(flatten)]
    pub platforms: PlatformsResponse,
    pub source: String,
}
