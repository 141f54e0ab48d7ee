use std::time::Instant;

use tracing::{error, info};

use crate::api::{ProcessingMetadata, ProcessingRequest, ProcessingResponse, Status};
use crate::clock::{elapsed_ms, iso_now, time_id};
use crate::error::{ServiceError, ServiceResult};
use crate::llm::composer::compose;
use crate::llm::validator::validate;

/// Validates the request and renders the simulated response.
///
/// Validation failures are returned untouched as `ServiceError::Validation`.
/// Any other failure is logged with the request id and surfaced as an
/// internal error.
pub fn process(request: &ProcessingRequest) -> ServiceResult<ProcessingResponse> {
    let start = Instant::now();
    let request_id = time_id("req")?;
    info!(%request_id, "Processing request");

    run(&request_id, start, request).map_err(|err| {
        if !err.is_classified() {
            error!(%request_id, "Failed to process request: {}", err.detail());
        }
        err
    })
}

fn run(
    request_id: &str,
    start: Instant,
    request: &ProcessingRequest,
) -> ServiceResult<ProcessingResponse> {
    validate(request).map_err(ServiceError::Validation)?;

    let response_text = compose(request);
    let metadata = ProcessingMetadata {
        platform_used: request.platform.clone(),
        model_used: request.model.clone(),
        artifacts_count: request.artifacts.len(),
        prompt_length: request.prompt.chars().count(),
        response_length: response_text.chars().count(),
    };

    let processing_time_ms = elapsed_ms(start);
    info!(
        %request_id,
        "Processed request successfully in {:.2}ms", processing_time_ms
    );

    Ok(ProcessingResponse {
        request_id: request_id.to_string(),
        status: Status::Success,
        response_text,
        metadata,
        timestamp: iso_now(),
        processing_time_ms,
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::llm::validator::ValidationError;

    fn summarize() -> ProcessingRequest {
        ProcessingRequest {
            artifacts: vec![],
            platform: "huggingface".into(),
            model: "llama-7b".into(),
            prompt: "Summarize".into(),
        }
    }

    #[test]
    fn builds_a_successful_response() {
        let response = process(&summarize()).unwrap();

        assert!(response.request_id.starts_with("req_"));
        assert_eq!(response.status, Status::Success);
        assert!(response.processing_time_ms >= 0.0);
        assert_eq!(
            response.metadata,
            ProcessingMetadata {
                platform_used: "huggingface".into(),
                model_used: "llama-7b".into(),
                artifacts_count: 0,
                prompt_length: 9,
                response_length: response.response_text.chars().count(),
            }
        );
    }

    #[test]
    fn keeps_the_caller_casing_in_metadata() {
        let mut request = summarize();
        request.platform = "OpenAI".into();
        request.model = "GPT-4".into();
        let response = process(&request).unwrap();
        assert_eq!(response.metadata.platform_used, "OpenAI");
        assert_eq!(response.metadata.model_used, "GPT-4");
    }

    #[test]
    fn validation_errors_are_not_rewrapped() {
        let mut request = summarize();
        request.platform = "aws".into();

        let err = process(&request).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn repeated_requests_only_differ_in_time_fields() {
        let first = process(&summarize()).unwrap();
        let second = process(&summarize()).unwrap();
        assert_eq!(first.response_text, second.response_text);
        assert_eq!(first.metadata, second.metadata);
    }
}
