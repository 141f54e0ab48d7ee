use std::time::Instant;

use tracing::{error, info};

use crate::api::relay::TestResponse;
use crate::api::{ProcessingRequest, Status};
use crate::clock::{elapsed_ms, iso_now, time_id};
use crate::error::ServiceResult;
use crate::relay::client::LlmClient;

/// Forwards the request to the LLM service and wraps its answer.
///
/// The duration covers the whole relay call, not only the upstream round trip.
pub async fn run_test(client: &LlmClient, request: ProcessingRequest) -> ServiceResult<TestResponse> {
    let start = Instant::now();
    let test_id = time_id("test")?;
    info!(%test_id, "Starting test");

    let llm_response = match client.process(&request).await {
        Ok(llm_response) => llm_response,
        Err(err) => {
            let err = err.into_service_error();
            if !err.is_classified() {
                error!(%test_id, "Test failed: {}", err.detail());
            }
            return Err(err);
        }
    };

    let test_duration_ms = elapsed_ms(start);
    info!(
        %test_id,
        "Test completed successfully in {:.2}ms", test_duration_ms
    );

    Ok(TestResponse {
        test_id,
        llm_request: request,
        llm_response,
        status: Status::Success,
        timestamp: iso_now(),
        test_duration_ms,
    })
}
