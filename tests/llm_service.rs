use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};

use llm_service::api::{ProcessingResponse, Status};

mod common;

fn summarize() -> Value {
    json!({
        "artifacts": [],
        "platform": "huggingface",
        "model": "llama-7b",
        "prompt": "Summarize"
    })
}

async fn post_process(base_url: &str, body: &Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base_url}/process"))
        .json(body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn processes_a_valid_request() {
    let base_url = common::spawn_llm_service().await;

    let res = post_process(&base_url, &summarize()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: ProcessingResponse = res.json().await.unwrap();
    assert_eq!(body.status, Status::Success);
    assert!(body.request_id.starts_with("req_"));
    assert_eq!(body.metadata.artifacts_count, 0);
    assert_eq!(body.metadata.platform_used, "huggingface");
    assert_eq!(body.metadata.model_used, "llama-7b");
    assert_eq!(body.metadata.prompt_length, 9);
    assert_eq!(
        body.metadata.response_length,
        body.response_text.chars().count()
    );
    assert!(body.response_text.contains("No artifacts supplied"));
    assert!(body.processing_time_ms >= 0.0);
}

#[tokio::test]
async fn rejects_unsupported_platform() {
    let base_url = common::spawn_llm_service().await;
    let mut request = summarize();
    request["platform"] = json!("aws");

    let res = post_process(&base_url, &request).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("aws"));
    for platform in ["huggingface", "openai", "local", "ollama"] {
        assert!(detail.contains(platform), "{detail} should list {platform}");
    }
}

#[tokio::test]
async fn rejects_unsupported_model_and_blank_prompt() {
    let base_url = common::spawn_llm_service().await;

    let mut request = summarize();
    request["model"] = json!("bert-base");
    let res = post_process(&base_url, &request).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("bert-base"));

    let mut request = summarize();
    request["prompt"] = json!("   \n");
    let res = post_process(&base_url, &request).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["detail"], "Prompt must not be empty");
}

#[tokio::test]
async fn malformed_bodies_get_a_detail() {
    let base_url = common::spawn_llm_service().await;

    let res = post_process(&base_url, &json!({"platform": "local"})).await;
    assert!(res.status().is_client_error());
    let body: Value = res.json().await.unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn repeated_requests_get_distinct_ids_and_identical_text() {
    let base_url = common::spawn_llm_service().await;

    let first: ProcessingResponse = post_process(&base_url, &summarize())
        .await
        .json()
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second: ProcessingResponse = post_process(&base_url, &summarize())
        .await
        .json()
        .await
        .unwrap();

    assert_ne!(first.request_id, second.request_id);
    assert_eq!(first.response_text, second.response_text);
    assert_eq!(first.metadata, second.metadata);
}

#[tokio::test]
async fn summarizes_only_the_first_three_artifacts() {
    let base_url = common::spawn_llm_service().await;
    let long = "x".repeat(300);
    let mut request = summarize();
    request["artifacts"] = json!([long, "b", "c", "d", "e"]);

    let body: ProcessingResponse = post_process(&base_url, &request)
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body.metadata.artifacts_count, 5);
    assert!(body.response_text.contains("Processing 5 artifact(s)"));
    assert!(body.response_text.contains("- ... and 2 more artifact(s)"));
    assert!(body
        .response_text
        .contains(&format!("- Artifact 1: {}...", "x".repeat(100))));
    assert!(!body.response_text.contains(&"x".repeat(101)));
}

#[tokio::test]
async fn discovery_endpoints() {
    let base_url = common::spawn_llm_service().await;
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
    assert!(health["timestamp"].is_string());

    let models: Value = client
        .get(format!("{base_url}/models"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        models,
        json!({
            "supported_models": ["llama", "deepseek", "gpt", "mistral", "phi"],
            "count": 5
        })
    );

    let platforms: Value = client
        .get(format!("{base_url}/platforms"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        platforms,
        json!({
            "supported_platforms": ["huggingface", "openai", "local", "ollama"],
            "count": 4
        })
    );

    let root: Value = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(root["service"], "LLM Microservice");
    assert_eq!(root["endpoints"]["process"], "/process");
}
