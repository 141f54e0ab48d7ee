use std::error::Error as StdError;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;
use url::Url;

use crate::api::relay::LlmResponse;
use crate::api::{ModelsResponse, PlatformsResponse, ProcessingRequest};
use crate::error::ServiceError;

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout and the like.
    #[error("{0}")]
    Unavailable(String),

    #[error("LLM service returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("Invalid response from LLM service: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Keeps the upstream classification: rejections mirror the upstream
    /// status and network failures become 503.
    pub fn into_service_error(self) -> ServiceError {
        match self {
            UpstreamError::Unavailable(cause) => ServiceError::UpstreamUnavailable(cause),
            UpstreamError::Rejected { status, body } => {
                ServiceError::UpstreamRejected { status, body }
            }
            err @ UpstreamError::InvalidResponse(_) => ServiceError::Internal(err.into()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    /// Applies to `/health`, `/models` and `/platforms`
    pub metadata: Duration,
    /// Applies to `/process`
    pub process: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            metadata: Duration::from_secs(5),
            process: Duration::from_secs(30),
        }
    }
}

/// Client for the LLM processing service.
#[derive(Debug, Clone)]
pub struct LlmClient {
    base_url: String,
    timeouts: Timeouts,
    client: Client,
}

impl LlmClient {
    pub fn new(base_url: &str, timeouts: Timeouts) -> Result<Self> {
        Url::parse(base_url).with_context(|| format!("Invalid LLM service URL {base_url}"))?;
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeouts,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// True only when `/health` answers 200.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn check_health(&self) -> bool {
        let res = self
            .client
            .get(self.url("/health"))
            .timeout(self.timeouts.metadata)
            .send()
            .await;

        match res {
            Ok(res) => res.status() == StatusCode::OK,
            Err(err) => {
                error!("Failed to check LLM service health: {}", describe(&err));
                false
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn supported_models(&self) -> Vec<String> {
        match self.fetch_catalog::<ModelsResponse>("/models").await {
            Ok(models) => models.map(|m| m.supported_models).unwrap_or_default(),
            Err(err) => {
                error!("Failed to fetch supported models: {}", describe(&err));
                vec![]
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn supported_platforms(&self) -> Vec<String> {
        match self.fetch_catalog::<PlatformsResponse>("/platforms").await {
            Ok(platforms) => platforms.map(|p| p.supported_platforms).unwrap_or_default(),
            Err(err) => {
                error!("Failed to fetch supported platforms: {}", describe(&err));
                vec![]
            }
        }
    }

    /// Returns `None` on any status other than 200.
    async fn fetch_catalog<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, reqwest::Error> {
        let res = self
            .client
            .get(self.url(path))
            .timeout(self.timeouts.metadata)
            .send()
            .await?;
        if res.status() != StatusCode::OK {
            return Ok(None);
        }
        Ok(Some(res.json::<T>().await?))
    }

    #[tracing::instrument(level = "debug", skip(self, request))]
    pub async fn process(&self, request: &ProcessingRequest) -> Result<LlmResponse, UpstreamError> {
        let unavailable = |err: reqwest::Error| {
            let cause = describe(&err);
            error!("Failed to communicate with LLM service: {}", cause);
            UpstreamError::Unavailable(cause)
        };

        let res = self
            .client
            .post(self.url("/process"))
            .json(request)
            .timeout(self.timeouts.process)
            .send()
            .await
            .map_err(unavailable)?;

        let status = res.status();
        let body = res.text().await.map_err(unavailable)?;
        if status != StatusCode::OK {
            return Err(UpstreamError::Rejected { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Flattens the error and its sources, reqwest keeps the useful part
/// (connection refused, timed out) in the source chain.
fn describe(err: &reqwest::Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }
    description
}
