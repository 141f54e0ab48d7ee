use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::llm::validator::ValidationError;

// Adapted from https://github.com/tokio-rs/axum/blob/main/examples/anyhow-error-response/src/main.rs
#[derive(Debug)]
pub enum ServiceError {
    /// The request failed the platform, model or prompt checks.
    Validation(ValidationError),
    /// The request body could not be extracted.
    BadRequest { status: StatusCode, message: String },
    /// The LLM service answered with a non-200 status.
    UpstreamRejected { status: StatusCode, body: String },
    /// The LLM service could not be reached or timed out.
    UpstreamUnavailable(String),
    Internal(anyhow::Error),
}

/// Body of every error response, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct HttpErrorResponse {
    pub detail: String,
}

impl From<String> for HttpErrorResponse {
    fn from(detail: String) -> Self {
        HttpErrorResponse { detail }
    }
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::BadRequest { status, .. } => *status,
            ServiceError::UpstreamRejected { status, .. } => *status,
            ServiceError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ServiceError::Validation(err) => err.to_string(),
            ServiceError::BadRequest { message, .. } => message.clone(),
            ServiceError::UpstreamRejected { body, .. } => format!("LLM service error: {body}"),
            ServiceError::UpstreamUnavailable(cause) => {
                format!("LLM service unavailable: {cause}")
            }
            ServiceError::Internal(err) => format!("Internal server error: {err}"),
        }
    }

    /// Validation and upstream classified errors keep their meaning across an
    /// endpoint boundary, everything else gets reported as internal.
    pub fn is_classified(&self) -> bool {
        !matches!(self, ServiceError::Internal(_))
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let mut res = Json(HttpErrorResponse::from(self.detail())).into_response();
        *res.status_mut() = self.status();
        res
    }
}

impl<E> From<E> for ServiceError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ServiceError::Internal(err.into())
    }
}

pub type ServiceResult<T, E = ServiceError> = Result<T, E>;

#[macro_export]
macro_rules! exit_err {
    ($code:expr, $fmt:expr $(, $arg:expr)*) => {
        {
            tracing::error!($fmt $(, $arg)*);
            std::process::exit($code);
        }
    };
}
