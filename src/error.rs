//! HTTP-facing errors.
//!
//! Every failure a handler can return is an [`ApiError`]; its
//! [`IntoResponse`] impl is the only place that picks a status code and body
//! shape for it, and the only place it is logged.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use forecast_core::ForecastError;
use forecast_upstream::UpstreamError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The upstream knows no location by the requested name. Carries the name
    /// as the client sent it, before canonicalisation.
    #[error("no data for '{city}'")]
    NotFound { city: String },

    /// The upstream rejected the request; status and body are relayed as-is.
    #[error("upstream responded with HTTP {status}")]
    Upstream {
        status: u16,
        content_type: Option<String>,
        body: String,
    },

    #[error("server misconfigured: CWA_API_KEY is not set")]
    Misconfigured,

    /// Transport, decode or reshaping failure.
    #[error("{0}")]
    Internal(String),
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status {
                status,
                content_type,
                body,
            } => ApiError::Upstream {
                status,
                content_type,
                body,
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { ref city } => {
                tracing::warn!(city = %city, "no matching location upstream");
                let body = json!({ "success": false, "message": self.to_string() });
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::Upstream {
                status,
                content_type,
                body,
            } => {
                tracing::warn!(status, "relaying upstream error");
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let mut response = (status, body).into_response();
                if let Some(value) = content_type.and_then(|ct| HeaderValue::from_str(&ct).ok()) {
                    response.headers_mut().insert(CONTENT_TYPE, value);
                }
                response
            }
            ApiError::Misconfigured | ApiError::Internal(_) => {
                let message = self.to_string();
                tracing::error!(error = %message, "weather request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message })))
                    .into_response()
            }
        }
    }
}

/// Response for failures that escaped the handlers entirely (panics).
pub fn unhandled(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal server error", "message": message })),
    )
        .into_response()
}
