//! Route handlers.
//!
//! Only [`weather`] does real work; the rest are static or near-static.

use crate::error::ApiError;
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use forecast_core::locality::canonical_location_name;
use forecast_core::{normalize, NormalizedForecast};
use forecast_upstream::ForecastSource;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// City paths listed in the index document.
pub const EXAMPLE_CITIES: &[&str] = &[
    "臺北市", "新北市", "桃園市", "臺中市", "臺南市", "高雄市", "宜蘭縣", "花蓮縣",
];

/// Body of a successful `/api/weather/{city}` response.
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub success: bool,
    pub data: NormalizedForecast,
}

/// `GET /` — usage document.
pub async fn index() -> Json<Value> {
    let examples: Vec<String> = EXAMPLE_CITIES
        .iter()
        .map(|city| format!("/api/weather/{city}"))
        .collect();

    Json(json!({
        "message": "36-hour county weather forecast proxy",
        "endpoints": {
            "weather": "/api/weather/{city}",
            "health": "/api/health",
        },
        "notes": "City names may use either 台 or 臺.",
        "examples": examples,
    }))
}

/// `GET /api/health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// `GET /api/weather/{city}` — fetch, reshape and return one city's forecast.
pub async fn weather<S: ForecastSource>(
    State(state): State<Arc<AppState<S>>>,
    Path(city): Path<String>,
) -> Result<Json<WeatherResponse>, ApiError> {
    if !state.config.has_api_key() {
        return Err(ApiError::Misconfigured);
    }

    let location_name = canonical_location_name(&city);
    let response = state.source.fetch(&location_name).await?;
    let records = response.records;

    let Some(location) = records.location.first() else {
        return Err(ApiError::NotFound { city });
    };

    let data = normalize(location, &records.dataset_description)?;
    tracing::info!(city = %data.city, periods = data.forecasts.len(), "served forecast");

    Ok(Json(WeatherResponse {
        success: true,
        data,
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "path not found" })),
    )
}
