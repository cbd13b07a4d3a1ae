//! Core types for forecast-core.
//!
//! Two families live here: the raw upstream shapes ([`ForecastResponse`] down
//! to [`TimeSlot`]), which mirror the CWA JSON field names, and the flat
//! [`NormalizedForecast`] served to clients. Both are built per request and
//! dropped once the response is written.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Upstream payload
// ---------------------------------------------------------------------------

/// Top-level envelope returned by the forecast dataset endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// The upstream reports this as the string `"true"` rather than a bool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    pub records: ForecastRecords,
}

/// `records` object of the upstream envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecords {
    /// Human-readable description of the dataset, served back as `updateTime`.
    pub dataset_description: String,
    /// Matching locations. Empty when the requested name is unknown upstream.
    #[serde(default)]
    pub location: Vec<RawLocationForecast>,
}

/// One administrative area and its weather elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocationForecast {
    pub location_name: String,
    #[serde(default)]
    pub weather_element: Vec<WeatherElement>,
}

/// A single predicted attribute (e.g. `PoP`) across every forecast period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherElement {
    pub element_name: String,
    #[serde(default)]
    pub time: Vec<TimeSlot>,
}

/// One forecast period of one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
    pub parameter: Parameter,
}

/// Value carried by a [`TimeSlot`]. Only `parameter_name` is used; the code
/// and unit are kept so that fixtures round-trip the upstream shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(default)]
    pub parameter_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_unit: Option<String>,
}

// ---------------------------------------------------------------------------
// Normalized output
// ---------------------------------------------------------------------------

/// Flattened forecast for one city, as served by `/api/weather/{city}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedForecast {
    pub city: String,
    pub update_time: String,
    pub forecasts: Vec<ForecastPeriod>,
}

/// One time window with every recognised element folded in.
///
/// Fields for element types absent from the upstream payload stay as empty
/// strings; they are never omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub start_time: String,
    pub end_time: String,
    pub weather: String,
    pub rain: String,
    pub min_temp: String,
    pub max_temp: String,
    pub comfort: String,
    pub wind_speed: String,
}

impl ForecastPeriod {
    /// A period with only its time window filled in.
    pub fn starting(slot: &TimeSlot) -> Self {
        Self {
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            ..Self::default()
        }
    }
}
