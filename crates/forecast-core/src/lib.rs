//! forecast-core — data model and reshaping for forecast-proxy.
//!
//! No I/O happens here. The upstream client hands in a parsed
//! [`ForecastResponse`]; this crate turns one location of it into a
//! [`NormalizedForecast`].
//!
//! # Pipeline
//!
//! ```text
//! city ──► locality ──► (upstream fetch) ──► normalizer ──► NormalizedForecast
//! ```

pub mod config;
pub mod error;
pub mod locality;
pub mod normalizer;
pub mod types;

pub use error::ForecastError;
pub use normalizer::{normalize, ElementKind};
pub use types::{
    ForecastPeriod, ForecastRecords, ForecastResponse, NormalizedForecast, Parameter,
    RawLocationForecast, TimeSlot, WeatherElement,
};
