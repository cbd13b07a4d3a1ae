//! forecast-proxy — HTTP front end for the CWA 36-hour county forecast.
//!
//! The crate exposes the router and its pieces as public modules so that
//! integration tests can drive it in-process with any
//! [`ForecastSource`](forecast_upstream::ForecastSource).
//!
//! # Request flow
//!
//! ```text
//! GET /api/weather/{city}
//!    │
//!    ├─► locality::canonical_location_name
//!    ├─► ForecastSource::fetch          (the only await point)
//!    ├─► normalizer::normalize
//!    └─► {success: true, data}  or  ApiError
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use error::ApiError;
pub use server::{router, AppState};
