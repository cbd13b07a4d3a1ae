//! Router construction.

use crate::{handlers, middleware};
use axum::routing::get;
use axum::Router;
use forecast_core::config::Config;
use forecast_upstream::ForecastSource;
use std::sync::Arc;

/// Immutable per-process state shared by every request.
pub struct AppState<S> {
    pub config: Config,
    pub source: S,
}

impl<S: ForecastSource> AppState<S> {
    pub fn new(config: Config, source: S) -> Self {
        Self { config, source }
    }
}

/// Build the full application router around `state`.
///
/// Unknown paths and known paths hit with the wrong method both get the
/// JSON 404 from [`handlers::not_found`].
pub fn router<S: ForecastSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/weather/{city}", get(handlers::weather::<S>))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(middleware::catch_panic))
        .layer(axum::middleware::from_fn(middleware::log_request))
        .with_state(Arc::new(state))
}
