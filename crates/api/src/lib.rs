//! HTTP API server for the item catalog.
//!
//! Serves a liveness check, the item listing and a category filter over a
//! static JSON document, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use catalog::{FileItemSource, ItemSource};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::items::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ItemSource + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/items", get(routes::items::list::<S>))
        .route("/items/filter", post(routes::items::filter::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state reading items from the configured file.
pub fn create_default_state(config: &Config) -> Arc<AppState<FileItemSource>> {
    Arc::new(AppState {
        items: FileItemSource::new(&config.data_file),
    })
}
