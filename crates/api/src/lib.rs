//! HTTP API server with observability for the crate ordering service.
//!
//! Provides REST endpoints for the crate calculator, order management,
//! the product catalog and dashboard statistics, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch, post};
use domain::{InMemoryOrderStore, OrderService, OrderStore};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: OrderStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<S>))
        .route(
            "/api/orders",
            post(routes::orders::create::<S>).get(routes::orders::list::<S>),
        )
        .route(
            "/api/orders/{id}",
            get(routes::orders::get::<S>).delete(routes::orders::delete::<S>),
        )
        .route(
            "/api/orders/{id}/status",
            patch(routes::orders::update_status::<S>),
        )
        .route("/api/products", get(routes::catalog::list::<S>))
        .route("/api/stats", get(routes::stats::get::<S>))
        .route("/api/estimate", post(routes::planning::estimate::<S>))
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

/// Creates the default application state: an empty in-memory order book
/// priced against the standard catalog.
pub fn create_default_state() -> Arc<AppState<InMemoryOrderStore>> {
    Arc::new(AppState {
        orders: OrderService::new(InMemoryOrderStore::new()),
    })
}
