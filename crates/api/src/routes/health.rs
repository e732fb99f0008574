//! Liveness endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use domain::OrderStore;
use serde::Serialize;

use super::orders::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Orders currently held in the book.
    pub orders: usize,
}

/// GET /health: liveness plus the size of the order book.
pub async fn check<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        orders: state.orders.len().await,
    })
}
