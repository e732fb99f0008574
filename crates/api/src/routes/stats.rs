//! Order statistics endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use domain::{OrderStatistics, OrderStore};

use super::orders::AppState;

/// GET /api/stats: summary over all stored orders.
#[tracing::instrument(skip(state))]
pub async fn get<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<OrderStatistics> {
    Json(state.orders.statistics().await)
}
