//! Product catalog endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use domain::{OrderStore, Product};

use super::orders::AppState;

/// GET /api/products: the full brand-to-product mapping.
pub async fn list<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<BTreeMap<String, Product>> {
    Json(state.orders.catalog().as_map().clone())
}
