//! Crate calculator endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use domain::{MixPlan, OrderStore, PlanRequest, SmartMixPlanner};

use super::orders::AppState;
use crate::error::ApiError;

/// POST /api/estimate: recommended crates, smart mix and quote for a party.
#[tracing::instrument(skip(state, payload))]
pub async fn estimate<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<MixPlan>, ApiError> {
    let Json(req) = payload?;
    let plan = SmartMixPlanner::new(state.orders.catalog()).plan(&req)?;
    Ok(Json(plan))
}
