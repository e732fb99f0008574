//! Order CRUD and status endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::OrderId;
use domain::{Order, OrderIntake, OrderService, OrderStore};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore> {
    pub orders: OrderService<S>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderCreatedResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(flatten)]
    pub order: Order,
}

#[derive(Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub total: usize,
}

// -- Handlers --

/// POST /api/orders: validate, price and store a new order.
///
/// Accepts the canonical intake shape as well as the older portal shape
/// (`hours`, `smartMix`, `delivery.address`).
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderCreatedResponse>), ApiError> {
    let Json(body) = payload?;
    let intake = OrderIntake::from_json(&body);
    let order = state.orders.create(intake).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse {
            success: true,
            message: "Order received at NBL Distribution Hub",
            order,
        }),
    ))
}

/// GET /api/orders: all orders, most recent first.
#[tracing::instrument(skip(state))]
pub async fn list<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<OrderListResponse> {
    let orders = state.orders.list().await;
    let total = orders.len();
    Json(OrderListResponse { orders, total })
}

/// GET /api/orders/{id}: load a single order.
#[tracing::instrument(skip(state))]
pub async fn get<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let order_id = parse_order_id(&id)?;
    Ok(Json(state.orders.get(order_id).await?))
}

/// PATCH /api/orders/{id}/status: write a new status.
#[tracing::instrument(skip(state, payload))]
pub async fn update_status<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let order_id = parse_order_id(&id)?;
    let Json(req) = payload?;
    Ok(Json(state.orders.update_status(order_id, &req.status).await?))
}

/// DELETE /api/orders/{id}: remove an order and return it.
#[tracing::instrument(skip(state))]
pub async fn delete<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let order_id = parse_order_id(&id)?;
    Ok(Json(state.orders.delete(order_id).await?))
}

fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid order id {id:?}: {e}")))
}
