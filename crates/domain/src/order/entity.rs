//! The order record.

use chrono::{DateTime, Duration, Utc};
use common::{OrderId, OrderNumber};
use serde::{Deserialize, Serialize};

use super::{BrandMix, Coordinates, Money, OrderStatus, ValidOrder};

/// Time between placing an order and its promised delivery.
pub fn delivery_lead_time() -> Duration {
    Duration::hours(2)
}

/// A placed order.
///
/// Built only from a validated intake; `status` and `updated_at` change only
/// through [`Order::transition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    order_id: OrderId,
    order_number: OrderNumber,
    guests: u32,
    event_duration_hours: u32,
    crates: u32,
    mix: BrandMix,
    total_cost: Money,
    delivery_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coordinates: Option<Coordinates>,
    status: OrderStatus,
    estimated_delivery_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// Places a new pending order.
    pub(crate) fn place(
        order_id: OrderId,
        order_number: OrderNumber,
        valid: ValidOrder,
        total_cost: Money,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id,
            order_number,
            guests: valid.guests,
            event_duration_hours: valid.event_duration_hours,
            crates: valid.crates,
            mix: valid.mix,
            total_cost,
            delivery_address: valid.delivery_address,
            coordinates: valid.coordinates,
            status: OrderStatus::Pending,
            estimated_delivery_at: now + delivery_lead_time(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Writes a new status and stamps `updated_at`.
    pub(crate) fn transition(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

// Query methods
impl Order {
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn event_duration_hours(&self) -> u32 {
        self.event_duration_hours
    }

    pub fn crates(&self) -> u32 {
        self.crates
    }

    pub fn mix(&self) -> &BrandMix {
        &self.mix
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn estimated_delivery_at(&self) -> DateTime<Utc> {
        self.estimated_delivery_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true if the order is delivered or cancelled.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
