//! Summary metrics over the order collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::order::{Money, Order, OrderStatus};

/// Number of orders in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub dispatched: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    fn record(&mut self, status: OrderStatus) {
        match status {
            OrderStatus::Pending => self.pending += 1,
            OrderStatus::Confirmed => self.confirmed += 1,
            OrderStatus::Dispatched => self.dispatched += 1,
            OrderStatus::Delivered => self.delivered += 1,
            OrderStatus::Cancelled => self.cancelled += 1,
        }
    }

    /// Count for a single status.
    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Confirmed => self.confirmed,
            OrderStatus::Dispatched => self.dispatched,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
        }
    }
}

/// Aggregate figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatistics {
    pub total_orders: usize,
    pub count_by_status: StatusCounts,
    /// Sum of `totalCost` over orders that are not cancelled.
    pub total_revenue: Money,
    /// Sum of crates over orders that are not cancelled.
    pub total_crates: u64,
    /// Mean guest count over all orders, rounded half up; 0 when empty.
    pub avg_guests: u32,
    pub generated_at: DateTime<Utc>,
}

/// Computes the statistics for a set of orders.
pub fn summarize<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    generated_at: DateTime<Utc>,
) -> OrderStatistics {
    let mut total_orders = 0usize;
    let mut count_by_status = StatusCounts::default();
    let mut total_revenue = Money::zero();
    let mut total_crates = 0u64;
    let mut total_guests = 0u64;

    for order in orders {
        total_orders += 1;
        count_by_status.record(order.status());
        total_guests += u64::from(order.guests());

        if order.status().counts_toward_revenue() {
            total_revenue += order.total_cost();
            total_crates += u64::from(order.crates());
        }
    }

    OrderStatistics {
        total_orders,
        count_by_status,
        total_revenue,
        total_crates,
        avg_guests: rounded_mean(total_guests, total_orders as u64),
        generated_at,
    }
}

fn rounded_mean(sum: u64, count: u64) -> u32 {
    if count == 0 {
        return 0;
    }
    let mean = (2 * sum + count) / (2 * count);
    u32::try_from(mean).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::fixtures;
    use common::OrderSequence;

    #[test]
    fn test_empty_collection() {
        let stats = summarize(std::iter::empty(), Utc::now());
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.avg_guests, 0);
        assert_eq!(stats.total_revenue, Money::zero());
        assert_eq!(stats.total_crates, 0);
        assert_eq!(stats.count_by_status, StatusCounts::default());
    }

    #[test]
    fn test_cancelled_orders_excluded_from_revenue_but_not_average() {
        let mut seq = OrderSequence::new();
        let now = Utc::now();
        let kept = fixtures::order(&mut seq, 100, 16, 1_130_000);
        let mut cancelled = fixtures::order(&mut seq, 51, 9, 675_000);
        cancelled.transition(OrderStatus::Cancelled, now);

        let stats = summarize([&kept, &cancelled], now);

        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.total_revenue, Money::from_ugx(1_130_000));
        assert_eq!(stats.total_crates, 16);
        // (100 + 51) / 2 = 75.5, rounds up
        assert_eq!(stats.avg_guests, 76);
        assert_eq!(stats.count_by_status.pending, 1);
        assert_eq!(stats.count_by_status.cancelled, 1);
    }

    #[test]
    fn test_counts_by_status() {
        let mut seq = OrderSequence::new();
        let now = Utc::now();
        let mut orders: Vec<Order> = (0..4)
            .map(|_| fixtures::order(&mut seq, 20, 2, 150_000))
            .collect();
        orders[1].transition(OrderStatus::Confirmed, now);
        orders[2].transition(OrderStatus::Dispatched, now);
        orders[3].transition(OrderStatus::Delivered, now);

        let stats = summarize(&orders, now);

        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Dispatched,
            OrderStatus::Delivered,
        ] {
            assert_eq!(stats.count_by_status.get(status), 1);
        }
        assert_eq!(stats.total_crates, 8);
        assert_eq!(stats.avg_guests, 20);
    }

    #[test]
    fn test_rounded_mean() {
        assert_eq!(rounded_mean(0, 0), 0);
        assert_eq!(rounded_mean(10, 4), 3);
        assert_eq!(rounded_mean(9, 4), 2);
        assert_eq!(rounded_mean(7, 2), 4);
    }

    #[test]
    fn test_serializes_camel_case() {
        let stats = summarize(std::iter::empty(), Utc::now());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalOrders"], 0);
        assert_eq!(json["avgGuests"], 0);
        assert_eq!(json["countByStatus"]["pending"], 0);
        assert!(json.get("generatedAt").is_some());
    }
}
