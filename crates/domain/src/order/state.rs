//! Order status lifecycle.

use serde::{Deserialize, Serialize};

/// The status of an order.
///
/// Canonical progression:
/// ```text
/// Pending ──► Confirmed ──► Dispatched ──► Delivered
///    │            │             │
///    └────────────┴─────────────┴──► Cancelled
/// ```
/// The progression is advisory: any status may be written by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order received, awaiting confirmation.
    #[default]
    Pending,

    /// Order accepted by the distribution hub.
    Confirmed,

    /// Crates are on their way.
    Dispatched,

    /// Crates handed over at the venue (terminal state).
    Delivered,

    /// Order was cancelled (terminal state).
    Cancelled,
}

impl OrderStatus {
    /// Every recognised status, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Dispatched,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Returns true if the order can be cancelled in this state.
    pub fn can_cancel(&self) -> bool {
        !self.is_terminal()
    }

    /// The next status along the delivery path, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Dispatched),
            OrderStatus::Dispatched => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Returns true if moving to `to` follows the canonical progression.
    pub fn is_forward_step(&self, to: OrderStatus) -> bool {
        self.next() == Some(to) || (to == OrderStatus::Cancelled && self.can_cancel())
    }

    /// Returns true if revenue and crate totals should count this order.
    pub fn counts_toward_revenue(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }

    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Dispatched => "dispatched",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the five recognised statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_parse_recognised_statuses() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let err = "archived".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("archived".to_string()));
        assert!("Pending".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_forward_steps() {
        assert!(OrderStatus::Pending.is_forward_step(OrderStatus::Confirmed));
        assert!(OrderStatus::Confirmed.is_forward_step(OrderStatus::Dispatched));
        assert!(OrderStatus::Dispatched.is_forward_step(OrderStatus::Delivered));
        assert!(!OrderStatus::Pending.is_forward_step(OrderStatus::Delivered));
        assert!(!OrderStatus::Delivered.is_forward_step(OrderStatus::Pending));
    }

    #[test]
    fn test_cancel_from_non_terminal_states() {
        assert!(OrderStatus::Pending.is_forward_step(OrderStatus::Cancelled));
        assert!(OrderStatus::Confirmed.is_forward_step(OrderStatus::Cancelled));
        assert!(OrderStatus::Dispatched.is_forward_step(OrderStatus::Cancelled));
        assert!(!OrderStatus::Delivered.is_forward_step(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.is_forward_step(OrderStatus::Cancelled));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Confirmed.is_terminal());
        assert!(!OrderStatus::Dispatched.is_terminal());
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_serialization_uses_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Dispatched).unwrap();
        assert_eq!(json, "\"dispatched\"");
        let back: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, OrderStatus::Cancelled);
    }
}
