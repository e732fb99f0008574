use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an order.
///
/// Issued by [`OrderSequence`]; values are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Creates an order ID from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<OrderId> for u64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl std::str::FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Human-readable order reference, e.g. `NBL-20261018-000042`.
///
/// Encodes the UTC creation date and the sequence value of the matching [`OrderId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Prefix shared by every order number.
    pub const PREFIX: &'static str = "NBL";

    /// Builds the order number for a sequence value created at `created_at`.
    pub fn generate(sequence: u64, created_at: DateTime<Utc>) -> Self {
        Self(format!(
            "{}-{}-{:06}",
            Self::PREFIX,
            created_at.format("%Y%m%d"),
            sequence
        ))
    }

    /// Returns the order number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Monotonic source of order identities.
///
/// Not synchronized on its own: the owner keeps it behind the same lock that
/// guards the order collection, so two creates can never observe the same value.
#[derive(Debug, Clone)]
pub struct OrderSequence {
    next: u64,
}

impl OrderSequence {
    /// Creates a sequence whose first issued value is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates a sequence that continues after `last_issued`.
    pub fn starting_after(last_issued: u64) -> Self {
        Self {
            next: last_issued.saturating_add(1),
        }
    }

    /// Issues the next identity pair for an order created at `created_at`.
    pub fn next(&mut self, created_at: DateTime<Utc>) -> (OrderId, OrderNumber) {
        let value = self.next;
        self.next = self.next.saturating_add(1);
        (
            OrderId::new(value),
            OrderNumber::generate(value, created_at),
        )
    }

    /// Returns the value the next call to [`next`](Self::next) will issue.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for OrderSequence {
    fn default() -> Self {
        Self::new()
    }
}
