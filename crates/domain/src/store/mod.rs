//! Storage for placed orders.

mod memory;

pub use memory::InMemoryOrderStore;

use common::OrderId;
use thiserror::Error;

use crate::order::Order;

/// Errors raised by an order store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An order with this ID is already stored.
    #[error("Duplicate order id: {0}")]
    DuplicateOrder(OrderId),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// An ordered collection of orders keyed by [`OrderId`].
///
/// Implementations are plain data structures with no locking of their own:
/// the owning service serializes every access through one exclusive lock.
pub trait OrderStore: Send {
    /// Adds a new order. Fails without modifying the store if the ID is taken.
    fn insert(&mut self, order: Order) -> Result<()>;

    /// Looks up an order.
    fn get(&self, id: OrderId) -> Option<&Order>;

    /// Looks up an order for in-place mutation.
    fn get_mut(&mut self, id: OrderId) -> Option<&mut Order>;

    /// Removes and returns an order.
    fn remove(&mut self, id: OrderId) -> Option<Order>;

    /// Iterates all orders in ascending ID order.
    fn iter(&self) -> Box<dyn Iterator<Item = &Order> + '_>;

    /// Number of stored orders.
    fn len(&self) -> usize;

    /// Returns true if no orders are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highest stored ID, used to resume the ID sequence.
    fn last_id(&self) -> Option<OrderId> {
        self.iter().map(Order::order_id).max()
    }
}
