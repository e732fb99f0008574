use std::collections::BTreeMap;

use common::OrderId;

use super::{OrderStore, Result, StoreError};
use crate::order::Order;

/// In-memory order store.
///
/// Holds orders for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    orders: BTreeMap<OrderId, Order>,
}

impl InMemoryOrderStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert(&mut self, order: Order) -> Result<()> {
        let id = order.order_id();
        if self.orders.contains_key(&id) {
            return Err(StoreError::DuplicateOrder(id));
        }
        self.orders.insert(id, order);
        Ok(())
    }

    fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&id)
    }

    fn remove(&mut self, id: OrderId) -> Option<Order> {
        self.orders.remove(&id)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Order> + '_> {
        Box::new(self.orders.values())
    }

    fn len(&self) -> usize {
        self.orders.len()
    }

    fn last_id(&self) -> Option<OrderId> {
        self.orders.keys().next_back().copied()
    }
}
