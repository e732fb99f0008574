//! Order service: the single owner of the order collection.

use std::sync::Arc;

use chrono::Utc;
use common::{OrderId, OrderSequence};
use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::error::DomainError;
use crate::statistics::{OrderStatistics, summarize};
use crate::store::OrderStore;

use super::{Order, OrderIntake, OrderStatus, validate};

/// Everything guarded by the service lock.
struct Ledger<S> {
    store: S,
    sequence: OrderSequence,
}

/// Service for managing orders.
///
/// Owns the store and the ID sequence behind one mutex, so every operation
/// runs as a single non-interleaved step. Failed operations leave the
/// collection untouched.
pub struct OrderService<S: OrderStore> {
    catalog: Arc<Catalog>,
    ledger: Mutex<Ledger<S>>,
}

impl<S: OrderStore> OrderService<S> {
    /// Creates a service over `store` using the standard catalog.
    pub fn new(store: S) -> Self {
        Self::with_catalog(store, Arc::new(Catalog::standard()))
    }

    /// Creates a service with an explicit catalog.
    ///
    /// The ID sequence resumes after the highest ID already in `store`.
    pub fn with_catalog(store: S, catalog: Arc<Catalog>) -> Self {
        let sequence = store
            .last_id()
            .map(|id| OrderSequence::starting_after(id.value()))
            .unwrap_or_default();

        Self {
            catalog,
            ledger: Mutex::new(Ledger { store, sequence }),
        }
    }

    /// The catalog used for pricing.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validates the intake, prices it and stores a new pending order.
    #[tracing::instrument(skip(self, intake), fields(guests = ?intake.guests, crates = ?intake.crates))]
    pub async fn create(&self, intake: OrderIntake) -> Result<Order, DomainError> {
        let valid = validate(&intake).inspect_err(|e| {
            metrics::counter!("orders_rejected_total").increment(1);
            tracing::info!(reason = %e, "order intake rejected");
        })?;

        let unknown = self.catalog.unknown_brands(&valid.mix);
        if !unknown.is_empty() {
            tracing::warn!(brands = ?unknown, "mix contains brands outside the catalog; they are not priced");
        }
        let total_cost = self.catalog.cost_of(&valid.mix);

        let mut ledger = self.ledger.lock().await;
        let now = Utc::now();
        let (order_id, order_number) = ledger.sequence.next(now);
        let order = Order::place(order_id, order_number, valid, total_cost, now);

        ledger.store.insert(order.clone()).inspect_err(|e| {
            tracing::error!(error = %e, %order_id, "failed to store new order");
        })?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(
            %order_id,
            order_number = %order.order_number(),
            crates = order.crates(),
            total_cost = %order.total_cost(),
            "order placed"
        );

        Ok(order)
    }

    /// Loads an order by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, order_id: OrderId) -> Result<Order, DomainError> {
        let ledger = self.ledger.lock().await;
        ledger
            .store
            .get(order_id)
            .cloned()
            .ok_or(DomainError::NotFound(order_id))
    }

    /// All orders, most recently created first.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Vec<Order> {
        let ledger = self.ledger.lock().await;
        let mut orders: Vec<Order> = ledger.store.iter().cloned().collect();
        drop(ledger);

        orders.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then(b.order_id().cmp(&a.order_id()))
        });
        orders
    }

    /// Parses `status` and writes it to the order.
    ///
    /// Unknown status strings are rejected before the order is looked up.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(&self, order_id: OrderId, status: &str) -> Result<Order, DomainError> {
        let status: OrderStatus = status
            .parse()
            .map_err(|_| DomainError::InvalidStatus(status.to_string()))?;
        self.set_status(order_id, status).await
    }

    /// Writes a status to the order and stamps `updated_at`.
    ///
    /// Any recognised status is accepted; moves outside the canonical
    /// progression are logged but applied.
    #[tracing::instrument(skip(self))]
    pub async fn set_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, DomainError> {
        let mut ledger = self.ledger.lock().await;
        let order = ledger
            .store
            .get_mut(order_id)
            .ok_or(DomainError::NotFound(order_id))?;

        let previous = order.status();
        if !previous.is_forward_step(status) {
            tracing::warn!(%order_id, from = %previous, to = %status, "status change outside normal progression");
        }

        order.transition(status, Utc::now());

        metrics::counter!("order_status_updates_total", "status" => status.as_str()).increment(1);
        tracing::info!(%order_id, from = %previous, to = %status, "order status updated");

        Ok(order.clone())
    }

    /// Removes an order and returns it.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, order_id: OrderId) -> Result<Order, DomainError> {
        let mut ledger = self.ledger.lock().await;
        let order = ledger
            .store
            .remove(order_id)
            .ok_or(DomainError::NotFound(order_id))?;

        metrics::counter!("orders_deleted_total").increment(1);
        tracing::info!(%order_id, "order deleted");

        Ok(order)
    }

    /// Summary metrics over the current collection.
    #[tracing::instrument(skip(self))]
    pub async fn statistics(&self) -> OrderStatistics {
        let ledger = self.ledger.lock().await;
        summarize(ledger.store.iter(), Utc::now())
    }

    /// Number of stored orders.
    pub async fn len(&self) -> usize {
        self.ledger.lock().await.store.len()
    }

    /// Returns true if no orders are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CASTLE, CLUB, NILE};
    use crate::order::{BrandMix, Money, ValidationError};
    use crate::store::{InMemoryOrderStore, StoreError};

    /// Store that refuses every insert.
    #[derive(Default)]
    struct RejectingStore {
        inner: InMemoryOrderStore,
    }

    impl OrderStore for RejectingStore {
        fn insert(&mut self, order: Order) -> crate::store::Result<()> {
            Err(StoreError::DuplicateOrder(order.order_id()))
        }

        fn get(&self, id: OrderId) -> Option<&Order> {
            self.inner.get(id)
        }

        fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
            self.inner.get_mut(id)
        }

        fn remove(&mut self, id: OrderId) -> Option<Order> {
            self.inner.remove(id)
        }

        fn iter(&self) -> Box<dyn Iterator<Item = &Order> + '_> {
            self.inner.iter()
        }

        fn len(&self) -> usize {
            self.inner.len()
        }
    }

    fn service() -> OrderService<InMemoryOrderStore> {
        OrderService::new(InMemoryOrderStore::new())
    }

    fn intake() -> OrderIntake {
        let mix: BrandMix = [(NILE, 7), (CLUB, 5), (CASTLE, 4)].into_iter().collect();
        OrderIntake::new(100, 4, 16, mix, "Kololo Airstrip, Kampala")
    }

    #[tokio::test]
    async fn test_create_order() {
        let service = service();

        let order = service.create(intake()).await.unwrap();

        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.total_cost(), Money::from_ugx(1_130_000));
        assert_eq!(order.crates(), 16);
        assert_eq!(order.order_id(), OrderId::new(1));
        assert_eq!(service.len().await, 1);
    }

    #[tokio::test]
    async fn test_rejected_intake_is_not_stored() {
        let service = service();
        let mut bad = intake();
        bad.guests = Some(9);

        let result = service.create(bad).await;

        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::GuestsOutOfRange(9)))
        ));
        assert!(service.is_empty().await);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_and_stores_nothing() {
        let service = OrderService::new(RejectingStore::default());

        let result = service.create(intake()).await;

        assert!(matches!(result, Err(DomainError::Internal(msg)) if msg.contains("Duplicate")));
        assert!(service.is_empty().await);
        assert!(service.list().await.is_empty());
        assert_eq!(service.statistics().await.total_orders, 0);
    }

    #[tokio::test]
    async fn test_unknown_brand_contributes_nothing() {
        let service = service();
        let mut i = intake();
        i.mix = Some([(NILE, 2), ("guinness", 3)].into_iter().collect());

        let order = service.create(i).await.unwrap();

        assert_eq!(order.total_cost(), Money::from_ugx(150_000));
    }

    #[tokio::test]
    async fn test_get_missing_order() {
        let service = service();
        let result = service.get(OrderId::new(42)).await;
        assert!(matches!(result, Err(DomainError::NotFound(id)) if id == OrderId::new(42)));
    }

    #[tokio::test]
    async fn test_update_status_rejects_unknown_before_lookup() {
        let service = service();
        let result = service.update_status(OrderId::new(99), "archived").await;
        assert!(matches!(result, Err(DomainError::InvalidStatus(s)) if s == "archived"));
    }

    #[tokio::test]
    async fn test_update_status_missing_order() {
        let service = service();
        let result = service.update_status(OrderId::new(99), "confirmed").await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_any_status_can_be_written() {
        let service = service();
        let order = service.create(intake()).await.unwrap();
        let id = order.order_id();

        let delivered = service.update_status(id, "delivered").await.unwrap();
        assert_eq!(delivered.status(), OrderStatus::Delivered);

        let back = service.update_status(id, "pending").await.unwrap();
        assert_eq!(back.status(), OrderStatus::Pending);
        assert!(back.updated_at() >= order.updated_at());
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service();
        let order = service.create(intake()).await.unwrap();

        let deleted = service.delete(order.order_id()).await.unwrap();
        assert_eq!(deleted, order);

        let again = service.delete(order.order_id()).await;
        assert!(matches!(again, Err(DomainError::NotFound(_))));
        assert!(service.is_empty().await);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let service = service();
        let first = service.create(intake()).await.unwrap();
        service.delete(first.order_id()).await.unwrap();

        let second = service.create(intake()).await.unwrap();
        assert!(second.order_id() > first.order_id());
        assert_ne!(second.order_number(), first.order_number());
    }

    #[tokio::test]
    async fn test_sequence_resumes_after_existing_orders() {
        let seeded = service();
        seeded.create(intake()).await.unwrap();
        seeded.create(intake()).await.unwrap();
        let store = seeded.ledger.into_inner().store;

        let service = OrderService::new(store);
        let order = service.create(intake()).await.unwrap();

        assert_eq!(order.order_id(), OrderId::new(3));
    }

    #[tokio::test]
    async fn test_statistics() {
        let service = service();
        let a = service.create(intake()).await.unwrap();
        service.create(intake()).await.unwrap();
        service.update_status(a.order_id(), "cancelled").await.unwrap();

        let stats = service.statistics().await;

        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.count_by_status.cancelled, 1);
        assert_eq!(stats.count_by_status.pending, 1);
        assert_eq!(stats.total_revenue, Money::from_ugx(1_130_000));
        assert_eq!(stats.avg_guests, 100);
    }
}
