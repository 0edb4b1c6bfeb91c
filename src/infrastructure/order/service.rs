//! Order ledger - creation and lookup of orders

use std::sync::Arc;

use tracing::{info, warn};

use super::generator::OrderIdGenerator;
use crate::domain::order::{LineItem, Order, OrderId, OrderRepository, OrderTotals};
use crate::domain::user::{UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::UserDirectory;

/// Authoritative collection of orders
///
/// Reads the user directory to check that the ordering user exists; the
/// check is not repeated after creation.
#[derive(Debug)]
pub struct OrderLedger<R: OrderRepository, U: UserRepository> {
    repository: Arc<R>,
    users: Arc<UserDirectory<U>>,
    id_generator: OrderIdGenerator,
}

impl<R: OrderRepository, U: UserRepository> OrderLedger<R, U> {
    /// Create a new order ledger
    pub fn new(repository: Arc<R>, users: Arc<UserDirectory<U>>) -> Self {
        Self {
            repository,
            users,
            id_generator: OrderIdGenerator::new(),
        }
    }

    /// Replace the order ID generator
    pub fn with_id_generator(mut self, id_generator: OrderIdGenerator) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Place a new pending order for an existing user
    pub async fn create(&self, user_id: UserId, items: Vec<LineItem>) -> Result<Order, DomainError> {
        if self.users.get_by_id(user_id).await?.is_none() {
            warn!(user_id = %user_id, "Order rejected for unknown user");
            return Err(DomainError::validation("user not found"));
        }

        let totals = OrderTotals::from_items(&items);
        let order = Order::new(self.id_generator.generate(), user_id, items, totals.total);
        let order = self.repository.create(order).await?;

        info!(
            order_id = %order.order_id(),
            user_id = %user_id,
            total = order.total(),
            "Order created"
        );
        Ok(order)
    }

    /// List all orders in creation order
    pub async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        self.repository.list().await
    }

    /// List a user's orders in creation order
    pub async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        self.repository.list_by_user(user_id).await
    }

    /// List orders with the given status in creation order
    pub async fn list_by_status(&self, status: &str) -> Result<Vec<Order>, DomainError> {
        self.repository.list_by_status(status).await
    }

    /// Get an order by ID
    pub async fn get_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, DomainError> {
        self.repository.get(order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::ORDER_STATUS_PENDING;
    use crate::infrastructure::order::repository::InMemoryOrderRepository;
    use crate::infrastructure::user::InMemoryUserRepository;

    type TestLedger = OrderLedger<InMemoryOrderRepository, InMemoryUserRepository>;

    fn create_ledger() -> (TestLedger, Arc<UserDirectory<InMemoryUserRepository>>) {
        let users = Arc::new(UserDirectory::new(Arc::new(InMemoryUserRepository::new())));
        let ledger = OrderLedger::new(Arc::new(InMemoryOrderRepository::new()), Arc::clone(&users));
        (ledger, users)
    }

    fn reference_items() -> Vec<LineItem> {
        vec![LineItem::new(10.0, 2.0), LineItem::new(5.0, 1.0)]
    }

    #[tokio::test]
    async fn test_create_order() {
        let (ledger, users) = create_ledger();
        let user = users.create(Some("Alice"), None).await.unwrap();

        let order = ledger.create(user.id(), reference_items()).await.unwrap();

        assert_eq!(order.user_id(), user.id());
        assert_eq!(order.total(), 26.25);
        assert_eq!(order.status(), ORDER_STATUS_PENDING);
        assert_eq!(order.order_id().as_str().len(), 8);
        assert_eq!(order.items(), reference_items().as_slice());
    }

    #[tokio::test]
    async fn test_create_for_unknown_user_leaves_ledger_unchanged() {
        let (ledger, _users) = create_ledger();

        let result = ledger.create(UserId::new(9), reference_items()).await;
        assert_eq!(result, Err(DomainError::validation("user not found")));
        assert!(ledger.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_user_keeps_creation_order() {
        let (ledger, users) = create_ledger();
        let alice = users.create(Some("Alice"), None).await.unwrap();
        let bob = users.create(Some("Bob"), None).await.unwrap();

        let a1 = ledger.create(alice.id(), vec![LineItem::new(1.0, 1.0)]).await.unwrap();
        let a2 = ledger.create(alice.id(), vec![LineItem::new(2.0, 1.0)]).await.unwrap();
        ledger.create(bob.id(), vec![LineItem::new(3.0, 1.0)]).await.unwrap();
        let a3 = ledger.create(alice.id(), vec![LineItem::new(4.0, 1.0)]).await.unwrap();

        let alice_orders = ledger.list_by_user(alice.id()).await.unwrap();
        assert_eq!(alice_orders, vec![a1, a2, a3]);
        assert_eq!(ledger.list_by_user(bob.id()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_by_status() {
        let (ledger, users) = create_ledger();
        let alice = users.create(Some("Alice"), None).await.unwrap();
        ledger.create(alice.id(), reference_items()).await.unwrap();
        ledger.create(alice.id(), reference_items()).await.unwrap();

        assert_eq!(ledger.list_by_status("pending").await.unwrap().len(), 2);
        assert!(ledger.list_by_status("shipped").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (ledger, users) = create_ledger();
        let alice = users.create(Some("Alice"), None).await.unwrap();
        let order = ledger.create(alice.id(), reference_items()).await.unwrap();

        let found = ledger.get_by_id(order.order_id()).await.unwrap();
        assert_eq!(found, Some(order));

        let missing = ledger.get_by_id(&OrderId::new("missing0")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_orders_survive_user_deletion() {
        let (ledger, users) = create_ledger();
        let alice = users.create(Some("Alice"), None).await.unwrap();
        let order = ledger.create(alice.id(), reference_items()).await.unwrap();

        users.delete(alice.id()).await.unwrap();

        assert_eq!(ledger.list_by_user(alice.id()).await.unwrap(), vec![order]);
        assert!(ledger.create(alice.id(), reference_items()).await.is_err());
    }

    #[tokio::test]
    async fn test_custom_id_generator() {
        let (ledger, users) = create_ledger();
        let ledger = ledger.with_id_generator(OrderIdGenerator::new().with_length(16));
        let alice = users.create(Some("Alice"), None).await.unwrap();

        let order = ledger.create(alice.id(), reference_items()).await.unwrap();
        assert_eq!(order.order_id().as_str().len(), 16);
    }

    #[tokio::test]
    async fn test_list_all_is_stable() {
        let (ledger, users) = create_ledger();
        let alice = users.create(Some("Alice"), None).await.unwrap();
        ledger.create(alice.id(), reference_items()).await.unwrap();
        ledger.create(alice.id(), vec![LineItem::new(7.0, 3.0)]).await.unwrap();

        let first = ledger.list_all().await.unwrap();
        let second = ledger.list_all().await.unwrap();
        assert_eq!(first, second);
    }
}
