//! In-memory order repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::order::{Order, OrderId, OrderRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// In-memory implementation of OrderRepository
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<Order>
    where
        F: Fn(&Order) -> bool,
    {
        let orders = self.orders.read().await;
        orders.iter().filter(|o| predicate(o)).cloned().collect()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.order_id() == id).cloned())
    }

    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;
        orders.push(order.clone());
        Ok(order)
    }

    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.clone())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        Ok(self.filtered(|o| o.user_id() == user_id).await)
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Order>, DomainError> {
        Ok(self.filtered(|o| o.status() == status).await)
    }
}
