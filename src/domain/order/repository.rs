//! Order repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Order, OrderId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository trait for order storage
///
/// Implementations keep orders in creation order and every listing
/// preserves it.
#[async_trait]
pub trait OrderRepository: Send + Sync + Debug {
    /// Get an order by its ID
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Append a new order
    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    /// List all orders
    async fn list(&self) -> Result<Vec<Order>, DomainError>;

    /// List the orders placed for a user
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError>;

    /// List the orders with an exact status
    async fn list_by_status(&self, status: &str) -> Result<Vec<Order>, DomainError>;
}
