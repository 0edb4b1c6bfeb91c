//! Application state for shared services

use std::sync::Arc;

use crate::domain::order::{LineItem, Order, OrderId, OrderRepository};
use crate::domain::user::{FieldUpdate, User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::order::{InMemoryOrderRepository, OrderLedger};
use crate::infrastructure::user::{InMemoryUserRepository, UserDirectory};

/// Application state containing shared services using dynamic dispatch
///
/// Built once at startup and handed to the router; handlers never reach
/// for global state.
#[derive(Clone)]
pub struct AppState {
    pub user_directory: Arc<dyn UserDirectoryTrait>,
    pub order_ledger: Arc<dyn OrderLedgerTrait>,
}

impl AppState {
    pub fn new(
        user_directory: Arc<dyn UserDirectoryTrait>,
        order_ledger: Arc<dyn OrderLedgerTrait>,
    ) -> Self {
        Self {
            user_directory,
            order_ledger,
        }
    }

    /// Empty directory and ledger backed by in-memory repositories
    pub fn in_memory() -> Self {
        let user_directory = Arc::new(UserDirectory::new(Arc::new(InMemoryUserRepository::new())));
        let order_ledger = Arc::new(OrderLedger::new(
            Arc::new(InMemoryOrderRepository::new()),
            Arc::clone(&user_directory),
        ));

        Self::new(user_directory, order_ledger)
    }
}

/// Trait for user directory operations
#[async_trait::async_trait]
pub trait UserDirectoryTrait: Send + Sync {
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
    async fn create(&self, name: Option<&str>, email: Option<&str>) -> Result<User, DomainError>;
    async fn update(
        &self,
        id: UserId,
        name: FieldUpdate<String>,
        email: FieldUpdate<String>,
    ) -> Result<Option<User>, DomainError>;
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;
}

/// Trait for order ledger operations
#[async_trait::async_trait]
pub trait OrderLedgerTrait: Send + Sync {
    async fn create(&self, user_id: UserId, items: Vec<LineItem>) -> Result<Order, DomainError>;
    async fn list_all(&self) -> Result<Vec<Order>, DomainError>;
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError>;
    async fn list_by_status(&self, status: &str) -> Result<Vec<Order>, DomainError>;
    async fn get_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserDirectoryTrait for UserDirectory<R> {
    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        UserDirectory::list_all(self).await
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        UserDirectory::get_by_id(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserDirectory::count(self).await
    }

    async fn create(&self, name: Option<&str>, email: Option<&str>) -> Result<User, DomainError> {
        UserDirectory::create(self, name, email).await
    }

    async fn update(
        &self,
        id: UserId,
        name: FieldUpdate<String>,
        email: FieldUpdate<String>,
    ) -> Result<Option<User>, DomainError> {
        UserDirectory::update(self, id, name, email).await
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        UserDirectory::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R, U> OrderLedgerTrait for OrderLedger<R, U>
where
    R: OrderRepository + 'static,
    U: UserRepository + 'static,
{
    async fn create(&self, user_id: UserId, items: Vec<LineItem>) -> Result<Order, DomainError> {
        OrderLedger::create(self, user_id, items).await
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        OrderLedger::list_all(self).await
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        OrderLedger::list_by_user(self, user_id).await
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Order>, DomainError> {
        OrderLedger::list_by_status(self, status).await
    }

    async fn get_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, DomainError> {
        OrderLedger::get_by_id(self, order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_state_shares_directory_with_ledger() {
        let state = AppState::in_memory();

        let user = state.user_directory.create(Some("Alice"), None).await.unwrap();
        let order = state
            .order_ledger
            .create(user.id(), vec![LineItem::new(2.0, 2.0)])
            .await
            .unwrap();

        assert_eq!(order.user_id(), user.id());
        assert_eq!(state.order_ledger.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_services() {
        let state = AppState::in_memory();
        let clone = state.clone();

        state.user_directory.create(Some("Alice"), None).await.unwrap();
        assert_eq!(clone.user_directory.count().await.unwrap(), 1);
    }
}
