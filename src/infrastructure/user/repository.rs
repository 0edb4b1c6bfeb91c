//! In-memory user repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository, UserValidationError};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Users are kept in a vector so listings follow creation order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_user_id(users: &[User]) -> UserId {
    users
        .iter()
        .map(User::id)
        .max()
        .map_or(UserId::new(1), |id| id.next())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email() == Some(email)).cloned())
    }

    async fn create(&self, draft: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if let Some(email) = draft.email.as_deref() {
            if users.iter().any(|u| u.email() == Some(email)) {
                return Err(UserValidationError::EmailExists.into());
            }
        }

        let user = User::from_draft(next_user_id(&users), draft);
        users.push(user.clone());

        Ok(user)
    }

    async fn modify<F>(&self, id: UserId, edit: F) -> Result<Option<User>, DomainError>
    where
        F: FnOnce(&mut User) -> Result<(), DomainError> + Send,
    {
        let mut users = self.users.write().await;

        let Some(existing) = users.iter_mut().find(|u| u.id() == id) else {
            return Ok(None);
        };

        // Edit a copy so a failed edit leaves nothing half-applied
        let mut edited = existing.clone();
        edit(&mut edited)?;
        *existing = edited.clone();

        Ok(Some(edited))
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;

        if let Some(index) = users.iter().position(|u| u.id() == id) {
            users.remove(index);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}
