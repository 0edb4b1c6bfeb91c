//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations keep users in insertion order.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by their exact email
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Store a new user under the next free id
    ///
    /// The id is `max(existing ids) + 1`, or 1 for an empty repository. Fails
    /// if another user already has the draft's email.
    async fn create(&self, draft: NewUser) -> Result<User, DomainError>;

    /// Apply `edit` to a stored user while holding exclusive access
    ///
    /// Returns `None` if the user does not exist. When `edit` fails the
    /// stored user is left untouched.
    async fn modify<F>(&self, id: UserId, edit: F) -> Result<Option<User>, DomainError>
    where
        F: FnOnce(&mut User) -> Result<(), DomainError> + Send;

    /// Delete a user
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// List all users in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Count users
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}
