//! User directory - validation and lifecycle of user records

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    validate_email, validate_new_name, validate_updated_name, FieldUpdate, NewUser, User, UserId,
    UserRepository, UserValidationError,
};
use crate::domain::DomainError;

/// Authoritative collection of users with their validation rules
#[derive(Debug)]
pub struct UserDirectory<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserDirectory<R> {
    /// Create a new user directory
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all users in creation order
    pub async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    /// Get a user by exact email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.repository.get_by_email(email).await
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Create a new user
    ///
    /// An empty email is treated as no email at all.
    pub async fn create(&self, name: Option<&str>, email: Option<&str>) -> Result<User, DomainError> {
        let name = validate_new_name(name)?;
        let email = email.filter(|e| !e.is_empty());

        if let Some(email) = email {
            validate_email(email)?;

            if self.repository.email_exists(email).await? {
                return Err(UserValidationError::EmailExists.into());
            }
        }

        let user = self
            .repository
            .create(NewUser {
                name: name.to_string(),
                email: email.map(String::from),
            })
            .await?;

        info!(user_id = %user.id(), "User created");
        Ok(user)
    }

    /// Update the supplied fields of a user
    ///
    /// Returns `Ok(None)` when the user does not exist. Nothing is changed
    /// if any supplied field fails validation. The edit runs under the
    /// repository's exclusive access, so concurrent updates of different
    /// fields both land. Email uniqueness is not checked here.
    pub async fn update(
        &self,
        id: UserId,
        name: FieldUpdate<String>,
        email: FieldUpdate<String>,
    ) -> Result<Option<User>, DomainError> {
        let updated = self
            .repository
            .modify(id, move |user| {
                match name {
                    FieldUpdate::Unchanged => {}
                    FieldUpdate::Clear => return Err(UserValidationError::EmptyName.into()),
                    FieldUpdate::Set(name) => {
                        let trimmed = validate_updated_name(&name)?;
                        user.set_name(trimmed);
                    }
                }

                match email {
                    FieldUpdate::Unchanged => {}
                    FieldUpdate::Clear => user.set_email(None),
                    FieldUpdate::Set(email) if email.is_empty() => user.set_email(None),
                    FieldUpdate::Set(email) => {
                        validate_email(&email)?;
                        user.set_email(Some(email));
                    }
                }

                Ok(())
            })
            .await?;

        if updated.is_some() {
            debug!(user_id = %id, "User updated");
        }

        Ok(updated)
    }

    /// Delete a user, returning whether it existed
    pub async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;

        if deleted {
            info!(user_id = %id, "User deleted");
        }

        Ok(deleted)
    }
}
