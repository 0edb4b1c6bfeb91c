//! User validation utilities

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("name required")]
    NameRequired,

    #[error("name cannot be empty")]
    EmptyName,

    #[error("invalid email")]
    InvalidEmail,

    #[error("email exists")]
    EmailExists,
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Validate the name supplied when creating a user
///
/// Returns the trimmed name.
pub fn validate_new_name(name: Option<&str>) -> Result<&str, UserValidationError> {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(UserValidationError::NameRequired),
    }
}

/// Validate a replacement name for an existing user
///
/// Returns the trimmed name.
pub fn validate_updated_name(name: &str) -> Result<&str, UserValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    Ok(trimmed)
}

/// Syntactic email check
///
/// Rules:
/// - Cannot be empty
/// - Must contain an `@`
/// - The segment between the first `@` and the next one (or the end) must
///   contain a `.`
///
/// Deliberately permissive: `a@b.` and `@x.y` both pass.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }

    email.split('@').nth(1).is_some_and(|domain| domain.contains('.'))
}

/// Validate an email address, see [`is_valid_email`]
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidEmail)
    }
}
