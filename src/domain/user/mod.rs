//! User domain
//!
//! This module provides domain types and traits for the user directory,
//! including the user entity, validation rules, and the repository trait.

mod entity;
mod repository;
mod update;
mod validation;

pub use entity::{NewUser, User, UserId};
pub use repository::UserRepository;
pub use update::FieldUpdate;
pub use validation::{
    is_valid_email, validate_email, validate_new_name, validate_updated_name,
    UserValidationError,
};
