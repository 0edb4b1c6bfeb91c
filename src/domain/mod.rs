//! Domain layer - Core business logic and entities

pub mod error;
pub mod helpers;
pub mod order;
pub mod user;

pub use error::DomainError;
pub use order::{LineItem, Order, OrderId, OrderRepository, OrderTotals};
pub use user::{FieldUpdate, NewUser, User, UserId, UserRepository};
