//! Order infrastructure module
//!
//! In-memory order repository, order ID generation and the order ledger
//! service.

mod generator;
mod repository;
mod service;

pub use generator::{OrderIdGenerator, ORDER_ID_LENGTH};
pub use repository::InMemoryOrderRepository;
pub use service::OrderLedger;
