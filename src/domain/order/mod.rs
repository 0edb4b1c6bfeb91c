//! Order domain
//!
//! Order entities, the pricing rules applied at creation, and the
//! repository trait.

mod entity;
pub mod pricing;
mod repository;

pub use entity::{LineItem, Order, OrderId, ORDER_STATUS_PENDING};
pub use pricing::{OrderTotals, DISCOUNT_RATE, TAX_RATE};
pub use repository::OrderRepository;
