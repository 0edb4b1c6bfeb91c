//! Order entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::domain::user::UserId;

/// Status assigned to every newly created order
pub const ORDER_STATUS_PENDING: &str = "pending";

/// Opaque order identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single order line
///
/// `price` and `quantity` keep the exact JSON numbers the caller sent, so
/// `10` is echoed as `10` rather than `10.0`. Missing values count as zero
/// when totalling. Any other fields supplied by the caller are kept as-is
/// and echoed back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quantity: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    pub fn new(price: f64, quantity: f64) -> Self {
        Self {
            price: Number::from_f64(price),
            quantity: Number::from_f64(quantity),
            extra: Map::new(),
        }
    }

    pub fn price(&self) -> f64 {
        as_amount(self.price.as_ref())
    }

    pub fn quantity(&self) -> f64 {
        as_amount(self.quantity.as_ref())
    }

    /// `price * quantity`
    pub fn line_total(&self) -> f64 {
        self.price() * self.quantity()
    }
}

fn as_amount(number: Option<&Number>) -> f64 {
    number.and_then(Number::as_f64).unwrap_or(0.0)
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    user_id: UserId,
    items: Vec<LineItem>,
    /// Final amount, fixed at creation
    total: f64,
    status: String,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new pending order
    pub fn new(order_id: OrderId, user_id: UserId, items: Vec<LineItem>, total: f64) -> Self {
        Self {
            order_id,
            user_id,
            items,
            total,
            status: ORDER_STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }

    // Getters

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}
