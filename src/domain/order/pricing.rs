//! Order total computation

use serde::Serialize;

use super::entity::LineItem;

/// Tax applied to every order subtotal
pub const TAX_RATE: f64 = 0.10;

/// Discount applied to every order subtotal
pub const DISCOUNT_RATE: f64 = 0.05;

/// Breakdown of an order's amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
}

impl OrderTotals {
    /// Compute totals for a sequence of line items
    ///
    /// Negative prices and quantities are accepted as given.
    pub fn from_items(items: &[LineItem]) -> Self {
        let subtotal = items
            .iter()
            .fold(0.0, |acc, item| acc + item.line_total());
        let tax = subtotal * TAX_RATE;
        let discount = subtotal * DISCOUNT_RATE;

        Self {
            subtotal,
            tax,
            discount,
            total: subtotal + tax - discount,
        }
    }
}
