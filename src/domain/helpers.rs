//! Stateless numeric and string helpers
//!
//! Every function here is total: division by zero in [`divide`] yields zero,
//! while [`percentage_of`] reports a zero total as a validation error.

use chrono::{Datelike, NaiveDate};

use super::order::LineItem;
use super::DomainError;

/// Default rate used by [`calculate_tax`]
pub const DEFAULT_TAX_RATE: f64 = 0.10;

/// Discount amount for a percentage, zero for negative prices
pub fn calculate_discount_amount(price: f64, percent: f64) -> f64 {
    if price < 0.0 {
        return 0.0;
    }

    price * (percent / 100.0)
}

/// `a / b`, or zero when `b` is zero
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return 0.0;
    }

    a / b
}

/// Sum of `price * quantity` over all items
pub fn calculate_total_price(items: &[LineItem]) -> f64 {
    items
        .iter()
        .fold(0.0, |total, item| total + item.line_total())
}

pub fn is_valid_age(age: i64) -> bool {
    age > 0 && age < 150
}

/// `value` as a percentage of `total`
pub fn percentage_of(value: f64, total: f64) -> Result<f64, DomainError> {
    if total == 0.0 {
        return Err(DomainError::validation("total is zero"));
    }

    Ok(value / total * 100.0)
}

/// Strip dashes, spaces and parentheses from a phone number
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !matches!(c, '-' | ' ' | '(' | ')'))
        .collect()
}

/// Render an amount as dollars with two decimals
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Tax at [`DEFAULT_TAX_RATE`]
pub fn calculate_tax(amount: f64) -> f64 {
    calculate_tax_at(amount, DEFAULT_TAX_RATE)
}

pub fn calculate_tax_at(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Amount with tax added on top
pub fn apply_tax(amount: f64, rate: f64) -> f64 {
    amount + calculate_tax_at(amount, rate)
}

/// Price reduced by a fractional discount (0.2 means 20%)
pub fn price_after_discount(price: f64, fraction: f64) -> f64 {
    price - price * fraction
}

pub fn is_valid_price(price: f64) -> bool {
    price > 0.0 && price < 1_000_000.0
}

/// Keep the date part of an ISO-8601 timestamp
///
/// Strings shorter than ten characters are returned unchanged.
pub fn format_date(date: &str) -> String {
    match date.char_indices().nth(10) {
        Some((end, _)) => date[..end].to_string(),
        None => date.to_string(),
    }
}

/// Trim surrounding whitespace and drop angle brackets
pub fn sanitize_input(input: &str) -> String {
    input.trim().chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

/// Whole years elapsed between `birth_date` and `today`
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();

    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }

    age
}
