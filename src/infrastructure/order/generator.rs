//! Order ID generation
//!
//! Order IDs are short random tokens. They carry no information about the
//! order and collisions are not checked.

use rand::Rng;

use crate::domain::order::OrderId;

/// Symbols order IDs are drawn from
const ORDER_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of a generated order ID
pub const ORDER_ID_LENGTH: usize = 8;

/// Generator for random order IDs
#[derive(Debug, Clone)]
pub struct OrderIdGenerator {
    length: usize,
}

impl OrderIdGenerator {
    /// Create a generator producing IDs of the default length
    pub fn new() -> Self {
        Self {
            length: ORDER_ID_LENGTH,
        }
    }

    /// Set the number of symbols per ID
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Generate a new order ID
    pub fn generate(&self) -> OrderId {
        let mut rng = rand::thread_rng();

        let token: String = (0..self.length)
            .map(|_| char::from(ORDER_ID_ALPHABET[rng.gen_range(0..ORDER_ID_ALPHABET.len())]))
            .collect();

        OrderId::new(token)
    }
}

impl Default for OrderIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_default_length() {
        let id = OrderIdGenerator::new().generate();
        assert_eq!(id.as_str().len(), ORDER_ID_LENGTH);
    }

    #[test]
    fn test_generate_uses_lowercase_and_digits() {
        let generator = OrderIdGenerator::new();

        for _ in 0..200 {
            let id = generator.generate();
            assert!(id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_with_length() {
        let id = OrderIdGenerator::new().with_length(12).generate();
        assert_eq!(id.as_str().len(), 12);
    }

    #[test]
    fn test_generated_ids_differ() {
        let generator = OrderIdGenerator::new();
        let ids: HashSet<String> = (0..100)
            .map(|_| generator.generate().as_str().to_string())
            .collect();

        // 36^8 possibilities; a repeat in 100 draws would point at a broken RNG
        assert_eq!(ids.len(), 100);
    }
}
