//! Core value types: order identifiers, sides, and the order message.
//!
//! [`OrderId`] is a newtype over the caller-assigned string token. [`Order`]
//! carries the limit price, the original amount, and the mutable `remaining`.

use std::fmt;

/// Caller-assigned order identifier, unique among currently active orders.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Order side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

/// A limit order: incoming (taker) or resting in the book.
///
/// `remaining` starts at `original_amount` and only decreases; the order
/// leaves the book the instant it reaches zero or the order is cancelled.
/// Prices and amounts are whole units; zero is rejected on input.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: u64,
    pub original_amount: u64,
    pub remaining: u64,
}

impl Order {
    /// Builds a fresh order with `remaining == original_amount`.
    pub fn new(id: impl Into<OrderId>, side: Side, price: u64, amount: u64) -> Self {
        Self {
            id: id.into(),
            side,
            price,
            original_amount: amount,
            remaining: amount,
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self.side, Side::Buy)
    }
}
