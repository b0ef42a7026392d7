//! Engine error taxonomy.
//!
//! Every error is returned synchronously to the caller of the failing
//! operation, and validation happens before any state mutation or action
//! emission, so a failed call leaves the book and the stream untouched.

use crate::types::OrderId;
use thiserror::Error;

/// Errors returned by [`crate::Engine`] operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Price or amount was zero.
    #[error("invalid order: price and amount must be positive (price={price}, amount={amount})")]
    InvalidOrder { price: u64, amount: u64 },

    /// The id already names a resting order.
    #[error("duplicate order id: {0}")]
    DuplicateOrderId(OrderId),

    /// The id does not name a currently resting order
    /// (unknown, already fully matched, or already cancelled).
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// The engine was closed; no further operations are accepted.
    #[error("engine is closed")]
    EngineClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_rejected_values() {
        let e = EngineError::InvalidOrder {
            price: 0,
            amount: 10,
        };
        assert!(e.to_string().contains("price=0"));
        let e = EngineError::OrderNotFound(OrderId::new("Z999"));
        assert!(e.to_string().contains("Z999"));
    }
}
