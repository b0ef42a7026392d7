//! Observable engine events.
//!
//! [`Action`] is the closed set of records the engine hands to its sink, in
//! generation order. Consumers can match exhaustively on all six kinds.
//! Regardless of kind, every action exposes the same stable field set through
//! [`Action::subject_id`], [`Action::counterparty_id`], [`Action::quantity`],
//! and [`Action::price`].

use crate::types::{OrderId, Side};

/// One entry of the engine's event log.
///
/// Execution price is always the maker's price: the resting order sets the
/// price, and an aggressive taker receives price improvement.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum Action {
    /// An order was accepted. Emitted before any fill referencing its id.
    Placed {
        order_id: OrderId,
        side: Side,
        quantity: u64,
        price: u64,
    },
    /// A match that left the taker with remaining quantity.
    PartialFilled {
        taker_id: OrderId,
        maker_id: OrderId,
        quantity: u64,
        price: u64,
    },
    /// A match that brought the taker's remaining quantity to exactly zero.
    Filled {
        taker_id: OrderId,
        maker_id: OrderId,
        quantity: u64,
        price: u64,
    },
    /// A cancellation was accepted for a resting order.
    CancelRequested { order_id: OrderId },
    /// The resting order left the book.
    Cancelled { order_id: OrderId },
    /// Terminal record: nothing follows on this stream.
    StreamEnded,
}

impl Action {
    /// The id this action is about (empty for [`Action::StreamEnded`]).
    pub fn subject_id(&self) -> Option<&OrderId> {
        match self {
            Action::Placed { order_id, .. }
            | Action::CancelRequested { order_id }
            | Action::Cancelled { order_id } => Some(order_id),
            Action::PartialFilled { taker_id, .. } | Action::Filled { taker_id, .. } => {
                Some(taker_id)
            }
            Action::StreamEnded => None,
        }
    }

    /// The matched resting order's id, for fill actions only.
    pub fn counterparty_id(&self) -> Option<&OrderId> {
        match self {
            Action::PartialFilled { maker_id, .. } | Action::Filled { maker_id, .. } => {
                Some(maker_id)
            }
            _ => None,
        }
    }

    pub fn quantity(&self) -> u64 {
        match self {
            Action::Placed { quantity, .. }
            | Action::PartialFilled { quantity, .. }
            | Action::Filled { quantity, .. } => *quantity,
            _ => 0,
        }
    }

    pub fn price(&self) -> u64 {
        match self {
            Action::Placed { price, .. }
            | Action::PartialFilled { price, .. }
            | Action::Filled { price, .. } => *price,
            _ => 0,
        }
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, Action::PartialFilled { .. } | Action::Filled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_fields_for_fill() {
        let a = Action::Filled {
            taker_id: OrderId::new("t"),
            maker_id: OrderId::new("m"),
            quantity: 5,
            price: 100,
        };
        assert_eq!(a.subject_id().map(OrderId::as_str), Some("t"));
        assert_eq!(a.counterparty_id().map(OrderId::as_str), Some("m"));
        assert_eq!(a.quantity(), 5);
        assert_eq!(a.price(), 100);
        assert!(a.is_fill());
    }

    #[test]
    fn stream_ended_fields_are_empty() {
        let a = Action::StreamEnded;
        assert!(a.subject_id().is_none());
        assert!(a.counterparty_id().is_none());
        assert_eq!(a.quantity(), 0);
        assert_eq!(a.price(), 0);
    }

    #[test]
    fn cancel_actions_report_zero_quantity_and_price() {
        let a = Action::CancelRequested {
            order_id: OrderId::new("x"),
        };
        assert_eq!(a.quantity(), 0);
        assert_eq!(a.price(), 0);
        assert!(!a.is_fill());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let a = Action::Placed {
            order_id: OrderId::new("ord_1"),
            side: Side::Buy,
            quantity: 10,
            price: 967,
        };
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains(r#""kind":"Placed""#));
        assert!(json.contains(r#""price":967"#));
    }
}
