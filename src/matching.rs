//! Price-time priority matching.
//!
//! [`match_order`] runs one taker against the book: takes liquidity from the
//! opposite side while the best price crosses the taker's limit, emits exactly
//! one action per match, and rests any unmatched remainder at the taker's own
//! limit price.

use crate::action::Action;
use crate::order_book::{Fill, OrderBook};
use crate::sink::ActionSink;
use crate::types::Order;
use log::debug;

/// Matches `taker` against the book, emitting one `PartialFilled` or `Filled`
/// action per maker touched, in match order. The execution price is the
/// maker's price. `Filled` is emitted for the match that brings the taker's
/// remaining to exactly zero; all earlier matches emit `PartialFilled`.
///
/// A remainder, if any, is appended to the back of the taker's own price
/// level and becomes a resting order; no action announces the insertion.
/// The unmatched remainder of a partially-filled maker likewise stays on the
/// book, at the front of its queue, keeping its original time priority.
pub fn match_order(book: &mut OrderBook, taker: &mut Order, sink: &dyn ActionSink) {
    let fills: Vec<Fill> = if taker.is_buy() {
        book.take_from_asks(taker.price, taker.remaining)
    } else {
        book.take_from_bids(taker.price, taker.remaining)
    };

    for fill in fills {
        taker.remaining -= fill.quantity;
        debug!(
            "match taker={} maker={} quantity={} price={} taker_remaining={}",
            taker.id, fill.maker_id, fill.quantity, fill.price, taker.remaining
        );
        let action = if taker.remaining > 0 {
            Action::PartialFilled {
                taker_id: taker.id.clone(),
                maker_id: fill.maker_id,
                quantity: fill.quantity,
                price: fill.price,
            }
        } else {
            Action::Filled {
                taker_id: taker.id.clone(),
                maker_id: fill.maker_id,
                quantity: fill.quantity,
                price: fill.price,
            }
        };
        sink.emit(&action);
    }

    if taker.remaining > 0 {
        book.rest_order(taker.clone());
    }
}
