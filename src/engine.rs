//! Single-entry matching engine facade.
//!
//! [`Engine`] owns the order book and the action sink. Submission,
//! cancellation, and close run to completion on the calling thread; each
//! validates fully before mutating state or emitting, so a failed call leaves
//! the book and the stream exactly as they were. `&mut self` on every
//! operation makes unserialized concurrent use impossible; callers wanting to
//! share an engine wrap it in a mutex or drive it from a single actor thread.

use crate::action::Action;
use crate::error::EngineError;
use crate::matching::match_order;
use crate::order_book::OrderBook;
use crate::sink::ActionSink;
use crate::types::{Order, OrderId};
use log::info;

/// Single-instrument matching engine.
///
/// Construct with [`Engine::new`], handing it the sink that will receive the
/// ordered action stream. One engine instance per traded instrument.
pub struct Engine {
    book: OrderBook,
    sink: Box<dyn ActionSink>,
    closed: bool,
}

impl Engine {
    pub fn new(sink: Box<dyn ActionSink>) -> Self {
        Self {
            book: OrderBook::new(),
            sink,
            closed: false,
        }
    }

    /// Submits a limit order: emits `Placed`, runs matching (zero or more
    /// fill actions), and rests any remainder.
    ///
    /// Fails with [`EngineError::EngineClosed`] after [`Engine::close`],
    /// [`EngineError::InvalidOrder`] for a zero price or amount, and
    /// [`EngineError::DuplicateOrderId`] if the id already names a resting
    /// order. On failure nothing is emitted and no state changes.
    pub fn submit(&mut self, order: Order) -> Result<(), EngineError> {
        if self.closed {
            return Err(EngineError::EngineClosed);
        }
        if order.price == 0 || order.original_amount == 0 {
            return Err(EngineError::InvalidOrder {
                price: order.price,
                amount: order.original_amount,
            });
        }
        if self.book.contains(&order.id) {
            return Err(EngineError::DuplicateOrderId(order.id));
        }
        info!(
            "order submitted id={} side={:?} amount={} price={}",
            order.id, order.side, order.original_amount, order.price
        );

        // Commit the arrival to the log before any matching, so the consumer
        // sees Placed strictly before any fill referencing this id.
        let mut taker = order;
        taker.remaining = taker.original_amount;
        self.sink.emit(&Action::Placed {
            order_id: taker.id.clone(),
            side: taker.side,
            quantity: taker.original_amount,
            price: taker.price,
        });
        match_order(&mut self.book, &mut taker, self.sink.as_ref());
        Ok(())
    }

    /// Cancels a resting order: emits `CancelRequested`, removes the order,
    /// then emits `Cancelled`.
    ///
    /// Fails with [`EngineError::OrderNotFound`] if the id is not currently
    /// resting (unknown, fully matched, or already cancelled), emitting
    /// nothing. A given id can be cancelled successfully at most once.
    pub fn cancel(&mut self, id: &OrderId) -> Result<(), EngineError> {
        if self.closed {
            return Err(EngineError::EngineClosed);
        }
        if !self.book.contains(id) {
            return Err(EngineError::OrderNotFound(id.clone()));
        }
        self.sink.emit(&Action::CancelRequested {
            order_id: id.clone(),
        });
        if let Some(cancelled) = self.book.cancel_order(id) {
            info!(
                "order cancelled id={} remaining={}",
                cancelled.id, cancelled.remaining
            );
        }
        self.sink.emit(&Action::Cancelled {
            order_id: id.clone(),
        });
        Ok(())
    }

    /// Shuts the engine down: emits the terminal `StreamEnded` action. All
    /// later submissions and cancellations, and a second `close`, fail with
    /// [`EngineError::EngineClosed`].
    pub fn close(&mut self) -> Result<(), EngineError> {
        if self.closed {
            return Err(EngineError::EngineClosed);
        }
        self.closed = true;
        info!("engine closed");
        self.sink.emit(&Action::StreamEnded);
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Best bid price, if any.
    pub fn best_bid(&self) -> Option<u64> {
        self.book.best_bid()
    }

    /// Best ask price, if any.
    pub fn best_ask(&self) -> Option<u64> {
        self.book.best_ask()
    }

    /// The resting order named by `id`, if any.
    pub fn resting(&self, id: &OrderId) -> Option<&Order> {
        self.book.resting(id)
    }

    /// Number of resting orders.
    pub fn resting_count(&self) -> usize {
        self.book.len()
    }

    /// Sum of remaining amounts across all resting orders.
    pub fn total_resting_amount(&self) -> u64 {
        self.book.total_resting_amount()
    }
}
