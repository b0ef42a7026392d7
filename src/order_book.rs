//! Single-instrument order book: bids and asks, price-time priority.
//!
//! Orders live in a stable-indexed arena of slots; each price level is a FIFO
//! queue of slot indices and the id index maps to the same slots, so matching
//! and cancellation mutate one authoritative copy of every order. Best bid is
//! the highest bid price, best ask the lowest ask price. A level whose queue
//! drains is removed immediately and never persists empty.

use crate::types::{Order, OrderId, Side};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Index of an order slot in the book's arena.
type SlotIdx = usize;

/// Price level -> FIFO queue of slot indices, oldest at the front.
type Ladder = BTreeMap<u64, VecDeque<SlotIdx>>;

/// One maker consumed (fully or partially) while taking liquidity.
#[derive(Clone, Debug)]
pub struct Fill {
    pub maker_id: OrderId,
    /// The maker's level price; the execution price of this match.
    pub price: u64,
    pub quantity: u64,
    /// True if the maker reached zero remaining and left the book.
    pub maker_fully_filled: bool,
}

/// Resting orders for one instrument.
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: Ladder,
    asks: Ladder,
    slots: Vec<Option<Order>>,
    free: Vec<SlotIdx>,
    /// Resting orders only; the order currently matching as taker is not here.
    index: HashMap<OrderId, SlotIdx>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` names a currently resting order.
    pub fn contains(&self, id: &OrderId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of resting orders.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The resting order named by `id`, if any.
    pub fn resting(&self, id: &OrderId) -> Option<&Order> {
        let idx = *self.index.get(id)?;
        self.slots.get(idx)?.as_ref()
    }

    /// Sum of remaining amounts across all resting orders.
    pub fn total_resting_amount(&self) -> u64 {
        self.index
            .values()
            .filter_map(|&idx| self.slots[idx].as_ref())
            .map(|o| o.remaining)
            .sum()
    }

    /// Appends an order to the back of its price level's queue and indexes it.
    /// The caller has already validated the order and checked for id reuse.
    pub fn rest_order(&mut self, order: Order) {
        let id = order.id.clone();
        let side = order.side;
        let price = order.price;
        let idx = match self.free.pop() {
            Some(i) => {
                self.slots[i] = Some(order);
                i
            }
            None => {
                self.slots.push(Some(order));
                self.slots.len() - 1
            }
        };
        self.ladder_mut(side).entry(price).or_default().push_back(idx);
        self.index.insert(id, idx);
    }

    /// Removes a resting order by id. Returns the order (with its unmatched
    /// remaining) if it was resting, `None` otherwise.
    pub fn cancel_order(&mut self, id: &OrderId) -> Option<Order> {
        let idx = self.index.remove(id)?;
        let order = self.slots[idx].take()?;
        self.free.push(idx);
        let ladder = self.ladder_mut(order.side);
        if let Some(queue) = ladder.get_mut(&order.price) {
            queue.retain(|&i| i != idx);
            if queue.is_empty() {
                ladder.remove(&order.price);
            }
        }
        Some(order)
    }

    /// Best bid price (None if no bids).
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.last_key_value().map(|(&p, _)| p)
    }

    /// Best ask price (None if no asks).
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.first_key_value().map(|(&p, _)| p)
    }

    /// Takes liquidity from the ask side for an incoming buy limited to
    /// `price_limit`. Walks levels best-first (lowest ask) and each queue
    /// oldest-first; stops when `amount` is exhausted or the best ask no
    /// longer crosses. A partially-consumed maker keeps the front of its
    /// queue; fully-consumed makers leave queue, index, and arena at once.
    pub fn take_from_asks(&mut self, price_limit: u64, mut amount: u64) -> Vec<Fill> {
        let mut fills = Vec::new();
        while amount > 0 {
            let Some((&price, _)) = self.asks.first_key_value() else {
                break;
            };
            if price > price_limit {
                break;
            }
            let Some(queue) = self.asks.get_mut(&price) else {
                break;
            };
            Self::drain_level(queue, price, &mut amount, &mut fills, &mut self.slots, &mut self.free, &mut self.index);
            if queue.is_empty() {
                self.asks.remove(&price);
            } else {
                // Front maker outlasted the taker.
                break;
            }
        }
        fills
    }

    /// Takes liquidity from the bid side for an incoming sell limited to
    /// `price_limit`. Mirror of [`OrderBook::take_from_asks`]: best bid is
    /// the highest price.
    pub fn take_from_bids(&mut self, price_limit: u64, mut amount: u64) -> Vec<Fill> {
        let mut fills = Vec::new();
        while amount > 0 {
            let Some((&price, _)) = self.bids.last_key_value() else {
                break;
            };
            if price < price_limit {
                break;
            }
            let Some(queue) = self.bids.get_mut(&price) else {
                break;
            };
            Self::drain_level(queue, price, &mut amount, &mut fills, &mut self.slots, &mut self.free, &mut self.index);
            if queue.is_empty() {
                self.bids.remove(&price);
            } else {
                break;
            }
        }
        fills
    }

    /// Matches `amount` against the front of one level's queue in time
    /// priority, recording one [`Fill`] per maker touched.
    fn drain_level(
        queue: &mut VecDeque<SlotIdx>,
        price: u64,
        amount: &mut u64,
        fills: &mut Vec<Fill>,
        slots: &mut [Option<Order>],
        free: &mut Vec<SlotIdx>,
        index: &mut HashMap<OrderId, SlotIdx>,
    ) {
        while *amount > 0 {
            let Some(&idx) = queue.front() else {
                break;
            };
            let Some(maker) = slots[idx].as_mut() else {
                // Stale index; drop it and keep going.
                queue.pop_front();
                continue;
            };
            let matched = (*amount).min(maker.remaining);
            *amount -= matched;
            maker.remaining -= matched;
            let maker_fully_filled = maker.remaining == 0;
            fills.push(Fill {
                maker_id: maker.id.clone(),
                price,
                quantity: matched,
                maker_fully_filled,
            });
            if maker_fully_filled {
                queue.pop_front();
                if let Some(done) = slots[idx].take() {
                    index.remove(&done.id);
                }
                free.push(idx);
            }
        }
    }

    fn ladder_mut(&mut self, side: Side) -> &mut Ladder {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// All resting orders, bids then asks, best level first, FIFO within each
    /// level. For inspection and tests.
    pub fn resting_orders(&self) -> Vec<&Order> {
        let mut out = Vec::with_capacity(self.index.len());
        for (_, queue) in self.bids.iter().rev() {
            out.extend(queue.iter().filter_map(|&i| self.slots[i].as_ref()));
        }
        for queue in self.asks.values() {
            out.extend(queue.iter().filter_map(|&i| self.slots[i].as_ref()));
        }
        out
    }
}
