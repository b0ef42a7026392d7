//! Synthetic order generator.
//!
//! Deterministic, configurable order stream for load tests and benches.
//! Same seed produces the same sequence of orders.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::Engine;
use crate::error::EngineError;
use crate::types::{Order, Side};

/// Configuration for the synthetic order generator.
/// All ranges are inclusive. Same config + seed produces the same stream.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// RNG seed. Same seed produces the same order stream.
    pub seed: u64,
    /// Number of orders in [`Generator::all_orders`].
    pub num_orders: usize,
    /// Probability of Buy (0.0..=1.0). Sell otherwise.
    pub buy_ratio: f64,
    /// Limit price band.
    pub price_min: u64,
    pub price_max: u64,
    /// Amount band, whole units.
    pub amount_min: u64,
    pub amount_max: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            num_orders: 1000,
            buy_ratio: 0.5,
            price_min: 95,
            price_max: 105,
            amount_min: 1,
            amount_max: 100,
        }
    }
}

/// Deterministic order stream. Create with [`Generator::new`]; call
/// [`Generator::next_order`] or [`Generator::all_orders`].
pub struct Generator {
    rng: StdRng,
    config: GeneratorConfig,
    next_seq: u64,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            rng,
            config,
            next_seq: 1,
        }
    }

    /// Generates the next order. Ids are `gen-1`, `gen-2`, ... so a stream
    /// never repeats an id.
    pub fn next_order(&mut self) -> Order {
        let id = format!("gen-{}", self.next_seq);
        self.next_seq += 1;
        let side = if self.rng.gen::<f64>() < self.config.buy_ratio {
            Side::Buy
        } else {
            Side::Sell
        };
        let price = self
            .rng
            .gen_range(self.config.price_min..=self.config.price_max);
        let amount = self
            .rng
            .gen_range(self.config.amount_min..=self.config.amount_max)
            .max(1);
        Order::new(id, side, price.max(1), amount)
    }

    /// Returns exactly `n` orders, advancing the generator state.
    pub fn take_orders(&mut self, n: usize) -> Vec<Order> {
        (0..n).map(|_| self.next_order()).collect()
    }

    /// Returns the full stream as defined by `config.num_orders`.
    pub fn all_orders(&mut self) -> Vec<Order> {
        self.take_orders(self.config.num_orders)
    }
}

/// Replays a sequence of orders into the engine. Returns the number of
/// accepted submissions, or the first error.
pub fn replay_into_engine(
    engine: &mut Engine,
    orders: impl IntoIterator<Item = Order>,
) -> Result<usize, EngineError> {
    let mut accepted = 0usize;
    for order in orders {
        engine.submit(order)?;
        accepted += 1;
    }
    Ok(accepted)
}
