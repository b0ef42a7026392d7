//! # clob-engine
//!
//! Continuous limit-order matching engine for a single tradable instrument:
//! order book, price-time priority matching, and a strictly ordered stream of
//! [`Action`]s delivered to a caller-supplied [`ActionSink`].
//!
//! ## Entry point
//!
//! Use [`Engine`] as the single entry point: create with [`Engine::new`],
//! then [`Engine::submit`], [`Engine::cancel`], and [`Engine::close`]. The
//! engine is a single-writer sequential state machine; every operation runs
//! to completion on the calling thread and emits its actions synchronously,
//! in generation order, before returning.
//!
//! ## Example
//!
//! ```rust
//! use clob_engine::{Action, CollectSink, Engine, Order, Side};
//!
//! let sink = CollectSink::new();
//! let mut engine = Engine::new(Box::new(sink.clone()));
//!
//! engine.submit(Order::new("maker", Side::Sell, 100, 10)).unwrap();
//! engine.submit(Order::new("taker", Side::Buy, 100, 10)).unwrap();
//! engine.close().unwrap();
//!
//! let actions = sink.actions();
//! assert!(matches!(actions[2], Action::Filled { .. }));
//! assert!(matches!(actions[3], Action::StreamEnded));
//! ```
//!
//! ## Lower-level API
//!
//! [`OrderBook`] and [`match_order`] are exposed for callers that manage
//! placement and the action stream themselves.

pub mod action;
pub mod engine;
pub mod error;
pub mod gen;
pub mod matching;
pub mod order_book;
pub mod sink;
pub mod types;

pub use action::Action;
pub use engine::Engine;
pub use error::EngineError;
pub use gen::{replay_into_engine, Generator, GeneratorConfig};
pub use matching::match_order;
pub use order_book::{Fill, OrderBook};
pub use sink::{ActionSink, ChannelSink, CollectSink, JsonLineSink};
pub use types::{Order, OrderId, Side};
