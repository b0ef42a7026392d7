//! Action sinks: where the engine's event stream goes.
//!
//! The engine writes every [`Action`] synchronously to one [`ActionSink`],
//! passed in at construction. `emit` may block (e.g. a bounded channel whose
//! consumer is slow); the engine's throughput is then bounded by the
//! consumer's drain rate. Sinks must accept every action and must not call
//! back into the engine.

use crate::action::Action;
use std::sync::mpsc::SyncSender;
use std::sync::{Arc, Mutex};

/// Destination for the engine's ordered action stream.
pub trait ActionSink: Send {
    fn emit(&self, action: &Action);
}

/// Forwards actions into a bounded channel. `emit` blocks while the channel
/// is full, coupling the engine to the receiver's drain rate. A disconnected
/// receiver drops further actions rather than failing the engine.
pub struct ChannelSink {
    tx: SyncSender<Action>,
}

impl ChannelSink {
    pub fn new(tx: SyncSender<Action>) -> Self {
        Self { tx }
    }
}

impl ActionSink for ChannelSink {
    fn emit(&self, action: &Action) {
        let _ = self.tx.send(action.clone());
    }
}

/// Writes one JSON line per action to stdout.
pub struct JsonLineSink;

impl ActionSink for JsonLineSink {
    fn emit(&self, action: &Action) {
        if let Ok(line) = serde_json::to_string(action) {
            println!("{}", line);
        }
    }
}

/// In-memory sink that stores actions for inspection in tests.
/// Clone shares the same backing buffer.
#[derive(Clone, Default)]
pub struct CollectSink {
    actions: Arc<Mutex<Vec<Action>>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in emission order.
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().expect("lock").clone()
    }

    pub fn clear(&self) {
        self.actions.lock().expect("lock").clear();
    }

    pub fn len(&self) -> usize {
        self.actions.lock().expect("lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ActionSink for CollectSink {
    fn emit(&self, action: &Action) {
        self.actions.lock().expect("lock").push(action.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderId;
    use std::sync::mpsc;

    #[test]
    fn collect_sink_preserves_emission_order() {
        let sink = CollectSink::new();
        sink.emit(&Action::CancelRequested {
            order_id: OrderId::new("a"),
        });
        sink.emit(&Action::Cancelled {
            order_id: OrderId::new("a"),
        });
        let actions = sink.actions();
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[0], Action::CancelRequested { .. }));
        assert!(matches!(actions[1], Action::Cancelled { .. }));
    }

    #[test]
    fn collect_sink_clone_shares_buffer() {
        let sink = CollectSink::new();
        let view = sink.clone();
        sink.emit(&Action::StreamEnded);
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn channel_sink_delivers_in_order() {
        let (tx, rx) = mpsc::sync_channel(4);
        let sink = ChannelSink::new(tx);
        sink.emit(&Action::CancelRequested {
            order_id: OrderId::new("x"),
        });
        sink.emit(&Action::StreamEnded);
        assert!(matches!(
            rx.recv().unwrap(),
            Action::CancelRequested { .. }
        ));
        assert!(matches!(rx.recv().unwrap(), Action::StreamEnded));
    }

    #[test]
    fn channel_sink_ignores_disconnected_receiver() {
        let (tx, rx) = mpsc::sync_channel(1);
        drop(rx);
        let sink = ChannelSink::new(tx);
        // must not panic
        sink.emit(&Action::StreamEnded);
    }
}
