use serde::Serialize;

/// Structural change emitted while transactions are inserted.
///
/// Renderers rebuild the node/edge picture from this stream without touching
/// the tree itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TreeEvent {
    NodeCreated {
        index: usize,
        item: usize,
        parent: usize,
    },
    CountIncremented {
        index: usize,
        count: usize,
    },
    /// Fired once per transaction, including ones that were empty after filtering.
    TransactionInserted { ordinal: usize },
}

pub trait TreeObserver {
    fn on_event(&mut self, event: &TreeEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TreeObserver for NoopObserver {
    fn on_event(&mut self, _event: &TreeEvent) {}
}

impl TreeObserver for Vec<TreeEvent> {
    fn on_event(&mut self, event: &TreeEvent) {
        self.push(event.clone());
    }
}
