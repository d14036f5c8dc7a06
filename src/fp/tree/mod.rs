// Tree module - prefix tree data structures, insertion and path extraction

mod events;
mod tree;
mod tree_ops;

pub use events::{NoopObserver, TreeEvent, TreeObserver};
pub use tree::{FPNode, FPTree};
