pub mod builder;
pub mod combinations;
pub mod config;
pub mod error;
pub mod miner;
pub mod mining;
pub mod storage;
pub mod transaction;
pub mod tree;

#[cfg(test)]
mod tests;

pub use builder::{build_fp_tree, filter_transactions, FilteredDataset};
pub use config::MinerConfig;
pub use error::MiningError;
pub use miner::FrequentItemMiner;
pub use storage::{
    ConditionalPatternBase, Itemset, MinerStats, MiningReport, PrefixPath, SupportMap,
};
pub use transaction::{transactions_from_dense, ItemVocabulary, Transaction};
pub use tree::{FPNode, FPTree, NoopObserver, TreeEvent, TreeObserver};
