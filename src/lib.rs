//! Frequent itemset mining over a prefix-sharing FP-tree.
//!
//! Transactions are frequency-filtered and inserted into a prefix tree. For
//! every surviving item the tree yields a conditional pattern base, whose
//! heavy items become candidates. The item is then combined with every
//! subset of its candidates, and each combination is counted against the
//! filtered transactions.
//!
//! ```
//! use fptree::{FrequentItemMiner, MinerConfig};
//!
//! let miner = FrequentItemMiner::new(["ab", "abc", "bc", "ac"], MinerConfig::new(0.5)).unwrap();
//! let labels: Vec<String> = miner
//!     .frequent_itemsets_for("b")
//!     .unwrap()
//!     .iter()
//!     .map(|itemset| itemset.label())
//!     .collect();
//! assert_eq!(labels, vec!["b", "ab"]);
//! ```

pub mod fp;

pub use fp::{
    ConditionalPatternBase, FPTree, FrequentItemMiner, Itemset, MinerConfig, MiningError,
    MiningReport, PrefixPath, SupportMap, Transaction, TreeEvent, TreeObserver,
};
