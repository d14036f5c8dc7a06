use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Item label -> support fraction, in first-seen item order.
pub type SupportMap = IndexMap<String, f64>;

/// One entry of a conditional pattern base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixPath {
    /// Ancestor labels from the root down, target item excluded.
    pub items: Vec<String>,
    /// Count of the node the prefix leads to.
    pub weight: usize,
}

pub type ConditionalPatternBase = Vec<PrefixPath>;

/// A frequent itemset with its members ordered by descending support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itemset {
    pub items: Vec<String>,
    /// Filtered transactions containing every member.
    pub support_count: usize,
}

impl Itemset {
    /// Members concatenated without a separator (`["a", "d"]` is `"ad"`).
    /// Only unambiguous when every label is a single character.
    pub fn label(&self) -> String {
        self.items.concat()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|member| member == item)
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.items.join(", "))
    }
}

/// Id-level mining output for a single item.
#[derive(Debug, Clone, Default)]
pub(crate) struct ItemMining {
    pub item: usize,
    pub paths: Vec<(Vec<usize>, usize)>,
    pub candidates: Vec<usize>,
    pub itemsets: Vec<(Vec<usize>, usize)>,
}

/// Everything a reporting consumer needs, keyed by item label in
/// `frequency` order.
#[derive(Debug, Clone, Serialize)]
pub struct MiningReport {
    pub num_transactions: usize,
    pub min_support: f64,
    pub min_count: usize,
    pub original_frequency: SupportMap,
    pub frequency: SupportMap,
    /// `"{x}"` -> filtered transactions containing `x`.
    pub singleton_counts: IndexMap<String, usize>,
    pub paths: IndexMap<String, ConditionalPatternBase>,
    pub candidates: IndexMap<String, Vec<String>>,
    pub frequent_itemsets: IndexMap<String, Vec<Itemset>>,
}

impl MiningReport {
    /// Concatenated labels of the frequent itemsets found for `item`.
    pub fn frequent_labels(&self, item: &str) -> Vec<String> {
        self.frequent_itemsets
            .get(item)
            .map(|itemsets| itemsets.iter().map(Itemset::label).collect())
            .unwrap_or_default()
    }

    pub fn total_itemsets(&self) -> usize {
        self.frequent_itemsets.values().map(Vec::len).sum()
    }
}

/// Sizes of the intermediate structures, for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinerStats {
    pub total_transactions: usize,
    pub unique_items: usize,
    pub frequent_items: usize,
    pub tree_nodes: usize,
}
