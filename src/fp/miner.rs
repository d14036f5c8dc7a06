use indexmap::IndexMap;
use ndarray::ArrayView2;
use tracing::{debug, info};

use super::builder::{build_fp_tree, filter_transactions, min_count, FilteredDataset};
use super::config::MinerConfig;
use super::error::MiningError;
use super::mining::{self, candidates_from_paths, mine_items};
use super::storage::{
    ConditionalPatternBase, ItemMining, Itemset, MinerStats, MiningReport, PrefixPath, SupportMap,
};
use super::transaction::{transactions_from_dense, ItemVocabulary, Transaction};
use super::tree::{FPTree, NoopObserver, TreeObserver};

/// Frequency-filters a dataset, builds its prefix tree, and answers
/// per-item mining queries against the finished tree.
///
/// Everything is computed at construction; queries only read.
#[derive(Debug, Clone)]
pub struct FrequentItemMiner {
    config: MinerConfig,
    dataset: FilteredDataset,
    fp_tree: FPTree,
    min_count: usize,
}

impl FrequentItemMiner {
    /// Filter `transactions` at `config.min_support` and build the tree.
    ///
    /// Support is the fraction of transactions containing an item, so a
    /// label repeated within one transaction counts once and only its first
    /// occurrence is kept.
    pub fn new<I, T>(transactions: I, config: MinerConfig) -> Result<Self, MiningError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Transaction>,
    {
        Self::with_observer(transactions, config, &mut NoopObserver)
    }

    /// Like [`new`](Self::new), reporting every tree mutation to `observer`.
    pub fn with_observer<I, T>(
        transactions: I,
        config: MinerConfig,
        observer: &mut dyn TreeObserver,
    ) -> Result<Self, MiningError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Transaction>,
    {
        config.validate()?;

        let transactions: Vec<Transaction> = transactions.into_iter().map(Into::into).collect();
        let dataset = filter_transactions(&transactions, config.min_support);
        let fp_tree = build_fp_tree(&dataset, observer);
        let min_count = min_count(config.min_support, dataset.num_transactions);

        debug!(
            min_support = config.min_support,
            min_count = min_count,
            tree_nodes = fp_tree.len(),
            "miner ready"
        );

        Ok(Self {
            config,
            dataset,
            fp_tree,
            min_count,
        })
    }

    /// Build from a one-hot matrix whose columns are named by `labels`.
    pub fn from_dense<S: AsRef<str>>(
        matrix: ArrayView2<i32>,
        labels: &[S],
        config: MinerConfig,
    ) -> Result<Self, MiningError> {
        let transactions = transactions_from_dense(matrix, labels)?;
        Self::new(transactions, config)
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    pub fn tree(&self) -> &FPTree {
        &self.fp_tree
    }

    pub fn vocabulary(&self) -> &ItemVocabulary {
        &self.dataset.vocabulary
    }

    pub fn num_transactions(&self) -> usize {
        self.dataset.num_transactions
    }

    /// Absolute threshold: `ceil(min_support * num_transactions)`.
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    /// Support of every distinct input item.
    pub fn original_frequency(&self) -> SupportMap {
        (0..self.dataset.vocabulary.len())
            .map(|item| self.support_entry(item))
            .collect()
    }

    /// Support of the items that survived filtering.
    pub fn frequency(&self) -> SupportMap {
        self.dataset
            .frequent_items
            .iter()
            .map(|&item| self.support_entry(item))
            .collect()
    }

    /// Frequent item labels, in first-seen order.
    pub fn frequent_items(&self) -> Vec<&str> {
        self.dataset
            .frequent_items
            .iter()
            .map(|&item| self.dataset.vocabulary.label_of(item))
            .collect()
    }

    /// `"{x}"` -> number of filtered transactions containing `x`, counted
    /// while the tree was built and ordered by first insertion.
    pub fn singleton_counts(&self) -> IndexMap<String, usize> {
        self.fp_tree
            .item_occurrences
            .iter()
            .map(|(&item, &count)| {
                (format!("{{{}}}", self.dataset.vocabulary.label_of(item)), count)
            })
            .collect()
    }

    /// Filtered transactions as labels, in support order.
    pub fn filtered_transactions(&self) -> Vec<Vec<&str>> {
        self.dataset
            .transactions
            .iter()
            .map(|transaction| {
                transaction
                    .iter()
                    .map(|&item| self.dataset.vocabulary.label_of(item))
                    .collect()
            })
            .collect()
    }

    pub fn paths_for(&self, item: &str) -> Result<ConditionalPatternBase, MiningError> {
        let id = self.frequent_id(item)?;
        Ok(self.label_paths(&self.fp_tree.get_prefix_paths(id)))
    }

    pub fn candidates_for(&self, item: &str) -> Result<Vec<String>, MiningError> {
        let id = self.frequent_id(item)?;
        let paths = self.fp_tree.get_prefix_paths(id);
        let candidates = candidates_from_paths(&paths, self.min_count);
        Ok(self.dataset.vocabulary.labels_of(&candidates))
    }

    pub fn frequent_itemsets_for(&self, item: &str) -> Result<Vec<Itemset>, MiningError> {
        let id = self.frequent_id(item)?;
        let mined = mining::mine_item(&self.fp_tree, &self.dataset, id, self.min_count);
        Ok(self.label_itemsets(&mined))
    }

    /// Mine every frequent item and collect the results for reporting.
    pub fn mine(&self) -> MiningReport {
        let mined = mine_items(
            &self.fp_tree,
            &self.dataset,
            self.min_count,
            self.config.parallel,
        );

        let mut report = MiningReport {
            num_transactions: self.dataset.num_transactions,
            min_support: self.config.min_support,
            min_count: self.min_count,
            original_frequency: self.original_frequency(),
            frequency: self.frequency(),
            singleton_counts: self.singleton_counts(),
            paths: IndexMap::with_capacity(mined.len()),
            candidates: IndexMap::with_capacity(mined.len()),
            frequent_itemsets: IndexMap::with_capacity(mined.len()),
        };

        for item_mining in &mined {
            let label = self.dataset.vocabulary.label_of(item_mining.item).to_string();
            report
                .paths
                .insert(label.clone(), self.label_paths(&item_mining.paths));
            report.candidates.insert(
                label.clone(),
                self.dataset.vocabulary.labels_of(&item_mining.candidates),
            );
            report
                .frequent_itemsets
                .insert(label, self.label_itemsets(item_mining));
        }

        info!(
            items = mined.len(),
            itemsets = report.total_itemsets(),
            parallel = self.config.parallel,
            "mining complete"
        );

        report
    }

    /// `"item : count"` for an item node, `"Null"` for the root.
    pub fn node_label(&self, index: usize) -> Option<String> {
        let node = self.fp_tree.nodes.get(index)?;
        Some(match node.item {
            Some(item) => format!("{} : {}", self.dataset.vocabulary.label_of(item), node.count),
            None => "Null".to_string(),
        })
    }

    pub fn stats(&self) -> MinerStats {
        MinerStats {
            total_transactions: self.dataset.num_transactions,
            unique_items: self.dataset.vocabulary.len(),
            frequent_items: self.dataset.frequent_items.len(),
            tree_nodes: self.fp_tree.len(),
        }
    }

    fn frequent_id(&self, item: &str) -> Result<usize, MiningError> {
        self.dataset
            .vocabulary
            .id(item)
            .filter(|&id| self.dataset.is_frequent(id))
            .ok_or_else(|| MiningError::UnknownItem(item.to_string()))
    }

    fn support_entry(&self, item: usize) -> (String, f64) {
        (
            self.dataset.vocabulary.label_of(item).to_string(),
            self.dataset.support(item),
        )
    }

    fn label_paths(&self, paths: &[(Vec<usize>, usize)]) -> ConditionalPatternBase {
        paths
            .iter()
            .map(|(path, weight)| PrefixPath {
                items: self.dataset.vocabulary.labels_of(path),
                weight: *weight,
            })
            .collect()
    }

    fn label_itemsets(&self, mined: &ItemMining) -> Vec<Itemset> {
        mined
            .itemsets
            .iter()
            .map(|(members, count)| Itemset {
                items: self.dataset.vocabulary.labels_of(members),
                support_count: *count,
            })
            .collect()
    }
}
