use tracing::debug;

use super::transaction::{ItemVocabulary, Transaction};
use super::tree::{FPTree, TreeObserver};

/// The dataset after frequency filtering. Item ids index every per-item
/// vector; ids follow first appearance in the raw input.
#[derive(Debug, Clone)]
pub struct FilteredDataset {
    pub vocabulary: ItemVocabulary,
    /// Raw transactions containing each item.
    pub item_counts: Vec<usize>,
    /// Raw support of each item in hundredths (`0.35` is `35`).
    pub support_hundredths: Vec<u32>,
    /// Items meeting `min_support`, in id order.
    pub frequent_items: Vec<usize>,
    /// Surviving items of every transaction, sorted by descending support.
    pub transactions: Vec<Vec<usize>>,
    pub num_transactions: usize,
}

impl FilteredDataset {
    pub fn is_frequent(&self, item: usize) -> bool {
        self.frequent_items.binary_search(&item).is_ok()
    }

    pub fn support(&self, item: usize) -> f64 {
        f64::from(self.support_hundredths[item]) / 100.0
    }

    /// Stable sort by descending support; ties keep their current order.
    pub fn sort_by_support(&self, items: &mut [usize]) {
        items.sort_by(|a, b| {
            self.support_hundredths[*b].cmp(&self.support_hundredths[*a])
        });
    }
}

/// The `f64` quotient `count / total` rounded at two decimals, as hundredths.
///
/// Rounding applies to the binary value of the quotient, so `9 / 40` (stored
/// slightly above 0.225) gives 23. Only exactly representable ties such as
/// 0.125 go half-to-even.
pub fn round_support(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = count as f64 / total as f64;
    format!("{ratio:.2}")
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |hundredths, digit| hundredths * 10 + u32::from(digit - b'0'))
}

/// Minimum number of transactions an itemset must appear in.
pub fn min_count(min_support: f64, num_transactions: usize) -> usize {
    (min_support * num_transactions as f64).ceil() as usize
}

/// Count item support, drop items below `min_support` and reorder each
/// transaction by descending support. An item repeated inside one
/// transaction is kept once, at its first position.
pub fn filter_transactions(transactions: &[Transaction], min_support: f64) -> FilteredDataset {
    let num_transactions = transactions.len();
    let mut vocabulary = ItemVocabulary::new();
    let mut item_counts: Vec<usize> = Vec::new();

    let encoded: Vec<Vec<usize>> = transactions
        .iter()
        .map(|transaction| {
            let mut ids: Vec<usize> = Vec::with_capacity(transaction.len());
            for label in transaction.items() {
                let id = vocabulary.intern(label);
                if ids.contains(&id) {
                    continue;
                }
                if id == item_counts.len() {
                    item_counts.push(0);
                }
                item_counts[id] += 1;
                ids.push(id);
            }
            ids
        })
        .collect();

    let support_hundredths: Vec<u32> = item_counts
        .iter()
        .map(|&count| round_support(count, num_transactions))
        .collect();

    let frequent_items: Vec<usize> = (0..vocabulary.len())
        .filter(|&item| f64::from(support_hundredths[item]) / 100.0 >= min_support)
        .collect();

    let mut dataset = FilteredDataset {
        vocabulary,
        item_counts,
        support_hundredths,
        frequent_items,
        transactions: Vec::with_capacity(num_transactions),
        num_transactions,
    };

    for ids in encoded {
        let mut kept: Vec<usize> = ids
            .into_iter()
            .filter(|&item| dataset.is_frequent(item))
            .collect();
        dataset.sort_by_support(&mut kept);
        dataset.transactions.push(kept);
    }

    debug!(
        transactions = num_transactions,
        distinct_items = dataset.vocabulary.len(),
        frequent_items = dataset.frequent_items.len(),
        "filtered transactions"
    );

    dataset
}

/// Insert every filtered transaction, in input order, into a fresh tree.
pub fn build_fp_tree(dataset: &FilteredDataset, observer: &mut dyn TreeObserver) -> FPTree {
    let mut fp_tree = FPTree::new();

    for transaction in &dataset.transactions {
        fp_tree.insert_transaction_observed(transaction, observer);
    }

    debug!(nodes = fp_tree.len(), "built prefix tree");
    fp_tree
}
