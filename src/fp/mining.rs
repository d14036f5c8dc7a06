use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::trace;

use super::builder::FilteredDataset;
use super::combinations::{binomial, for_each_combination};
use super::storage::ItemMining;
use super::tree::FPTree;

/// Items whose summed prefix weight reaches `min_count`, in the order they
/// first appear in `paths`.
pub fn candidates_from_paths(paths: &[(Vec<usize>, usize)], min_count: usize) -> Vec<usize> {
    let mut weights: IndexMap<usize, usize> = IndexMap::new();

    for (path, weight) in paths {
        for &item in path {
            *weights.entry(item).or_insert(0) += weight;
        }
    }

    weights
        .into_iter()
        .filter_map(|(item, weight)| (weight >= min_count).then_some(item))
        .collect()
}

/// Number of transactions holding every item of `members`.
pub fn count_containing(transactions: &[Vec<usize>], members: &[usize]) -> usize {
    transactions
        .iter()
        .filter(|transaction| members.iter().all(|item| transaction.contains(item)))
        .count()
}

/// Combine `item` with every subset of `candidates`, keeping combinations
/// present in at least `min_count` filtered transactions. Subsets are
/// visited by size, then lexicographically over candidate positions; each
/// surviving itemset is returned sorted by descending support with its
/// transaction count. The singleton `{item}` is always kept.
pub fn frequent_itemsets_for(
    item: usize,
    candidates: &[usize],
    dataset: &FilteredDataset,
    min_count: usize,
) -> Vec<(Vec<usize>, usize)> {
    let mut itemsets = Vec::new();

    for size in 0..=candidates.len() {
        trace!(
            item = item,
            size = size + 1,
            combinations = binomial(candidates.len(), size),
            "enumerating itemsets"
        );

        for_each_combination(candidates.len(), size, |positions| {
            let mut members: Vec<usize> = positions.iter().map(|&pos| candidates[pos]).collect();
            members.push(item);

            let count = count_containing(&dataset.transactions, &members);
            if size == 0 || count >= min_count {
                dataset.sort_by_support(&mut members);
                itemsets.push((members, count));
            }
        });
    }

    itemsets
}

/// Run path extraction, candidate generation and enumeration for one item.
pub(crate) fn mine_item(
    fp_tree: &FPTree,
    dataset: &FilteredDataset,
    item: usize,
    min_count: usize,
) -> ItemMining {
    let paths = fp_tree.get_prefix_paths(item);
    let candidates = candidates_from_paths(&paths, min_count);
    let itemsets = frequent_itemsets_for(item, &candidates, dataset, min_count);

    trace!(
        item = item,
        paths = paths.len(),
        candidates = candidates.len(),
        itemsets = itemsets.len(),
        "mined item"
    );

    ItemMining {
        item,
        paths,
        candidates,
        itemsets,
    }
}

/// Mine every frequent item. Results come back in `frequent_items` order
/// whether or not the work ran on the rayon pool.
pub(crate) fn mine_items(
    fp_tree: &FPTree,
    dataset: &FilteredDataset,
    min_count: usize,
    parallel: bool,
) -> Vec<ItemMining> {
    if parallel {
        dataset
            .frequent_items
            .par_iter()
            .map(|&item| mine_item(fp_tree, dataset, item, min_count))
            .collect()
    } else {
        dataset
            .frequent_items
            .iter()
            .map(|&item| mine_item(fp_tree, dataset, item, min_count))
            .collect()
    }
}
