use super::*;
use ndarray::Array2;

const SCENARIO: [&str; 10] = [
    "ab", "bcd", "acde", "ade", "abc", "abcd", "a", "abc", "abd", "bce",
];

fn scenario_miner() -> FrequentItemMiner {
    FrequentItemMiner::new(SCENARIO, MinerConfig::new(0.2)).unwrap()
}

fn labels(itemsets: &[Itemset]) -> Vec<String> {
    itemsets.iter().map(Itemset::label).collect()
}

#[test]
fn test_round_support_half_even() {
    assert_eq!(builder::round_support(7, 10), 70);
    assert_eq!(builder::round_support(1, 3), 33);
    assert_eq!(builder::round_support(2, 3), 67);
    // 1/8 = 0.125 and 3/8 = 0.375 sit exactly on the tie
    assert_eq!(builder::round_support(1, 8), 12);
    assert_eq!(builder::round_support(3, 8), 38);
    assert_eq!(builder::round_support(0, 0), 0);
}

#[test]
fn test_round_support_follows_float_quotient() {
    // 0.025, 0.225 and 0.675 are stored slightly above the tie
    assert_eq!(builder::round_support(1, 40), 3);
    assert_eq!(builder::round_support(9, 40), 23);
    assert_eq!(builder::round_support(27, 40), 68);
    assert_eq!(builder::round_support(31, 40), 78);
}

#[test]
fn test_support_rounding_keeps_item_at_threshold() {
    let mut transactions = vec!["a"; 9];
    transactions.extend(vec!["b"; 31]);

    let miner = FrequentItemMiner::new(transactions, MinerConfig::new(0.23)).unwrap();
    let original = miner.original_frequency();
    assert_eq!(original["a"], 0.23);
    assert_eq!(original["b"], 0.78);
    assert_eq!(miner.frequency().get("a"), Some(&0.23));
    assert_eq!(miner.frequent_items(), vec!["a", "b"]);
}

#[test]
fn test_min_count() {
    assert_eq!(builder::min_count(0.2, 10), 2);
    assert_eq!(builder::min_count(0.25, 10), 3);
    assert_eq!(builder::min_count(1.0, 4), 4);
}

#[test]
fn test_config_validation() {
    assert!(MinerConfig::new(0.2).validate().is_ok());
    assert!(MinerConfig::new(1.0).validate().is_ok());
    assert_eq!(
        MinerConfig::new(0.0).validate(),
        Err(MiningError::InvalidMinSupport(0.0))
    );
    assert!(MinerConfig::new(1.5).validate().is_err());
    assert!(MinerConfig::new(-0.1).validate().is_err());
    assert!(MinerConfig::new(f64::NAN).validate().is_err());

    let err = FrequentItemMiner::new(SCENARIO, MinerConfig::new(0.0)).unwrap_err();
    assert_eq!(err, MiningError::InvalidMinSupport(0.0));
}

#[test]
fn test_filter_orders_by_descending_support() {
    let transactions: Vec<Transaction> = SCENARIO.iter().map(|&t| t.into()).collect();
    let dataset = filter_transactions(&transactions, 0.2);

    let supports: Vec<u32> = dataset.support_hundredths.clone();
    // ids follow first appearance: a, b, c, d, e
    assert_eq!(supports, vec![80, 70, 60, 50, 30]);
    assert_eq!(dataset.frequent_items, vec![0, 1, 2, 3, 4]);
    assert_eq!(dataset.transactions[3], vec![0, 3, 4]); // "ade"
    assert_eq!(dataset.transactions[9], vec![1, 2, 4]); // "bce"
}

#[test]
fn test_filter_is_stable_for_equal_support() {
    // x and y both reach 0.67, z reaches 1.0
    let transactions: Vec<Transaction> = ["yxz", "xz", "yz"].iter().map(|&t| t.into()).collect();
    let dataset = filter_transactions(&transactions, 0.5);
    let vocab = &dataset.vocabulary;

    let first: Vec<&str> = dataset.transactions[0].iter().map(|&i| vocab.label_of(i)).collect();
    assert_eq!(first, vec!["z", "y", "x"]);
}

#[test]
fn test_filter_drops_infrequent_items() {
    let miner = FrequentItemMiner::new(["abx", "ab", "ay", "b"], MinerConfig::new(0.5)).unwrap();

    let original = miner.original_frequency();
    let frequency = miner.frequency();
    assert_eq!(original.len(), 4);
    assert_eq!(original["x"], 0.25);
    assert_eq!(frequency.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    for (item, support) in &frequency {
        assert!(original.contains_key(item));
        assert!(*support >= 0.5);
    }
    assert_eq!(miner.filtered_transactions()[2], vec!["a"]);
}

#[test]
fn test_repeated_item_counts_once() {
    let miner = FrequentItemMiner::new(["aab", "b"], MinerConfig::new(0.5)).unwrap();
    assert_eq!(miner.original_frequency()["a"], 0.5);
    assert_eq!(miner.filtered_transactions()[0], vec!["b", "a"]);
}

#[test]
fn test_fp_tree_insert() {
    let mut tree = FPTree::new();

    tree.insert_transaction(&[1, 2, 3]);
    assert_eq!(tree.len(), 3);
    assert!(tree.find_child(tree.root_index, 1).is_some());
    assert_eq!(tree.nodes_for(2).len(), 1);

    // Shares the 1 -> 2 prefix with the first transaction
    tree.insert_transaction(&[1, 2, 4]);
    assert_eq!(tree.len(), 4);

    let node1 = tree.find_child(tree.root_index, 1).unwrap();
    let node2 = tree.find_child(node1, 2).unwrap();
    assert_eq!(tree.nodes[node1].count, 2);
    assert_eq!(tree.nodes[node2].count, 2);
    assert_eq!(tree.nodes[node2].children.len(), 2);
}

#[test]
fn test_fp_tree_identical_transactions_share_branch() {
    let mut tree = FPTree::new();
    tree.insert_transaction(&[3, 1, 2]);
    let before: Vec<usize> = tree.nodes.iter().map(|n| n.count).collect();

    tree.insert_transaction(&[3, 1, 2]);
    assert_eq!(tree.len(), 3);
    for (idx, node) in tree.nodes.iter().enumerate().skip(1) {
        assert_eq!(node.count, before[idx] + 1);
    }
}

#[test]
fn test_fp_tree_children_keep_creation_order() {
    let mut tree = FPTree::new();
    tree.insert_transaction(&[5]);
    tree.insert_transaction(&[2]);
    tree.insert_transaction(&[9]);

    let items: Vec<Option<usize>> = tree.root().children.iter().map(|&c| tree.nodes[c].item).collect();
    assert_eq!(items, vec![Some(5), Some(2), Some(9)]);
    assert_eq!(tree.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_fp_tree_empty_transaction() {
    let mut tree = FPTree::new();
    tree.insert_transaction(&[]);
    assert!(tree.is_empty());
    assert_eq!(tree.transactions_inserted(), 1);
}

#[test]
fn test_fp_tree_prefix_paths() {
    let mut tree = FPTree::new();

    // root -> 1 -> 2 -> 3
    //             \-> 4
    // root -> 3
    tree.insert_transaction(&[1, 2, 3]);
    tree.insert_transaction(&[1, 2, 4]);
    tree.insert_transaction(&[3]);

    // The root-level 3 has no prefix and contributes nothing
    let paths = tree.get_prefix_paths(3);
    assert_eq!(paths, vec![(vec![1, 2], 1)]);
    assert_eq!(tree.item_support(3), 2);

    assert_eq!(tree.get_prefix_paths(4), vec![(vec![1, 2], 1)]);
    assert!(tree.get_prefix_paths(1).is_empty());
    assert!(tree.get_prefix_paths(42).is_empty());
}

#[test]
fn test_tree_observer_events() {
    let mut events: Vec<TreeEvent> = Vec::new();
    let mut tree = FPTree::new();
    tree.insert_transaction_observed(&[7, 8], &mut events);
    tree.insert_transaction_observed(&[7], &mut events);

    assert_eq!(
        events,
        vec![
            TreeEvent::NodeCreated { index: 1, item: 7, parent: 0 },
            TreeEvent::NodeCreated { index: 2, item: 8, parent: 1 },
            TreeEvent::TransactionInserted { ordinal: 0 },
            TreeEvent::CountIncremented { index: 1, count: 2 },
            TreeEvent::TransactionInserted { ordinal: 1 },
        ]
    );
}

#[test]
fn test_combination_generation() {
    let mut seen = Vec::new();
    combinations::for_each_combination(4, 2, |c| seen.push(c.to_vec()));
    assert_eq!(
        seen,
        vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
        ]
    );

    let mut empty = Vec::new();
    combinations::for_each_combination(3, 0, |c| empty.push(c.to_vec()));
    assert_eq!(empty, vec![Vec::<usize>::new()]);

    let mut none = 0;
    combinations::for_each_combination(2, 3, |_| none += 1);
    assert_eq!(none, 0);

    assert_eq!(combinations::binomial(5, 2), 10);
    assert_eq!(combinations::binomial(5, 0), 1);
    assert_eq!(combinations::binomial(2, 3), 0);
}

#[test]
fn test_candidates_from_paths() {
    let paths = vec![(vec![1, 2], 2), (vec![1], 1), (vec![3, 2], 1)];

    // 1: 3, 2: 3, 3: 1
    assert_eq!(mining::candidates_from_paths(&paths, 2), vec![1, 2]);
    assert_eq!(mining::candidates_from_paths(&paths, 4), Vec::<usize>::new());
    assert_eq!(mining::candidates_from_paths(&[], 1), Vec::<usize>::new());
}

#[test]
fn test_count_containing_checks_membership() {
    let transactions = vec![vec![0, 1, 2], vec![0, 2], vec![1]];
    assert_eq!(mining::count_containing(&transactions, &[0, 2]), 2);
    assert_eq!(mining::count_containing(&transactions, &[2, 0]), 2);
    assert_eq!(mining::count_containing(&transactions, &[1, 2]), 1);
    assert_eq!(mining::count_containing(&transactions, &[]), 3);
}

#[test]
fn test_scenario_tree_shape() {
    let miner = scenario_miner();
    let tree = miner.tree();

    assert_eq!(miner.min_count(), 2);
    assert_eq!(tree.len(), 14);
    assert_eq!(miner.node_label(0).unwrap(), "Null");
    assert_eq!(miner.node_label(1).unwrap(), "a : 8");
    assert_eq!(miner.node_label(3).unwrap(), "b : 2");
    assert!(miner.node_label(15).is_none());

    let counts = miner.singleton_counts();
    assert_eq!(counts["{a}"], 8);
    assert_eq!(counts["{b}"], 7);
    assert_eq!(counts["{e}"], 3);
}

#[test]
fn test_scenario_paths_and_candidates() {
    let miner = scenario_miner();

    let paths = miner.paths_for("d").unwrap();
    let as_tuples: Vec<(Vec<&str>, usize)> = paths
        .iter()
        .map(|p| (p.items.iter().map(String::as_str).collect(), p.weight))
        .collect();
    assert_eq!(
        as_tuples,
        vec![
            (vec!["b", "c"], 1),
            (vec!["a", "c"], 1),
            (vec!["a"], 1),
            (vec!["a", "b", "c"], 1),
            (vec!["a", "b"], 1),
        ]
    );

    assert_eq!(miner.candidates_for("d").unwrap(), vec!["b", "c", "a"]);
    assert_eq!(miner.candidates_for("e").unwrap(), vec!["a", "c", "d"]);
    assert!(miner.candidates_for("a").unwrap().is_empty());
}

#[test]
fn test_scenario_frequent_itemsets() {
    let miner = scenario_miner();

    let d = miner.frequent_itemsets_for("d").unwrap();
    assert_eq!(labels(&d), vec!["d", "bd", "cd", "ad", "bcd", "abd", "acd"]);
    assert_eq!(d[0].support_count, 5);
    assert_eq!(d[3].items, vec!["a", "d"]);
    assert_eq!(d[3].support_count, 4);

    let e = miner.frequent_itemsets_for("e").unwrap();
    assert_eq!(labels(&e), vec!["e", "ae", "ce", "de", "ade"]);

    assert_eq!(labels(&miner.frequent_itemsets_for("a").unwrap()), vec!["a"]);
    assert_eq!(labels(&miner.frequent_itemsets_for("b").unwrap()), vec!["b", "ab"]);
    assert_eq!(
        labels(&miner.frequent_itemsets_for("c").unwrap()),
        vec!["c", "bc", "ac", "abc"]
    );
}

#[test]
fn test_unknown_item_is_an_error() {
    let miner = FrequentItemMiner::new(["abx", "ab", "ay", "b"], MinerConfig::new(0.5)).unwrap();

    assert_eq!(miner.paths_for("x"), Err(MiningError::UnknownItem("x".to_string())));
    assert!(miner.candidates_for("q").is_err());
    assert!(miner.frequent_itemsets_for("y").is_err());
}

#[test]
fn test_everything_below_threshold() {
    let miner = FrequentItemMiner::new(["ab", "cd", "ef"], MinerConfig::new(0.5)).unwrap();

    assert_eq!(miner.original_frequency().len(), 6);
    assert!(miner.frequency().is_empty());
    assert!(miner.tree().is_empty());
    assert_eq!(miner.tree().nodes.len(), 1);

    let report = miner.mine();
    assert!(report.frequent_itemsets.is_empty());
    assert_eq!(report.total_itemsets(), 0);
}

#[test]
fn test_empty_input() {
    let miner = FrequentItemMiner::new(Vec::<&str>::new(), MinerConfig::default()).unwrap();
    assert_eq!(miner.num_transactions(), 0);
    assert!(miner.frequency().is_empty());
    assert!(miner.mine().paths.is_empty());
}

#[test]
fn test_singleton_kept_when_rounding_lifts_support() {
    // 195 / 1000 rounds to 0.20 but falls short of ceil(0.2 * 1000) = 200
    let mut transactions: Vec<&str> = vec!["a"; 195];
    transactions.extend(std::iter::repeat("b").take(805));
    let miner = FrequentItemMiner::new(transactions, MinerConfig::new(0.2)).unwrap();

    assert_eq!(miner.frequency()["a"], 0.2);
    let itemsets = miner.frequent_itemsets_for("a").unwrap();
    assert_eq!(labels(&itemsets), vec!["a"]);
    assert_eq!(itemsets[0].support_count, 195);
}

#[test]
fn test_mine_matches_per_item_queries() {
    let miner = scenario_miner();
    let report = miner.mine();

    assert_eq!(report.frequent_itemsets.keys().collect::<Vec<_>>(), vec!["a", "b", "c", "d", "e"]);
    for item in miner.frequent_items() {
        assert_eq!(report.paths[item], miner.paths_for(item).unwrap());
        assert_eq!(report.candidates[item], miner.candidates_for(item).unwrap());
        assert_eq!(report.frequent_itemsets[item], miner.frequent_itemsets_for(item).unwrap());
    }
    assert_eq!(report.frequent_labels("b"), vec!["b", "ab"]);
    assert!(report.frequent_labels("z").is_empty());
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = scenario_miner().mine();
    let parallel = FrequentItemMiner::new(SCENARIO, MinerConfig::new(0.2).with_parallel(true))
        .unwrap()
        .mine();

    assert_eq!(sequential.paths, parallel.paths);
    assert_eq!(sequential.candidates, parallel.candidates);
    assert_eq!(sequential.frequent_itemsets, parallel.frequent_itemsets);
}

#[test]
fn test_multi_character_labels() {
    let transactions = vec![
        vec!["milk", "bread"],
        vec!["milk", "bread", "eggs"],
        vec!["bread", "eggs"],
        vec!["milk", "eggs"],
    ];
    let miner = FrequentItemMiner::new(transactions, MinerConfig::new(0.5)).unwrap();

    let itemsets = miner.frequent_itemsets_for("bread").unwrap();
    assert_eq!(itemsets[0].items, vec!["bread"]);
    assert_eq!(itemsets[1].items, vec!["milk", "bread"]);
    assert_eq!(itemsets[1].to_string(), "{milk, bread}");
}

#[test]
fn test_from_dense() {
    let matrix = Array2::from_shape_vec(
        (4, 3),
        vec![
            1, 1, 0, // x, y
            1, 1, 1, // x, y, z
            1, 0, 1, // x, z
            0, 1, 1, // y, z
        ],
    )
    .unwrap();

    let miner = FrequentItemMiner::from_dense(matrix.view(), &["x", "y", "z"], MinerConfig::new(0.5)).unwrap();
    assert_eq!(miner.frequency().len(), 3);
    assert_eq!(labels(&miner.frequent_itemsets_for("y").unwrap()), vec!["y", "xy"]);

    let err = FrequentItemMiner::from_dense(matrix.view(), &["x", "y"], MinerConfig::new(0.5)).unwrap_err();
    assert_eq!(err, MiningError::ShapeMismatch { columns: 3, labels: 2 });
}

#[test]
fn test_singleton_counts_follow_insertion_order() {
    // y outranks x, so it enters the tree first
    let miner = FrequentItemMiner::new(["xy", "y"], MinerConfig::new(0.5)).unwrap();
    let counts = miner.singleton_counts();

    assert_eq!(counts.keys().collect::<Vec<_>>(), vec!["{y}", "{x}"]);
    assert_eq!(counts["{y}"], 2);
    assert_eq!(counts["{x}"], 1);
}

#[test]
fn test_vocabulary_label_lookup() {
    let miner = scenario_miner();
    let vocabulary = miner.vocabulary();

    assert_eq!(vocabulary.label(0), Some("a"));
    assert_eq!(vocabulary.label(vocabulary.id("e").unwrap()), Some("e"));
    assert_eq!(vocabulary.label(99), None);
}
