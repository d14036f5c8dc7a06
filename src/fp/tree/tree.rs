use std::collections::HashMap;

use indexmap::IndexMap;

/// A node of the prefix tree. Its position in [`FPTree::nodes`] is its
/// creation index; the root is always index 0.
#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<usize>,
    pub count: usize,
    pub parent: Option<usize>,
    /// Child indices in creation order.
    pub children: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    /// Item -> indices of every node carrying it, in creation order.
    pub header_table: HashMap<usize, Vec<usize>>,
    /// Item -> number of inserted transactions containing it, in the order
    /// items were first inserted.
    pub item_occurrences: IndexMap<usize, usize>,
    pub root_index: usize,
    pub(crate) transactions_inserted: usize,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn new_item(item: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count: 1,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            item_occurrences: IndexMap::new(),
            root_index: 0,
            transactions_inserted: 0,
        }
    }

    /// Number of item nodes, root excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn root(&self) -> &FPNode {
        &self.nodes[self.root_index]
    }

    pub fn transactions_inserted(&self) -> usize {
        self.transactions_inserted
    }
}
