use super::events::{NoopObserver, TreeEvent, TreeObserver};
use super::tree::{FPNode, FPTree};

impl FPTree {
    pub fn insert_transaction(&mut self, transaction: &[usize]) {
        self.insert_transaction_observed(transaction, &mut NoopObserver);
    }

    /// Insert one filtered, support-ordered transaction, extending the
    /// matching branch or opening a new one where it diverges.
    pub fn insert_transaction_observed(
        &mut self,
        transaction: &[usize],
        observer: &mut dyn TreeObserver,
    ) {
        let mut current_index = self.root_index;

        for &item in transaction {
            if let Some(child_index) = self.find_child(current_index, item) {
                let child = &mut self.nodes[child_index];
                child.count += 1;
                observer.on_event(&TreeEvent::CountIncremented {
                    index: child_index,
                    count: child.count,
                });
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FPNode::new_item(item, current_index));
                self.nodes[current_index].children.push(new_index);
                self.header_table.entry(item).or_default().push(new_index);
                observer.on_event(&TreeEvent::NodeCreated {
                    index: new_index,
                    item,
                    parent: current_index,
                });
                current_index = new_index;
            }
            *self.item_occurrences.entry(item).or_insert(0) += 1;
        }

        observer.on_event(&TreeEvent::TransactionInserted {
            ordinal: self.transactions_inserted,
        });
        self.transactions_inserted += 1;
    }

    pub fn find_child(&self, parent: usize, item: usize) -> Option<usize> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].item == Some(item))
    }

    /// Indices of every node carrying `item`, in creation order.
    pub fn nodes_for(&self, item: usize) -> &[usize] {
        self.header_table.get(&item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of the counts of every node carrying `item`.
    pub fn item_support(&self, item: usize) -> usize {
        self.nodes_for(item)
            .iter()
            .map(|&idx| self.nodes[idx].count)
            .sum()
    }

    /// Conditional pattern base of `item`: the root-to-parent prefix of each
    /// of its nodes with that node's count. Nodes hanging directly off the
    /// root have an empty prefix and are skipped.
    pub fn get_prefix_paths(&self, item: usize) -> Vec<(Vec<usize>, usize)> {
        self.nodes_for(item)
            .iter()
            .filter_map(|&idx| {
                let mut path = Vec::new();
                let mut current = self.nodes[idx].parent;

                while let Some(i) = current {
                    if let Some(item) = self.nodes[i].item {
                        path.push(item);
                    }
                    current = self.nodes[i].parent;
                }

                path.reverse();
                (!path.is_empty()).then_some((path, self.nodes[idx].count))
            })
            .collect()
    }

    /// `(parent, child)` index pairs in child creation order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(idx, node)| node.parent.map(|parent| (parent, idx)))
    }
}
