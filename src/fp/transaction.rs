use std::collections::HashMap;

use ndarray::ArrayView2;

use super::error::MiningError;

/// One basket of item labels, in input order.
///
/// Strings convert character by character, so `"abd"` is the basket
/// `["a", "b", "d"]`. Use the slice/`Vec` conversions for multi-character
/// labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction(pub Vec<String>);

impl Transaction {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn from_chars(s: &str) -> Self {
        Self(s.chars().map(String::from).collect())
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Transaction {
    fn from(s: &str) -> Self {
        Self::from_chars(s)
    }
}

impl From<String> for Transaction {
    fn from(s: String) -> Self {
        Self::from_chars(&s)
    }
}

impl From<Vec<String>> for Transaction {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl From<Vec<&str>> for Transaction {
    fn from(items: Vec<&str>) -> Self {
        Self(items.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Transaction {
    fn from(items: &[&str]) -> Self {
        Self(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Transaction {
    fn from(items: [&str; N]) -> Self {
        Self(items.iter().map(|s| s.to_string()).collect())
    }
}

/// Interns item labels to dense ids in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ItemVocabulary {
    labels: Vec<String>,
    ids: HashMap<String, usize>,
}

impl ItemVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, label: &str) -> usize {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        id
    }

    pub fn id(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Ids handed out by this vocabulary are always in range.
    pub(crate) fn label_of(&self, id: usize) -> &str {
        &self.labels[id]
    }

    pub(crate) fn labels_of(&self, ids: &[usize]) -> Vec<String> {
        ids.iter().map(|&id| self.labels[id].clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Convert a one-hot matrix (rows are transactions, columns are items) into
/// label transactions. Any non-zero cell marks membership.
pub fn transactions_from_dense<S: AsRef<str>>(
    matrix: ArrayView2<i32>,
    labels: &[S],
) -> Result<Vec<Transaction>, MiningError> {
    let num_transactions = matrix.shape()[0];
    let num_items = matrix.shape()[1];

    if labels.len() != num_items {
        return Err(MiningError::ShapeMismatch {
            columns: num_items,
            labels: labels.len(),
        });
    }

    Ok((0..num_transactions)
        .map(|tx_idx| {
            Transaction::new(
                (0..num_items)
                    .filter(|&item| matrix[[tx_idx, item]] != 0)
                    .map(|item| labels[item].as_ref().to_string())
                    .collect(),
            )
        })
        .collect())
}
