use thiserror::Error;

/// Errors produced while building or querying a [`FrequentItemMiner`](super::FrequentItemMiner).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    #[error("invalid min_support {0}: must be in (0, 1]")]
    InvalidMinSupport(f64),
    #[error("item {0:?} is not frequent at the configured min_support")]
    UnknownItem(String),
    #[error("dense input has {columns} columns but {labels} labels were given")]
    ShapeMismatch { columns: usize, labels: usize },
}
