use super::error::MiningError;

/// Mining parameters shared by the library and the CLI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinerConfig {
    /// Minimum support as a fraction of all transactions, in `(0, 1]`.
    pub min_support: f64,
    /// Mine items on the rayon pool instead of sequentially.
    pub parallel: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 0.2,
            parallel: false,
        }
    }
}

impl MinerConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rejects thresholds outside `(0, 1]`, NaN included.
    pub fn validate(&self) -> Result<(), MiningError> {
        if self.min_support > 0.0 && self.min_support <= 1.0 {
            Ok(())
        } else {
            Err(MiningError::InvalidMinSupport(self.min_support))
        }
    }
}
