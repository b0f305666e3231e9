//! Configuration for a simulation run.

/// Number of simulated trials used when no batch size is configured.
pub const DEFAULT_BATCH_SIZE: usize = 1_000_000;

/// Configuration for a Monte Carlo roll.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent trials in the batch (at least 1).
    pub batch_size: usize,
    /// RNG seed for reproducible rolls. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Set the number of trials (clamped to at least 1; trial 0 is the roll itself).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the RNG seed for reproducible rolls.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.batch_size, 1_000_000);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = SimConfig::default().with_batch_size(500).with_seed(7);
        assert_eq!(cfg.batch_size, 500);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn batch_size_clamped() {
        let cfg = SimConfig::default().with_batch_size(0);
        assert_eq!(cfg.batch_size, 1);
    }
}
