//! Tabu search configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`TabuSearch`](super::TabuSearch).
///
/// A removed edge stays forbidden for `horizon + U(0, max_jitter)`
/// iterations, the jitter drawn independently per edge.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(500)
///     .with_horizon(7)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.horizon, 7);
/// assert_eq!(config.max_jitter, 4);
/// assert!(!config.aspiration);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabuConfig {
    /// Base tenure of a forbidden edge.
    pub horizon: usize,
    /// Largest random extension added to `horizon` (inclusive).
    pub max_jitter: usize,
    /// Number of iterations to run.
    pub max_iterations: usize,
    /// Seed used by [`TabuSearch::run_seeded`](super::TabuSearch::run_seeded).
    pub seed: u64,
    /// Admit a forbidden move when it would beat the best-known cost.
    pub aspiration: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            horizon: 10,
            max_jitter: 4,
            max_iterations: 200,
            seed: 42,
            aspiration: false,
        }
    }
}

impl TabuConfig {
    /// Sets the base tenure.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the maximum random tenure extension.
    pub fn with_max_jitter(mut self, max_jitter: usize) -> Self {
        self.max_jitter = max_jitter;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the seed for [`TabuSearch::run_seeded`](super::TabuSearch::run_seeded).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, enabled: bool) -> Self {
        self.aspiration = enabled;
        self
    }
}
