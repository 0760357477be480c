//! Local search configuration and outcome.

use serde::{Deserialize, Serialize};

/// Configuration for the relocation local searches.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default().with_max_iterations(500);
/// assert_eq!(config.max_iterations, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSearchConfig {
    /// Safety bound on outer iterations; not expected to bind.
    pub max_iterations: usize,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1_000_000,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the maximum number of outer iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}

/// Summary of one local search run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementOutcome {
    /// Outer iterations executed, including the final non-improving one.
    pub iterations: usize,
    /// Improving moves applied.
    pub moves: usize,
    /// Cost before the search.
    pub initial_cost: f64,
    /// Cost after the search.
    pub final_cost: f64,
}

impl ImprovementOutcome {
    /// Cost reduction achieved (non-negative).
    pub fn improvement(&self) -> f64 {
        self.initial_cost - self.final_cost
    }
}
