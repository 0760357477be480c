//! Tabu search over the 1-0 relocation neighborhood.
//!
//! # Algorithm
//!
//! Each iteration scans every intra- and inter-route relocation, discards
//! candidates that would recreate a forbidden edge and applies the best
//! remaining one even if it worsens the solution. The three edges the move
//! breaks are then forbidden for `horizon + U(0, max_jitter)` iterations,
//! which keeps the search from immediately undoing itself. The best layout
//! seen during the run is restored at the end.
//!
//! # Complexity
//!
//! O(iterations · n²) where n = number of customers.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing*
//! 1(3), 190-206.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{TabuConfig, TabuMemory};
use crate::distance::{ensure_covers, TravelCost};
use crate::error::RoutingError;
use crate::local_search::relocate::{apply_relocation, best_relocation};
use crate::local_search::{Neighborhood, Relocation};
use crate::models::{Instance, Solution};

/// Summary of one tabu search run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabuOutcome {
    /// Iterations executed.
    pub iterations: usize,
    /// Moves applied, improving or not.
    pub moves: usize,
    /// Iterations in which no candidate was admissible.
    pub skipped_iterations: usize,
    /// Cost of the input solution.
    pub initial_cost: f64,
    /// Cost of the best layout found, which the solution now holds.
    pub best_cost: f64,
    /// 1-based iteration that produced the best layout; `None` if the input
    /// was never beaten.
    pub best_iteration: Option<usize>,
}

impl TabuOutcome {
    /// Cost reduction relative to the input (non-negative).
    pub fn improvement(&self) -> f64 {
        self.initial_cost - self.best_cost
    }
}

/// Tabu search engine.
///
/// The tabu memory and the best-known snapshot live only for the duration
/// of one [`run`](TabuSearch::run); an engine can be reused across
/// solutions.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::constructive::greedy_construct;
/// use cvrp_tabu::tabu::{TabuConfig, TabuSearch};
///
/// let instance = Instance::new(
///     vec![
///         Customer::depot(0, 0),
///         Customer::new(1, 4, 0, 3),
///         Customer::new(2, 0, 5, 3),
///         Customer::new(3, 3, 1, 3),
///         Customer::new(4, -2, 2, 3),
///     ],
///     2,
///     6,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_customers(instance.customers());
/// let mut solution = greedy_construct(&instance, &dm).unwrap();
/// let greedy_cost = solution.total_cost();
///
/// let engine = TabuSearch::new(TabuConfig::default().with_max_iterations(50));
/// let outcome = engine.run_seeded(&mut solution, &instance, &dm).unwrap();
/// assert!(outcome.best_cost <= greedy_cost);
/// assert_eq!(solution.total_cost(), outcome.best_cost);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabuSearch {
    config: TabuConfig,
}

impl TabuSearch {
    /// Creates an engine with the given configuration.
    pub fn new(config: TabuConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Runs the search on `solution`, drawing tenure jitter from `rng`.
    ///
    /// On return `solution` holds the best layout found (the input layout if
    /// nothing beat it) and its history holds the pre-move cost of every
    /// applied move.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::DistanceSizeMismatch`] when `distances` does not
    ///   cover the instance.
    /// - [`RoutingError::CapacityExceeded`] if a selected move would
    ///   overflow its destination, which the candidate filter rules out.
    #[instrument(skip_all, fields(max_iterations = self.config.max_iterations))]
    pub fn run<D, R>(
        &self,
        solution: &mut Solution,
        instance: &Instance,
        distances: &D,
        rng: &mut R,
    ) -> Result<TabuOutcome, RoutingError>
    where
        D: TravelCost + ?Sized,
        R: Rng,
    {
        ensure_covers(instance, distances)?;

        let mut memory = TabuMemory::new();
        let initial_cost = solution.total_cost();
        let mut best_routes = solution.routes().to_vec();
        let mut best_cost = initial_cost;
        let mut best_iteration = None;
        let mut moves = 0;
        let mut skipped = 0;

        for iteration in 1..=self.config.max_iterations {
            let cost = solution.total_cost();
            let aspiration = self.config.aspiration.then_some(best_cost - cost);
            let selected = best_relocation(
                solution.routes(),
                instance,
                distances,
                Neighborhood::InterRoute,
                |mv| is_admissible(mv, &memory, aspiration),
            );
            memory.decay();

            let Some(mv) = selected else {
                skipped += 1;
                debug!(iteration, tabu = memory.len(), "no admissible move, skipping");
                continue;
            };

            apply_relocation(solution, &mv, instance)?;
            solution.record_cost(cost);
            self.forbid_removed(&mut memory, &mv, rng);
            moves += 1;
            debug!(
                iteration,
                node = mv.edges.moving,
                delta = mv.delta,
                cost = solution.total_cost(),
                "applied move"
            );

            if solution.total_cost() < best_cost {
                best_cost = solution.total_cost();
                best_routes = solution.routes().to_vec();
                best_iteration = Some(iteration);
            }
        }

        solution.restore(best_routes, best_cost);
        info!(
            initial_cost,
            best_cost,
            moves,
            skipped,
            "tabu search finished"
        );
        Ok(TabuOutcome {
            iterations: self.config.max_iterations,
            moves,
            skipped_iterations: skipped,
            initial_cost,
            best_cost,
            best_iteration,
        })
    }

    /// Runs the search with a [`ChaCha8Rng`] seeded from the configuration.
    pub fn run_seeded<D: TravelCost + ?Sized>(
        &self,
        solution: &mut Solution,
        instance: &Instance,
        distances: &D,
    ) -> Result<TabuOutcome, RoutingError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.run(solution, instance, distances, &mut rng)
    }

    /// Forbids the edges `mv` broke, each for `horizon + U(0, max_jitter)`
    /// iterations drawn independently.
    fn forbid_removed<R: Rng>(&self, memory: &mut TabuMemory, mv: &Relocation, rng: &mut R) {
        for edge in mv.edges.removed() {
            let tenure = self.config.horizon + rng.random_range(0..=self.config.max_jitter);
            memory.forbid(edge, tenure);
        }
    }
}

/// A move is admissible when none of the edges it creates is forbidden.
///
/// With aspiration enabled, `aspiration` holds `best_cost - current_cost`,
/// and a forbidden move still passes when its delta drops the cost strictly
/// below the best-known cost.
fn is_admissible(mv: &Relocation, memory: &TabuMemory, aspiration: Option<f64>) -> bool {
    if !mv.edges.created().iter().any(|&e| memory.is_tabu(e)) {
        return true;
    }
    aspiration.is_some_and(|gap| mv.delta < gap)
}
