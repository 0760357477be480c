//! End-to-end driver comparing the optimizers on one instance.
//!
//! Builds the greedy solution, then improves a fresh greedy solution with
//! each optimizer in turn so the results are directly comparable.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::constructive::greedy_construct;
use crate::distance::{DistanceMatrix, RoundingPolicy, TravelCost};
use crate::error::RoutingError;
use crate::local_search::{inter_route_improve, intra_route_improve, LocalSearchConfig};
use crate::models::Instance;
use crate::report::SolutionReport;
use crate::tabu::{TabuConfig, TabuSearch};

/// Optimizer applied after greedy construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Greedy construction only.
    Greedy,
    /// Greedy followed by intra-route relocation.
    IntraRoute,
    /// Greedy followed by inter-route relocation.
    InterRoute,
    /// Greedy followed by tabu search.
    Tabu,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 4] = [Stage::Greedy, Stage::IntraRoute, Stage::InterRoute, Stage::Tabu];

    /// Heading used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Greedy => "Greedy Solution",
            Stage::IntraRoute => "Solution after Intra-Route Heuristic Neighborhood Search",
            Stage::InterRoute => "Solution after Inter-Route Heuristic Neighborhood Search",
            Stage::Tabu => "Solution After Tabu Search",
        }
    }
}

/// Configuration for [`Pipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Settings for both relocation searches.
    pub local_search: LocalSearchConfig,
    /// Settings for the tabu search; its seed drives the tenure jitter.
    pub tabu: TabuConfig,
    /// Rounding applied when the distance matrix is built from coordinates.
    pub rounding: RoundingPolicy,
}

impl PipelineConfig {
    /// Sets the local search configuration.
    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }

    /// Sets the tabu configuration.
    pub fn with_tabu(mut self, config: TabuConfig) -> Self {
        self.tabu = config;
        self
    }

    /// Sets the rounding policy.
    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }
}

/// Runs every [`Stage`] on one instance.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::generator::{GeneratorConfig, InstanceGenerator};
/// use cvrp_tabu::pipeline::{Pipeline, PipelineConfig};
///
/// let instance = InstanceGenerator::new(GeneratorConfig::default().with_customers(15))
///     .generate()
///     .unwrap();
/// let reports = Pipeline::new(PipelineConfig::default()).run(&instance).unwrap();
///
/// assert_eq!(reports.len(), 4);
/// let greedy = reports[0].total_cost;
/// assert!(reports.iter().all(|r| r.total_cost <= greedy));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates a pipeline.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Builds the distance matrix from the instance coordinates and runs
    /// every stage.
    pub fn run(&self, instance: &Instance) -> Result<Vec<SolutionReport>, RoutingError> {
        let distances = DistanceMatrix::from_customers_with(instance.customers(), self.config.rounding);
        self.run_with(instance, &distances)
    }

    /// Runs every stage against an explicit cost provider.
    ///
    /// # Errors
    ///
    /// Propagates the first error of any stage, typically
    /// [`RoutingError::InfeasibleInstance`] from the constructor.
    #[instrument(skip_all, fields(customers = instance.num_customers()))]
    pub fn run_with<D: TravelCost + ?Sized>(
        &self,
        instance: &Instance,
        distances: &D,
    ) -> Result<Vec<SolutionReport>, RoutingError> {
        Stage::ALL
            .iter()
            .map(|&stage| self.run_stage(stage, instance, distances))
            .collect()
    }

    /// Runs a single stage from a fresh greedy solution.
    pub fn run_stage<D: TravelCost + ?Sized>(
        &self,
        stage: Stage,
        instance: &Instance,
        distances: &D,
    ) -> Result<SolutionReport, RoutingError> {
        let mut solution = greedy_construct(instance, distances)?;
        match stage {
            Stage::Greedy => {}
            Stage::IntraRoute => {
                intra_route_improve(&mut solution, instance, distances, &self.config.local_search)?;
            }
            Stage::InterRoute => {
                inter_route_improve(&mut solution, instance, distances, &self.config.local_search)?;
            }
            Stage::Tabu => {
                TabuSearch::new(self.config.tabu).run_seeded(&mut solution, instance, distances)?;
            }
        }
        info!(?stage, cost = solution.total_cost(), "stage finished");
        Ok(SolutionReport::from_solution(stage.label(), &solution))
    }
}
