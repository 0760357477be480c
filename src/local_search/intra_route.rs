//! Intra-route 1-0 relocation by steepest descent.
//!
//! # Algorithm
//!
//! Every iteration evaluates all relocations of a customer to another slot
//! of its own route and applies the one with the most negative delta.
//! Terminates when the best delta is no longer negative.
//!
//! # Complexity
//!
//! O(Σ r²) per iteration where r = length of each route.

use tracing::instrument;

use super::descent::descend;
use super::relocate::Neighborhood;
use super::{ImprovementOutcome, LocalSearchConfig};
use crate::distance::TravelCost;
use crate::error::RoutingError;
use crate::models::{Instance, Solution};

/// Improves each route in place by moving single customers within it.
///
/// Loads never change, so feasibility is preserved trivially. The cost after
/// each applied move is appended to the solution history.
///
/// # Errors
///
/// [`RoutingError::DistanceSizeMismatch`] when `distances` does not cover
/// the instance.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance, Route, Solution};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::local_search::{intra_route_improve, LocalSearchConfig};
///
/// let instance = Instance::new(
///     vec![
///         Customer::depot(0, 0),
///         Customer::new(1, 1, 0, 1),
///         Customer::new(2, 2, 0, 1),
///         Customer::new(3, 3, 0, 1),
///     ],
///     1,
///     10,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_customers(instance.customers());
///
/// let mut route = Route::new(0, 10);
/// for node in [0, 2, 1, 3] {
///     route.push(node, instance.demand(node)).unwrap();
/// }
/// route.close();
/// let mut solution = Solution::from_routes(vec![route], &dm);
///
/// let outcome = intra_route_improve(&mut solution, &instance, &dm, &LocalSearchConfig::default()).unwrap();
/// assert_eq!(outcome.final_cost, 6.0);
/// assert_eq!(solution.routes()[0].nodes(), &[0, 1, 2, 3, 0]);
/// ```
#[instrument(skip_all)]
pub fn intra_route_improve<D: TravelCost + ?Sized>(
    solution: &mut Solution,
    instance: &Instance,
    distances: &D,
    config: &LocalSearchConfig,
) -> Result<ImprovementOutcome, RoutingError> {
    descend(solution, instance, distances, Neighborhood::IntraRoute, config)
}
