//! Inter-route 1-0 relocation by steepest descent.
//!
//! # Algorithm
//!
//! Every iteration evaluates all relocations of a customer to any slot of
//! any route, its own included. Moves into another route are only
//! considered when the customer's demand fits that route's remaining
//! capacity. The most negative delta is applied until none is left.
//!
//! # Complexity
//!
//! O(n²) per iteration where n = number of customers.

use tracing::instrument;

use super::descent::descend;
use super::relocate::Neighborhood;
use super::{ImprovementOutcome, LocalSearchConfig};
use crate::distance::TravelCost;
use crate::error::RoutingError;
use crate::models::{Instance, Solution};

/// Improves the solution by moving single customers within or between
/// routes, never exceeding a vehicle's capacity.
///
/// A route emptied by the search keeps its two depot anchors.
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
/// use cvrp_tabu::local_search::{inter_route_improve, LocalSearchConfig};
///
/// let instance = Instance::new(
///     vec![Customer::depot(0, 0), Customer::new(1, 5, 0, 1), Customer::new(2, 1, 0, 1)],
///     2,
///     10,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_customers(instance.customers());
///
/// let mut routes = Vec::new();
/// for (vehicle, customer) in [(0, 1), (1, 2)] {
///     let mut route = Route::new(vehicle, 10);
///     route.push(0, 0).unwrap();
///     route.push(customer, 1).unwrap();
///     route.close();
///     routes.push(route);
/// }
/// let mut solution = Solution::from_routes(routes, &dm);
/// assert_eq!(solution.total_cost(), 12.0);
///
/// inter_route_improve(&mut solution, &instance, &dm, &LocalSearchConfig::default()).unwrap();
/// assert_eq!(solution.total_cost(), 10.0);
/// ```
#[instrument(skip_all)]
pub fn inter_route_improve<D: TravelCost + ?Sized>(
    solution: &mut Solution,
    instance: &Instance,
    distances: &D,
    config: &LocalSearchConfig,
) -> Result<ImprovementOutcome, RoutingError> {
    descend(solution, instance, distances, Neighborhood::InterRoute, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::local_search::relocate::best_relocation;
    use crate::local_search::IMPROVEMENT_EPSILON;
    use crate::models::{Customer, Route};

    fn line_instance(n: usize, vehicles: usize, capacity: i32) -> (Instance, DistanceMatrix) {
        let mut customers = vec![Customer::depot(0, 0)];
        for k in 1..=n {
            customers.push(Customer::new(k, k as i32, 0, 1));
        }
        let inst = Instance::new(customers, vehicles, capacity).expect("valid");
        let dm = DistanceMatrix::from_customers(inst.customers());
        (inst, dm)
    }

    fn route(vehicle_id: usize, nodes: &[usize], inst: &Instance) -> Route {
        let mut r = Route::new(vehicle_id, inst.capacity());
        for &n in nodes {
            r.push(n, inst.demand(n)).expect("fits");
        }
        r
    }

    #[test]
    fn test_inter_merges_routes() {
        let (inst, dm) = line_instance(4, 2, 10);
        let mut sol = Solution::from_routes(
            vec![route(0, &[0, 1, 4, 0], &inst), route(1, &[0, 2, 3, 0], &inst)],
            &dm,
        );
        assert!((sol.total_cost() - 14.0).abs() < 1e-10);

        let out = inter_route_improve(&mut sol, &inst, &dm, &LocalSearchConfig::default())
            .expect("valid");
        assert_eq!(out.moves, 2);
        assert!((sol.total_cost() - 8.0).abs() < 1e-10);
        assert_eq!(sol.routes()[0].nodes(), &[0, 0]);
        assert_eq!(sol.routes()[0].load(), 0);
        assert_eq!(sol.routes()[1].load(), 4);
        assert!((sol.total_cost() - sol.recompute_cost(&dm)).abs() < 1e-10);
    }

    #[test]
    fn test_inter_respects_capacity() {
        // both routes are full, so only intra moves are possible and none improve
        let (inst, dm) = line_instance(4, 2, 2);
        let mut sol = Solution::from_routes(
            vec![route(0, &[0, 1, 4, 0], &inst), route(1, &[0, 2, 3, 0], &inst)],
            &dm,
        );
        let out = inter_route_improve(&mut sol, &inst, &dm, &LocalSearchConfig::default())
            .expect("valid");
        assert_eq!(out.moves, 0);
        assert!((sol.total_cost() - 14.0).abs() < 1e-10);
        for r in sol.routes() {
            assert!(r.load() <= r.capacity());
        }
    }

    #[test]
    fn test_inter_reaches_local_optimum() {
        let (inst, dm) = line_instance(6, 3, 3);
        let mut sol = Solution::from_routes(
            vec![
                route(0, &[0, 6, 1, 0], &inst),
                route(1, &[0, 2, 5, 0], &inst),
                route(2, &[0, 4, 3, 0], &inst),
            ],
            &dm,
        );
        let before = sol.total_cost();
        inter_route_improve(&mut sol, &inst, &dm, &LocalSearchConfig::default()).expect("valid");
        assert!(sol.total_cost() <= before);
        assert_eq!(sol.num_served(), 6);
        let next = best_relocation(sol.routes(), &inst, &dm, Neighborhood::InterRoute, |_| true);
        assert!(next.is_none_or(|mv| mv.delta >= -IMPROVEMENT_EPSILON));
        for r in sol.routes() {
            assert!(r.load() <= 3);
            assert_eq!(r.nodes().first(), Some(&0));
            assert_eq!(r.nodes().last(), Some(&0));
        }
    }

    #[test]
    fn test_inter_distance_mismatch() {
        let (inst, _) = line_instance(2, 1, 10);
        let dm = DistanceMatrix::new(1);
        let mut sol = Solution::new(&inst.vehicles());
        let err = inter_route_improve(&mut sol, &inst, &dm, &LocalSearchConfig::default())
            .expect_err("too small");
        assert!(matches!(err, RoutingError::DistanceSizeMismatch { .. }));
    }
}
