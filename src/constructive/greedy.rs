//! Greedy nearest-feasible-customer construction.
//!
//! Fills vehicles one at a time: from the vehicle's current location, always
//! visit the nearest unrouted customer that still fits. When nothing fits,
//! return to the depot and open the next vehicle.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.

use tracing::{debug, info, instrument, warn};

use crate::distance::{ensure_covers, TravelCost};
use crate::error::RoutingError;
use crate::models::{Instance, Solution, DEPOT};

/// Builds a feasible solution with the nearest-feasible-customer heuristic.
///
/// Customers are scanned in ascending id; among those that fit the current
/// vehicle the nearest one is taken, ties going to the lowest id. Every
/// traversed edge, depot legs included, is added to the solution cost.
///
/// # Errors
///
/// - [`RoutingError::InfeasibleInstance`] when the fleet runs out while
///   customers remain unrouted; carries their ids.
/// - [`RoutingError::DistanceSizeMismatch`] when `distances` does not cover
///   every node of the instance.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::constructive::greedy_construct;
///
/// let instance = Instance::new(
///     vec![
///         Customer::depot(0, 0),
///         Customer::new(1, 1, 0, 10),
///         Customer::new(2, 2, 0, 10),
///         Customer::new(3, 3, 0, 10),
///     ],
///     2,
///     20,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_customers(instance.customers());
///
/// let solution = greedy_construct(&instance, &dm).unwrap();
/// assert_eq!(solution.route_sequences(), vec![vec![0, 1, 2, 0], vec![0, 3, 0]]);
/// assert_eq!(solution.total_cost(), 10.0);
/// ```
#[instrument(skip_all, fields(customers = instance.num_customers(), vehicles = instance.num_vehicles()))]
pub fn greedy_construct<D: TravelCost + ?Sized>(
    instance: &Instance,
    distances: &D,
) -> Result<Solution, RoutingError> {
    ensure_covers(instance, distances)?;
    let n = instance.num_locations();

    let mut solution = Solution::new(&instance.vehicles());
    let mut routed = vec![false; n];
    routed[DEPOT] = true;
    let mut remaining = instance.num_customers();
    let mut vehicle_idx = 0;

    while remaining > 0 {
        let Some(route) = solution.routes_mut().get_mut(vehicle_idx) else {
            return Err(infeasible(&routed));
        };
        if route.is_empty() {
            route.push(DEPOT, 0)?;
        }

        let current = route.current_location();
        let mut best: Option<(usize, f64)> = None;
        for id in 1..n {
            if routed[id] || !route.fits(instance.demand(id)) {
                continue;
            }
            let d = distances.cost(current, id);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((id, d));
            }
        }

        match best {
            Some((next, d)) => {
                route.push(next, instance.demand(next))?;
                routed[next] = true;
                remaining -= 1;
                solution.add_cost(d);
            }
            None => {
                if vehicle_idx + 1 >= instance.num_vehicles() {
                    return Err(infeasible(&routed));
                }
                if route.has_customers() {
                    let back = distances.cost(current, DEPOT);
                    route.close();
                    solution.add_cost(back);
                } else {
                    // an empty vehicle fits none of the remaining customers
                    route.clear();
                }
                debug!(vehicle = vehicle_idx, "vehicle full, opening next");
                vehicle_idx += 1;
            }
        }
    }

    if let Some(route) = solution.routes_mut().get_mut(vehicle_idx) {
        if route.has_customers() {
            let back = distances.cost(route.current_location(), DEPOT);
            route.close();
            solution.add_cost(back);
        }
    }

    info!(
        cost = solution.total_cost(),
        used = solution.num_used_routes(),
        "greedy construction complete"
    );
    Ok(solution)
}

fn infeasible(routed: &[bool]) -> RoutingError {
    let unrouted: Vec<usize> = routed
        .iter()
        .enumerate()
        .filter(|&(_, &r)| !r)
        .map(|(id, _)| id)
        .collect();
    warn!(?unrouted, "customers do not fit in any vehicle");
    RoutingError::InfeasibleInstance { unrouted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::Customer;

    fn line_instance(demands: &[i32], vehicles: usize, capacity: i32) -> (Instance, DistanceMatrix) {
        let mut customers = vec![Customer::depot(0, 0)];
        for (k, &d) in demands.iter().enumerate() {
            customers.push(Customer::new(k + 1, (k + 1) as i32, 0, d));
        }
        let inst = Instance::new(customers, vehicles, capacity).expect("valid");
        let dm = DistanceMatrix::from_customers(inst.customers());
        (inst, dm)
    }

    #[test]
    fn test_greedy_single_route() {
        let (inst, dm) = line_instance(&[10, 10, 10], 1, 100);
        let sol = greedy_construct(&inst, &dm).expect("feasible");
        assert_eq!(sol.route_sequences(), vec![vec![0, 1, 2, 3, 0]]);
        // 1 + 1 + 1 + 3
        assert!((sol.total_cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_greedy_fills_first_vehicle_before_opening_next() {
        let (inst, dm) = line_instance(&[4, 4, 4, 4, 4], 3, 10);
        let sol = greedy_construct(&inst, &dm).expect("feasible");
        let routes = sol.routes();
        assert_eq!(routes[0].nodes(), &[0, 1, 2, 0]);
        assert_eq!(routes[0].load(), 8);
        assert_eq!(routes[1].nodes(), &[0, 3, 4, 0]);
        assert_eq!(routes[2].nodes(), &[0, 5, 0]);
        assert!((sol.total_cost() - sol.recompute_cost(&dm)).abs() < 1e-10);
    }

    #[test]
    fn test_greedy_two_vehicles_insufficient() {
        // 5 x 4 = 20 units, 2 x 10 capacity but only 2 fit per vehicle
        let (inst, dm) = line_instance(&[4, 4, 4, 4, 4], 2, 10);
        let err = greedy_construct(&inst, &dm).expect_err("infeasible");
        assert_eq!(err, RoutingError::InfeasibleInstance { unrouted: vec![5] });
    }

    #[test]
    fn test_greedy_tie_breaks_on_lowest_id() {
        let customers = vec![
            Customer::depot(0, 0),
            Customer::new(1, 0, 3, 1),
            Customer::new(2, 3, 0, 1),
        ];
        let inst = Instance::new(customers, 1, 10).expect("valid");
        let dm = DistanceMatrix::from_customers(inst.customers());
        let sol = greedy_construct(&inst, &dm).expect("feasible");
        assert_eq!(sol.routes()[0].nodes(), &[0, 1, 2, 0]);
    }

    #[test]
    fn test_greedy_chooses_nearest() {
        let customers = vec![
            Customer::depot(0, 0),
            Customer::new(1, 10, 0, 5),
            Customer::new(2, 1, 0, 5),
        ];
        let inst = Instance::new(customers, 1, 100).expect("valid");
        let dm = DistanceMatrix::from_customers(inst.customers());
        let sol = greedy_construct(&inst, &dm).expect("feasible");
        assert_eq!(sol.routes()[0].customer_ids(), vec![2, 1]);
    }

    #[test]
    fn test_greedy_skips_customer_that_does_not_fit() {
        // customer 2 is nearest after 1 but too heavy for the remaining room
        let (inst, dm) = line_instance(&[6, 6, 3], 2, 10);
        let sol = greedy_construct(&inst, &dm).expect("feasible");
        assert_eq!(sol.routes()[0].nodes(), &[0, 1, 3, 0]);
        assert_eq!(sol.routes()[1].nodes(), &[0, 2, 0]);
    }

    #[test]
    fn test_greedy_no_customers() {
        let (inst, dm) = line_instance(&[], 2, 10);
        let sol = greedy_construct(&inst, &dm).expect("feasible");
        assert_eq!(sol.total_cost(), 0.0);
        assert!(sol.route_sequences().is_empty());
    }

    #[test]
    fn test_greedy_no_vehicles() {
        let (inst, dm) = line_instance(&[1], 0, 10);
        let err = greedy_construct(&inst, &dm).expect_err("no fleet");
        assert_eq!(err, RoutingError::InfeasibleInstance { unrouted: vec![1] });
    }

    #[test]
    fn test_greedy_oversized_customer() {
        let (inst, dm) = line_instance(&[2, 50], 3, 10);
        let err = greedy_construct(&inst, &dm).expect_err("too heavy");
        assert_eq!(err, RoutingError::InfeasibleInstance { unrouted: vec![2] });
    }

    #[test]
    fn test_greedy_distance_size_mismatch() {
        let (inst, _) = line_instance(&[1, 1], 1, 10);
        let dm = DistanceMatrix::new(2);
        assert_eq!(
            greedy_construct(&inst, &dm).expect_err("too small"),
            RoutingError::DistanceSizeMismatch {
                expected: 3,
                found: 2
            }
        );
    }
}
