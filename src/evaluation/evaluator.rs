//! Solution auditor that recomputes coverage, load, anchoring and cost.

use crate::distance::TravelCost;
use crate::models::{Instance, Solution, Violation, ViolationType, DEPOT};

/// Checks a solution against its instance from scratch.
///
/// Every check ignores the bookkeeping the optimizers maintain and rebuilds
/// the quantity from the route layout: customer visits, route loads from
/// node demands, depot anchors and the total travel cost.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::constructive::greedy_construct;
/// use cvrp_tabu::evaluation::SolutionAuditor;
///
/// let instance = Instance::new(
///     vec![Customer::depot(0, 0), Customer::new(1, 3, 4, 5), Customer::new(2, 6, 8, 5)],
///     1,
///     10,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_customers(instance.customers());
/// let solution = greedy_construct(&instance, &dm).unwrap();
///
/// let auditor = SolutionAuditor::new(&instance, &dm);
/// assert!(auditor.audit(&solution).is_empty());
/// assert!(auditor.is_feasible(&solution));
/// ```
pub struct SolutionAuditor<'a, D: TravelCost + ?Sized> {
    instance: &'a Instance,
    distances: &'a D,
    tolerance: f64,
}

impl<'a, D: TravelCost + ?Sized> SolutionAuditor<'a, D> {
    /// Creates an auditor with a cost tolerance of `1e-6`.
    pub fn new(instance: &'a Instance, distances: &'a D) -> Self {
        Self {
            instance,
            distances,
            tolerance: 1e-6,
        }
    }

    /// Sets the absolute tolerance used for the cost drift check.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns every violation found, route checks first.
    pub fn audit(&self, solution: &Solution) -> Vec<Violation> {
        let n = self.instance.num_locations();
        let mut visits = vec![0usize; n];
        let mut violations = Vec::new();

        for (idx, route) in solution.routes().iter().enumerate() {
            if route.is_empty() {
                continue;
            }
            let nodes = route.nodes();
            if nodes.len() < 2 || nodes[0] != DEPOT || nodes[nodes.len() - 1] != DEPOT {
                violations.push(Violation::new(ViolationType::MissingDepotAnchor {
                    route_index: idx,
                }));
            }

            let mut load = 0;
            for &node in nodes.iter().filter(|&&node| node != DEPOT) {
                if node >= n {
                    violations.push(Violation::new(ViolationType::UnknownNode {
                        route_index: idx,
                        node,
                    }));
                    continue;
                }
                visits[node] += 1;
                load += self.instance.demand(node);
            }

            if load != route.load() {
                violations.push(Violation::new(ViolationType::LoadMismatch {
                    route_index: idx,
                    tracked: route.load(),
                    actual: load,
                }));
            }
            if load > self.instance.capacity() {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    route_index: idx,
                    load,
                    capacity: self.instance.capacity(),
                }));
            }
        }

        for (customer_id, &count) in visits.iter().enumerate().skip(1) {
            match count {
                1 => {}
                0 => violations.push(Violation::new(ViolationType::CustomerMissing { customer_id })),
                n => violations.push(Violation::new(ViolationType::CustomerDuplicated {
                    customer_id,
                    visits: n,
                })),
            }
        }

        // Unknown nodes would index out of the provider.
        let has_unknown = violations
            .iter()
            .any(|v| matches!(v.kind, ViolationType::UnknownNode { .. }));
        if !has_unknown && self.distances.num_locations() >= n {
            let actual = solution.recompute_cost(self.distances);
            if (actual - solution.total_cost()).abs() > self.tolerance {
                violations.push(Violation::new(ViolationType::CostDrift {
                    tracked: solution.total_cost(),
                    actual,
                }));
            }
        }

        violations
    }

    /// Returns `true` if the audit finds nothing.
    pub fn is_feasible(&self, solution: &Solution) -> bool {
        self.audit(solution).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Customer, Route};

    fn setup() -> (Instance, DistanceMatrix) {
        let customers = vec![
            Customer::depot(0, 0),
            Customer::new(1, 3, 4, 10),
            Customer::new(2, 6, 8, 20),
            Customer::new(3, 0, 10, 15),
        ];
        let inst = Instance::new(customers, 2, 50).expect("valid");
        let dm = DistanceMatrix::from_customers(inst.customers());
        (inst, dm)
    }

    fn route(vehicle_id: usize, capacity: i32, nodes: &[usize], inst: &Instance) -> Route {
        let mut r = Route::new(vehicle_id, capacity);
        for &n in nodes {
            let demand = if n < inst.num_locations() { inst.demand(n) } else { 0 };
            r.push(n, demand).expect("fits");
        }
        r
    }

    fn kinds(violations: Vec<Violation>) -> Vec<ViolationType> {
        violations.into_iter().map(|v| v.kind).collect()
    }

    #[test]
    fn test_audit_clean_solution() {
        let (inst, dm) = setup();
        let sol = Solution::from_routes(
            vec![route(0, 50, &[0, 1, 2, 0], &inst), route(1, 50, &[0, 3, 0], &inst)],
            &dm,
        );
        assert!(SolutionAuditor::new(&inst, &dm).is_feasible(&sol));
    }

    #[test]
    fn test_audit_empty_routes_are_fine() {
        let (inst, dm) = setup();
        let sol = Solution::from_routes(
            vec![route(0, 50, &[0, 1, 2, 3, 0], &inst), Route::new(1, 50)],
            &dm,
        );
        assert!(SolutionAuditor::new(&inst, &dm).audit(&sol).is_empty());
    }

    #[test]
    fn test_audit_capacity_exceeded() {
        let (inst, dm) = setup();
        // route built against a larger vehicle than the instance fleet
        let sol = Solution::from_routes(vec![route(0, 100, &[0, 1, 2, 3, 0], &inst)], &dm);
        // 10 + 20 + 15 = 45 <= 50
        assert!(SolutionAuditor::new(&inst, &dm).audit(&sol).is_empty());

        let small = Instance::new(inst.customers().to_vec(), 1, 25).expect("valid");
        let found = kinds(SolutionAuditor::new(&small, &dm).audit(&sol));
        assert_eq!(
            found,
            vec![ViolationType::CapacityExceeded {
                route_index: 0,
                load: 45,
                capacity: 25,
            }]
        );
    }

    #[test]
    fn test_audit_missing_and_duplicate() {
        let (inst, dm) = setup();
        let sol = Solution::from_routes(
            vec![route(0, 100, &[0, 1, 2, 0], &inst), route(1, 100, &[0, 2, 0], &inst)],
            &dm,
        );
        let found = kinds(SolutionAuditor::new(&inst, &dm).audit(&sol));
        assert!(found.contains(&ViolationType::CustomerDuplicated {
            customer_id: 2,
            visits: 2
        }));
        assert!(found.contains(&ViolationType::CustomerMissing { customer_id: 3 }));
    }

    #[test]
    fn test_audit_missing_depot_anchor() {
        let (inst, dm) = setup();
        // never closed
        let sol = Solution::from_routes(vec![route(0, 50, &[0, 1, 2, 3], &inst)], &dm);
        let found = kinds(SolutionAuditor::new(&inst, &dm).audit(&sol));
        assert_eq!(found, vec![ViolationType::MissingDepotAnchor { route_index: 0 }]);
    }

    #[test]
    fn test_audit_load_mismatch() {
        let (inst, dm) = setup();
        let mut r = Route::new(0, 50);
        r.push(0, 0).expect("depot");
        r.push(1, 1).expect("fits");
        r.push(2, 20).expect("fits");
        r.push(3, 15).expect("fits");
        r.close();
        let sol = Solution::from_routes(vec![r], &dm);
        let found = kinds(SolutionAuditor::new(&inst, &dm).audit(&sol));
        assert_eq!(
            found,
            vec![ViolationType::LoadMismatch {
                route_index: 0,
                tracked: 36,
                actual: 45,
            }]
        );
    }

    #[test]
    fn test_audit_cost_drift() {
        let (inst, dm) = setup();
        let mut sol = Solution::from_routes(vec![route(0, 50, &[0, 1, 2, 3, 0], &inst)], &dm);
        sol.add_cost(0.5);
        let auditor = SolutionAuditor::new(&inst, &dm);
        let found = kinds(auditor.audit(&sol));
        assert_eq!(found.len(), 1);
        assert!(matches!(found[0], ViolationType::CostDrift { .. }));
        assert!(auditor.with_tolerance(1.0).is_feasible(&sol));
    }

    #[test]
    fn test_audit_unknown_node() {
        let (inst, dm) = setup();
        let sol = Solution::from_routes(
            vec![route(0, 50, &[0, 1, 2, 3, 0], &inst), Route::new(1, 50)],
            &dm,
        );
        let mut routes = sol.routes().to_vec();
        routes[1] = route(1, 50, &[0, 9, 0], &inst);
        let mut broken = sol.clone();
        broken.restore(routes, sol.total_cost());
        let found = kinds(SolutionAuditor::new(&inst, &dm).audit(&broken));
        assert_eq!(found, vec![ViolationType::UnknownNode { route_index: 1, node: 9 }]);
    }
}
