//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::{Route, Vehicle};
use crate::distance::TravelCost;

/// A broken structural invariant found by an audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Route load exceeds the vehicle capacity.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Sum of the demands on the route.
        load: i32,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// The load tracked by the route differs from the sum of its demands.
    LoadMismatch {
        /// Route index.
        route_index: usize,
        /// Load stored on the route.
        tracked: i32,
        /// Load recomputed from the node demands.
        actual: i32,
    },
    /// A customer is not served by any route.
    CustomerMissing {
        /// Customer ID.
        customer_id: usize,
    },
    /// A customer is visited more than once.
    CustomerDuplicated {
        /// Customer ID.
        customer_id: usize,
        /// Number of visits.
        visits: usize,
    },
    /// A route refers to a node outside the instance.
    UnknownNode {
        /// Route index.
        route_index: usize,
        /// Offending node id.
        node: usize,
    },
    /// A non-empty route does not start and end at the depot.
    MissingDepotAnchor {
        /// Route index.
        route_index: usize,
    },
    /// The maintained total cost drifted from a from-scratch recomputation.
    CostDrift {
        /// Cost held by the solution.
        tracked: f64,
        /// Recomputed cost.
        actual: f64,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A complete (or in-progress) solution to a routing instance.
///
/// Holds one route per vehicle (unused vehicles keep an empty route), the
/// incrementally maintained total cost and the cost history recorded by the
/// optimizers.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Solution, Vehicle};
///
/// let sol = Solution::new(&[Vehicle::new(0, 10), Vehicle::new(1, 10)]);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 0);
/// assert_eq!(sol.total_cost(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
    total_cost: f64,
    history: Vec<f64>,
}

impl Solution {
    /// Creates a solution with an empty route for each vehicle.
    pub fn new(vehicles: &[Vehicle]) -> Self {
        Self {
            routes: vehicles.iter().map(Route::for_vehicle).collect(),
            total_cost: 0.0,
            history: Vec::new(),
        }
    }

    /// Creates a solution from existing routes, computing the cost from
    /// scratch.
    pub fn from_routes<D: TravelCost + ?Sized>(routes: Vec<Route>, distances: &D) -> Self {
        let total_cost = routes.iter().map(|r| r.cost(distances)).sum();
        Self {
            routes,
            total_cost,
            history: Vec::new(),
        }
    }

    /// Returns the routes, one per vehicle.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub(crate) fn routes_mut(&mut self) -> &mut [Route] {
        &mut self.routes
    }

    /// Number of routes (equal to the fleet size).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of routes serving at least one customer.
    pub fn num_used_routes(&self) -> usize {
        self.routes.iter().filter(|r| r.has_customers()).count()
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.customer_ids().len()).sum()
    }

    /// Incrementally maintained total travel cost.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Cost values recorded by the optimizers, oldest first.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Sum of consecutive-node costs recomputed from the route layout.
    pub fn recompute_cost<D: TravelCost + ?Sized>(&self, distances: &D) -> f64 {
        self.routes.iter().map(|r| r.cost(distances)).sum()
    }

    /// Node sequences of every non-empty route, depot to depot.
    pub fn route_sequences(&self) -> Vec<Vec<usize>> {
        self.routes
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| r.nodes().to_vec())
            .collect()
    }

    pub(crate) fn add_cost(&mut self, delta: f64) {
        self.total_cost += delta;
    }

    pub(crate) fn record_cost(&mut self, cost: f64) {
        self.history.push(cost);
    }

    /// Replaces the layout and cost, keeping the history.
    pub(crate) fn restore(&mut self, routes: Vec<Route>, total_cost: f64) {
        self.routes = routes;
        self.total_cost = total_cost;
    }
}
