//! Printable and serializable solution summaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Solution;

/// Node sequence driven by one vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRoute {
    /// Vehicle index.
    pub vehicle_id: usize,
    /// Node ids from depot to depot.
    pub nodes: Vec<usize>,
}

/// Snapshot of a solution for printing or export.
///
/// Only vehicles that left the depot are listed.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::constructive::greedy_construct;
/// use cvrp_tabu::report::SolutionReport;
///
/// let instance = Instance::new(
///     vec![Customer::depot(0, 0), Customer::new(1, 3, 0, 5), Customer::new(2, 0, 4, 5)],
///     2,
///     5,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_customers(instance.customers());
/// let solution = greedy_construct(&instance, &dm).unwrap();
///
/// let report = SolutionReport::from_solution("Greedy Solution", &solution);
/// let text = report.to_string();
/// assert!(text.contains("Vehicle 0:0->1->0"));
/// assert!(text.contains("Vehicle 1:0->2->0"));
/// assert!(text.contains("Solution Cost 14.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    /// Heading printed above the routes.
    pub label: String,
    /// Routes of the vehicles in use.
    pub routes: Vec<VehicleRoute>,
    /// Total travel cost.
    pub total_cost: f64,
    /// Cost history recorded by the optimizers.
    pub history: Vec<f64>,
}

impl SolutionReport {
    /// Captures `solution` under `label`.
    pub fn from_solution(label: impl Into<String>, solution: &Solution) -> Self {
        let routes = solution
            .routes()
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.is_empty())
            .map(|(vehicle_id, r)| VehicleRoute {
                vehicle_id,
                nodes: r.nodes().to_vec(),
            })
            .collect();
        Self {
            label: label.into(),
            routes,
            total_cost: solution.total_cost(),
            history: solution.history().to_vec(),
        }
    }

    /// Serializes the report as pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(57))?;
        writeln!(f, "{}", self.label)?;
        writeln!(f)?;
        for route in &self.routes {
            write!(f, "Vehicle {}:", route.vehicle_id)?;
            for (k, node) in route.nodes.iter().enumerate() {
                if k > 0 {
                    write!(f, "->")?;
                }
                write!(f, "{node}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "Solution Cost {:?}", self.total_cost)
    }
}
