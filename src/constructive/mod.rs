//! Constructive heuristics for building initial CVRP solutions.
//!
//! - [`greedy_construct`] — Nearest feasible customer, vehicle by vehicle, O(n²)

mod greedy;

pub use greedy::greedy_construct;
