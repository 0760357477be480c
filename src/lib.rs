//! # cvrp-tabu
//!
//! Capacitated vehicle routing with a greedy constructor, 1-0 relocation
//! local search and an edge-based tabu search.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Customer, Vehicle, Route, Solution, Instance)
//! - [`distance`] — Travel cost provider trait and dense distance matrix
//! - [`constructive`] — Greedy nearest-feasible-customer construction
//! - [`local_search`] — Intra- and inter-route relocation (steepest descent)
//! - [`tabu`] — Tabu search with decaying forbidden-edge memory
//! - [`evaluation`] — From-scratch solution auditing
//! - [`generator`] — Seeded random instances
//! - [`report`] — Printable and serializable solution summaries
//! - [`pipeline`] — Runs every optimizer on one instance
//!
//! ## Quick start
//!
//! ```
//! use cvrp_tabu::constructive::greedy_construct;
//! use cvrp_tabu::distance::DistanceMatrix;
//! use cvrp_tabu::generator::{GeneratorConfig, InstanceGenerator};
//! use cvrp_tabu::tabu::{TabuConfig, TabuSearch};
//!
//! let instance = InstanceGenerator::new(GeneratorConfig::default()).generate()?;
//! let dm = DistanceMatrix::from_customers(instance.customers());
//!
//! let mut solution = greedy_construct(&instance, &dm)?;
//! let greedy_cost = solution.total_cost();
//! TabuSearch::new(TabuConfig::default()).run_seeded(&mut solution, &instance, &dm)?;
//! assert!(solution.total_cost() <= greedy_cost);
//! # Ok::<(), cvrp_tabu::RoutingError>(())
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod local_search;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod tabu;

pub use error::RoutingError;
