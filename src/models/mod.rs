//! Domain model types for capacitated vehicle routing.
//!
//! Customers with integer coordinates and demands, vehicles with a fixed
//! capacity, depot-anchored routes, and the solution that owns them.

mod customer;
mod instance;
mod route;
mod solution;
mod vehicle;

pub use customer::{Customer, DEPOT};
pub use instance::Instance;
pub use route::{insertion_index, Route};
pub use solution::{Solution, Violation, ViolationType};
pub use vehicle::Vehicle;
