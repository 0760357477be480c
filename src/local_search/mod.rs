//! Relocation local search.
//!
//! - [`intra_route_improve`]: moves a customer within its own route
//! - [`inter_route_improve`]: moves a customer within or across routes
//!
//! Both apply the single best 1-0 relocation per iteration (steepest
//! descent) and stop at a local optimum. The move evaluation in
//! [`relocate`] is shared with the tabu search.

mod config;
mod descent;
mod inter_route;
mod intra_route;
pub mod relocate;

pub use config::{ImprovementOutcome, LocalSearchConfig};
pub use descent::IMPROVEMENT_EPSILON;
pub use inter_route::inter_route_improve;
pub use intra_route::intra_route_improve;
pub use relocate::{Edge, MoveEdges, Neighborhood, Relocation};
