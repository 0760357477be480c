//! Travel costs between locations.
//!
//! Provides the [`TravelCost`] seam used by every optimizer and a dense
//! distance matrix implementing it.

mod matrix;
mod provider;

pub use matrix::{DistanceMatrix, RoundingPolicy};
pub(crate) use provider::ensure_covers;
pub use provider::TravelCost;
