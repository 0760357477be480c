//! Tabu search over the relocation neighborhood.
//!
//! [`TabuSearch`] drives the search, [`TabuMemory`] holds the forbidden
//! edges of one run and [`TabuConfig`] sets tenure and iteration budget.

mod config;
mod memory;
mod search;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use search::{TabuOutcome, TabuSearch};
