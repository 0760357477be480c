//! Error type shared by construction and the optimizers.

use thiserror::Error;

/// Failures surfaced by the routing engine.
///
/// Construction failures and structural breaches are reported here; running
/// out of improving moves is normal termination and never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Some customers cannot be placed in any remaining vehicle.
    #[error(
        "customers {unrouted:?} do not fit in any vehicle; \
         the problem cannot be resolved under these constraints"
    )]
    InfeasibleInstance {
        /// Customer ids still unrouted, ascending.
        unrouted: Vec<usize>,
    },

    /// Adding a customer would push a route over its capacity.
    #[error("vehicle {vehicle_id} cannot take demand {demand}: load {load} of capacity {capacity}")]
    CapacityExceeded {
        /// Vehicle owning the route.
        vehicle_id: usize,
        /// Load before the rejected insertion.
        load: i32,
        /// Demand that was rejected.
        demand: i32,
        /// Route capacity.
        capacity: i32,
    },

    /// The instance description is malformed.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// The distance provider does not cover every node of the instance.
    #[error("distance provider covers {found} locations, instance needs {expected}")]
    DistanceSizeMismatch {
        /// Locations required by the instance (depot included).
        expected: usize,
        /// Locations the provider knows about.
        found: usize,
    },
}
