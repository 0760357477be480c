//! Travel cost provider trait.

use crate::error::RoutingError;
use crate::models::Instance;

/// Supplies the cost of travelling between two locations, by node id.
///
/// Implementations must be symmetric (`cost(a, b) == cost(b, a)`),
/// non-negative, and return zero for `a == b`. The relocation deltas of the
/// local search and tabu search rely on these properties. Providers are
/// `Sync` so candidate moves can be evaluated from several threads.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::distance::TravelCost;
///
/// struct Manhattan(Vec<(i32, i32)>);
///
/// impl TravelCost for Manhattan {
///     fn cost(&self, from: usize, to: usize) -> f64 {
///         let (a, b) = (self.0[from], self.0[to]);
///         f64::from((a.0 - b.0).abs() + (a.1 - b.1).abs())
///     }
///     fn num_locations(&self) -> usize {
///         self.0.len()
///     }
/// }
///
/// let m = Manhattan(vec![(0, 0), (2, 3)]);
/// assert_eq!(m.cost(0, 1), 5.0);
/// assert_eq!(m.cost(1, 0), 5.0);
/// ```
pub trait TravelCost: Sync {
    /// Cost of travelling from `from` to `to`.
    fn cost(&self, from: usize, to: usize) -> f64;

    /// Number of locations the provider covers (ids `0..n`).
    fn num_locations(&self) -> usize;
}

/// Fails unless `distances` covers every node of `instance`.
pub(crate) fn ensure_covers<D: TravelCost + ?Sized>(
    instance: &Instance,
    distances: &D,
) -> Result<(), RoutingError> {
    let expected = instance.num_locations();
    let found = distances.num_locations();
    if found < expected {
        return Err(RoutingError::DistanceSizeMismatch { expected, found });
    }
    Ok(())
}
