//! Steepest-descent driver shared by the relocation searches.

use tracing::{debug, info};

use super::relocate::{apply_relocation, best_relocation, Neighborhood};
use super::{ImprovementOutcome, LocalSearchConfig};
use crate::distance::{ensure_covers, TravelCost};
use crate::error::RoutingError;
use crate::models::{Instance, Solution};

/// Deltas above this are treated as non-improving.
pub const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Applies the best improving relocation of `scope` until none is left.
///
/// The cost after every accepted move is appended to the solution history.
pub(crate) fn descend<D: TravelCost + ?Sized>(
    solution: &mut Solution,
    instance: &Instance,
    distances: &D,
    scope: Neighborhood,
    config: &LocalSearchConfig,
) -> Result<ImprovementOutcome, RoutingError> {
    ensure_covers(instance, distances)?;
    let initial_cost = solution.total_cost();
    let mut iterations = 0;
    let mut moves = 0;

    while iterations < config.max_iterations {
        iterations += 1;
        let best = best_relocation(solution.routes(), instance, distances, scope, |_| true);
        let Some(mv) = best.filter(|mv| mv.delta < -IMPROVEMENT_EPSILON) else {
            break;
        };
        debug!(
            node = mv.edges.moving,
            from_route = mv.from_route,
            to_route = mv.to_route,
            delta = mv.delta,
            "relocating"
        );
        apply_relocation(solution, &mv, instance)?;
        solution.record_cost(solution.total_cost());
        moves += 1;
    }

    info!(
        ?scope,
        iterations,
        moves,
        initial_cost,
        final_cost = solution.total_cost(),
        "descent finished"
    );
    Ok(ImprovementOutcome {
        iterations,
        moves,
        initial_cost,
        final_cost: solution.total_cost(),
    })
}
