//! 1-0 relocation move: neighborhood scan, cost delta and application.
//!
//! # Algorithm
//!
//! Removes the customer `m` at position `i` of one route and reinserts it
//! directly after the node `n_j` at position `j` of the same or another
//! route. With `b_i`/`a_i` the neighbours of `m` and `a_j` the successor of
//! `n_j`, all taken from the pre-move layout:
//!
//! ```text
//! delta = d(b_i, a_i) + d(n_j, m) + d(m, a_j) - d(b_i, m) - d(m, a_i) - d(n_j, a_j)
//! ```
//!
//! Candidates are scanned in ascending (from route, i, to route, j) order and
//! the first strict minimum wins, so results are reproducible run to run.
//!
//! # Complexity
//!
//! O(n²) candidates per scan where n = number of customers.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use crate::distance::TravelCost;
use crate::error::RoutingError;
use crate::models::{Instance, Route, Solution};

/// Directed edge between two node ids.
pub type Edge = (usize, usize);

/// Which route pairs a scan may combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// Source and destination are the same route.
    IntraRoute,
    /// Any pair of routes, capacity-checked across routes.
    InterRoute,
}

/// The five nodes touched by a relocation, read from the pre-move layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEdges {
    /// Predecessor of the moving customer.
    pub before: usize,
    /// The moving customer.
    pub moving: usize,
    /// Successor of the moving customer.
    pub after: usize,
    /// Node the customer is inserted behind.
    pub target: usize,
    /// Successor of `target`.
    pub target_next: usize,
}

impl MoveEdges {
    fn read(routes: &[Route], from_route: usize, i: usize, to_route: usize, j: usize) -> Self {
        let from = routes[from_route].nodes();
        let to = routes[to_route].nodes();
        Self {
            before: from[i - 1],
            moving: from[i],
            after: from[i + 1],
            target: to[j],
            target_next: to[j + 1],
        }
    }

    /// Cost change of performing the move.
    pub fn delta<D: TravelCost + ?Sized>(&self, distances: &D) -> f64 {
        distances.cost(self.before, self.after)
            + distances.cost(self.target, self.moving)
            + distances.cost(self.moving, self.target_next)
            - distances.cost(self.before, self.moving)
            - distances.cost(self.moving, self.after)
            - distances.cost(self.target, self.target_next)
    }

    /// Edges that exist only after the move.
    pub fn created(&self) -> [Edge; 3] {
        [
            (self.before, self.after),
            (self.target, self.moving),
            (self.moving, self.target_next),
        ]
    }

    /// Edges that the move breaks.
    pub fn removed(&self) -> [Edge; 3] {
        [
            (self.before, self.moving),
            (self.moving, self.after),
            (self.target, self.target_next),
        ]
    }
}

/// A fully evaluated relocation candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relocation {
    /// Index of the source route.
    pub from_route: usize,
    /// Position of the moving customer in the source route.
    pub from_pos: usize,
    /// Index of the destination route.
    pub to_route: usize,
    /// Position of the node the customer is inserted behind.
    pub to_pos: usize,
    /// Nodes around the move.
    pub edges: MoveEdges,
    /// Cost change.
    pub delta: f64,
}

impl Relocation {
    /// Returns `true` if source and destination are the same route.
    pub fn is_intra_route(&self) -> bool {
        self.from_route == self.to_route
    }
}

/// Calls `visit(from_route, i, to_route, j)` for every candidate of the
/// neighborhood in scan order.
///
/// Depot anchors never move, nothing is inserted after the closing depot,
/// and same-route moves that leave the route unchanged (`j == i`,
/// `j == i - 1`) are skipped. Cross-route candidates must fit the
/// destination's remaining capacity.
fn for_each_candidate<F>(routes: &[Route], instance: &Instance, scope: Neighborhood, mut visit: F)
where
    F: FnMut(usize, usize, usize, usize),
{
    for (from_r, from_route) in routes.iter().enumerate() {
        let from_len = from_route.len();
        for i in 1..from_len.saturating_sub(1) {
            let demand = instance.demand(from_route.nodes()[i]);
            let targets = match scope {
                Neighborhood::IntraRoute => from_r..from_r + 1,
                Neighborhood::InterRoute => 0..routes.len(),
            };
            for to_r in targets {
                let to_route = &routes[to_r];
                let same = to_r == from_r;
                if !same && !to_route.fits(demand) {
                    continue;
                }
                for j in 0..to_route.len().saturating_sub(1) {
                    if same && (j == i || j + 1 == i) {
                        continue;
                    }
                    visit(from_r, i, to_r, j);
                }
            }
        }
    }
}

fn evaluate<D: TravelCost + ?Sized>(
    routes: &[Route],
    distances: &D,
    (from_route, from_pos, to_route, to_pos): (usize, usize, usize, usize),
) -> Relocation {
    let edges = MoveEdges::read(routes, from_route, from_pos, to_route, to_pos);
    Relocation {
        from_route,
        from_pos,
        to_route,
        to_pos,
        edges,
        delta: edges.delta(distances),
    }
}

/// Finds the admissible relocation with the smallest delta.
///
/// `admissible` filters candidates before they compete; ties are resolved in
/// favour of the earliest candidate in scan order. Returns `None` when no
/// admissible candidate exists.
#[cfg(not(feature = "parallel"))]
pub(crate) fn best_relocation<D, F>(
    routes: &[Route],
    instance: &Instance,
    distances: &D,
    scope: Neighborhood,
    admissible: F,
) -> Option<Relocation>
where
    D: TravelCost + ?Sized,
    F: Fn(&Relocation) -> bool + Sync,
{
    let mut best: Option<Relocation> = None;
    for_each_candidate(routes, instance, scope, |from_r, i, to_r, j| {
        let mv = evaluate(routes, distances, (from_r, i, to_r, j));
        if admissible(&mv) && best.as_ref().is_none_or(|b| mv.delta < b.delta) {
            best = Some(mv);
        }
    });
    best
}

/// Finds the admissible relocation with the smallest delta.
///
/// Candidates are evaluated on the rayon pool and reduced on
/// `(delta, scan index)`, which selects the same move as a sequential scan.
#[cfg(feature = "parallel")]
pub(crate) fn best_relocation<D, F>(
    routes: &[Route],
    instance: &Instance,
    distances: &D,
    scope: Neighborhood,
    admissible: F,
) -> Option<Relocation>
where
    D: TravelCost + ?Sized,
    F: Fn(&Relocation) -> bool + Sync,
{
    use rayon::prelude::*;
    use std::cmp::Ordering;

    let mut candidates = Vec::new();
    for_each_candidate(routes, instance, scope, |from_r, i, to_r, j| {
        candidates.push((from_r, i, to_r, j));
    });

    candidates
        .into_par_iter()
        .enumerate()
        .map(|(idx, c)| (idx, evaluate(routes, distances, c)))
        .filter(|(_, mv)| admissible(mv))
        .min_by(|(ia, a), (ib, b)| {
            a.delta
                .partial_cmp(&b.delta)
                .unwrap_or(Ordering::Equal)
                .then(ia.cmp(ib))
        })
        .map(|(_, mv)| mv)
}

/// Applies `mv` to `solution`, updating route loads and the total cost.
///
/// Same-route moves go through [`Route::relocate`]; cross-route moves insert
/// into the destination first so a capacity failure leaves the solution
/// untouched.
pub(crate) fn apply_relocation(
    solution: &mut Solution,
    mv: &Relocation,
    instance: &Instance,
) -> Result<(), RoutingError> {
    let routes = solution.routes_mut();
    if mv.is_intra_route() {
        routes[mv.from_route].relocate(mv.from_pos, mv.to_pos);
    } else {
        let node = routes[mv.from_route].nodes()[mv.from_pos];
        let demand = instance.demand(node);
        routes[mv.to_route].insert(mv.to_pos + 1, node, demand)?;
        routes[mv.from_route].remove(mv.from_pos, demand);
    }
    solution.add_cost(mv.delta);
    Ok(())
}
