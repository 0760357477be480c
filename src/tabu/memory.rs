//! Edge-keyed tabu memory with decaying tenures.

use std::collections::HashMap;

use crate::local_search::Edge;

/// Short-term memory of forbidden directed edges.
///
/// Each entry counts down once per [`decay`](TabuMemory::decay); an edge is
/// forbidden while its remaining tenure is positive. Entries reaching zero
/// are dropped, so only live edges are stored.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::tabu::TabuMemory;
///
/// let mut memory = TabuMemory::new();
/// memory.forbid((1, 2), 2);
/// assert!(memory.is_tabu((1, 2)));
/// assert!(!memory.is_tabu((2, 1)));
///
/// memory.decay();
/// assert!(memory.is_tabu((1, 2)));
/// memory.decay();
/// assert!(!memory.is_tabu((1, 2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabuMemory {
    tenures: HashMap<Edge, usize>,
}

impl TabuMemory {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `edge` may not be created.
    pub fn is_tabu(&self, edge: Edge) -> bool {
        self.tenures.contains_key(&edge)
    }

    /// Remaining tenure of `edge`; zero when it is not forbidden.
    pub fn tenure(&self, edge: Edge) -> usize {
        self.tenures.get(&edge).copied().unwrap_or(0)
    }

    /// Forbids `edge` for the next `tenure` decays, overwriting any
    /// remaining tenure.
    pub fn forbid(&mut self, edge: Edge, tenure: usize) {
        if tenure == 0 {
            self.tenures.remove(&edge);
        } else {
            self.tenures.insert(edge, tenure);
        }
    }

    /// Decrements every tenure by one and drops expired edges.
    pub fn decay(&mut self) {
        self.tenures.retain(|_, t| {
            *t -= 1;
            *t > 0
        });
    }

    /// Number of currently forbidden edges.
    pub fn len(&self) -> usize {
        self.tenures.len()
    }

    /// Returns `true` if nothing is forbidden.
    pub fn is_empty(&self) -> bool {
        self.tenures.is_empty()
    }
}
