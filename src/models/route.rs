//! Vehicle routes as depot-anchored node sequences.

use serde::{Deserialize, Serialize};

use super::customer::DEPOT;
use super::Vehicle;
use crate::distance::TravelCost;
use crate::error::RoutingError;

/// Position at which a node removed from `from_pos` must be reinserted so
/// that it ends up directly after the node originally at `after_pos` of the
/// same sequence.
///
/// Removing an element shifts every later index down by one, so targets
/// behind the removed slot are used as-is and targets in front of it move
/// one step right.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::insertion_index;
///
/// // [0, a, m, b, c, 0]: move m (pos 2) after c (pos 4) -> insert at 4
/// assert_eq!(insertion_index(2, 4), 4);
/// // move m (pos 2) after the leading depot (pos 0) -> insert at 1
/// assert_eq!(insertion_index(2, 0), 1);
/// ```
pub fn insertion_index(from_pos: usize, after_pos: usize) -> usize {
    if after_pos > from_pos {
        after_pos
    } else {
        after_pos + 1
    }
}

/// An ordered sequence of nodes served by a single vehicle.
///
/// A non-empty route starts with the depot and, once closed, ends with it.
/// The route tracks its load so capacity can be checked without rescanning
/// demands; every operation that adds load is capacity-checked.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::Route;
///
/// let mut route = Route::new(0, 10);
/// route.push(0, 0).unwrap();
/// route.push(3, 4).unwrap();
/// route.push(1, 4).unwrap();
/// route.close();
///
/// assert_eq!(route.nodes(), &[0, 3, 1, 0]);
/// assert_eq!(route.load(), 8);
/// assert!(route.is_closed());
/// assert!(!route.fits(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    vehicle_id: usize,
    capacity: i32,
    nodes: Vec<usize>,
    load: i32,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: usize, capacity: i32) -> Self {
        Self {
            vehicle_id,
            capacity,
            nodes: Vec::new(),
            load: 0,
        }
    }

    /// Creates an empty route for `vehicle`.
    pub fn for_vehicle(vehicle: &Vehicle) -> Self {
        Self::new(vehicle.id(), vehicle.capacity())
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Fixed capacity of the vehicle.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Sum of demands of the customers on the route.
    pub fn load(&self) -> i32 {
        self.load
    }

    /// Node ids in visiting order, depot anchors included.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Number of stops, depot anchors included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the vehicle has not left the depot yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the last appended node; the depot for an empty route.
    pub fn current_location(&self) -> usize {
        self.nodes.last().copied().unwrap_or(DEPOT)
    }

    /// Returns `true` if a customer with `demand` can be added.
    pub fn fits(&self, demand: i32) -> bool {
        self.load + demand <= self.capacity
    }

    /// Returns `true` once the route has returned to the depot.
    pub fn is_closed(&self) -> bool {
        self.nodes.len() >= 2 && self.nodes.last() == Some(&DEPOT)
    }

    /// Customer ids in visiting order (depot anchors removed).
    pub fn customer_ids(&self) -> Vec<usize> {
        self.nodes.iter().copied().filter(|&n| n != DEPOT).collect()
    }

    /// Returns `true` if at least one customer is served.
    pub fn has_customers(&self) -> bool {
        self.nodes.iter().any(|&n| n != DEPOT)
    }

    /// Appends a node at the end of the route.
    pub fn push(&mut self, node: usize, demand: i32) -> Result<(), RoutingError> {
        self.check_fits(demand)?;
        self.nodes.push(node);
        self.load += demand;
        Ok(())
    }

    /// Returns the vehicle to the depot.
    pub fn close(&mut self) {
        self.nodes.push(DEPOT);
    }

    /// Drops every stop and resets the load.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.load = 0;
    }

    /// Removes the node at `pos` and releases its demand.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn remove(&mut self, pos: usize, demand: i32) -> usize {
        let node = self.nodes.remove(pos);
        self.load -= demand;
        node
    }

    /// Inserts `node` at `pos`, shifting later stops right.
    pub fn insert(&mut self, pos: usize, node: usize, demand: i32) -> Result<(), RoutingError> {
        self.check_fits(demand)?;
        self.nodes.insert(pos, node);
        self.load += demand;
        Ok(())
    }

    /// Moves the node at `from_pos` directly behind the node currently at
    /// `after_pos`. Load is unchanged.
    pub fn relocate(&mut self, from_pos: usize, after_pos: usize) {
        let node = self.nodes.remove(from_pos);
        self.nodes.insert(insertion_index(from_pos, after_pos), node);
    }

    /// Sum of consecutive-node costs along the route.
    pub fn cost<D: TravelCost + ?Sized>(&self, distances: &D) -> f64 {
        self.nodes
            .windows(2)
            .map(|w| distances.cost(w[0], w[1]))
            .sum()
    }

    fn check_fits(&self, demand: i32) -> Result<(), RoutingError> {
        if self.fits(demand) {
            Ok(())
        } else {
            Err(RoutingError::CapacityExceeded {
                vehicle_id: self.vehicle_id,
                load: self.load,
                demand,
                capacity: self.capacity,
            })
        }
    }
}
