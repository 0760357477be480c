//! Customer (and depot) locations.

use serde::{Deserialize, Serialize};

/// Node id reserved for the depot.
pub const DEPOT: usize = 0;

/// A customer (or the depot) in a routing instance.
///
/// Customer 0 is the depot and carries no demand. Coordinates are integer
/// grid positions; distances are derived from them by the distance provider.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::Customer;
///
/// let depot = Customer::depot(50, 50);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.demand(), 0);
/// assert!(depot.is_depot());
///
/// let c = Customer::new(1, 41, 49, 7);
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    id: usize,
    x: i32,
    y: i32,
    demand: i32,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(id: usize, x: i32, y: i32, demand: i32) -> Self {
        Self { id, x, y, demand }
    }

    /// Creates a depot at the given coordinates (id=0, demand=0).
    pub fn depot(x: i32, y: i32) -> Self {
        Self::new(DEPOT, x, y, 0)
    }

    /// Node id (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Units to deliver at this customer.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Returns `true` for the depot node.
    pub fn is_depot(&self) -> bool {
        self.id == DEPOT
    }

    /// Euclidean distance to another location, unrounded.
    pub fn distance_to(&self, other: &Customer) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}
