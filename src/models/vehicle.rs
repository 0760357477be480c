//! Vehicle type with a fixed capacity.

use serde::{Deserialize, Serialize};

/// A vehicle of the fleet. Every vehicle starts and ends at the depot.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::Vehicle;
///
/// let v = Vehicle::new(0, 50);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: i32,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    pub fn new(id: usize, capacity: i32) -> Self {
        Self { id, capacity }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(4, 200);
        assert_eq!(v.id(), 4);
        assert_eq!(v.capacity(), 200);
    }
}
