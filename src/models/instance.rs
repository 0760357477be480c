//! Problem instance: depot, customers and a uniform fleet.

use serde::{Deserialize, Serialize};

use super::{Customer, Vehicle};
use crate::error::RoutingError;

/// A capacitated vehicle routing instance.
///
/// `customers[0]` is the depot and `customers[k].id() == k` for every node,
/// so node ids double as indices into the distance provider. All vehicles
/// share the same capacity.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance};
///
/// let instance = Instance::new(
///     vec![
///         Customer::depot(0, 0),
///         Customer::new(1, 1, 0, 4),
///         Customer::new(2, 2, 0, 4),
///     ],
///     2,
///     10,
/// )
/// .unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.vehicles().len(), 2);
/// assert_eq!(instance.demand(2), 4);
/// ```
///
/// Deserialization goes through [`Instance::new`], so malformed input is
/// rejected with the same errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InstanceData")]
pub struct Instance {
    customers: Vec<Customer>,
    num_vehicles: usize,
    capacity: i32,
}

/// Unchecked wire form of [`Instance`].
#[derive(Deserialize)]
struct InstanceData {
    customers: Vec<Customer>,
    num_vehicles: usize,
    capacity: i32,
}

impl TryFrom<InstanceData> for Instance {
    type Error = RoutingError;

    fn try_from(data: InstanceData) -> Result<Self, Self::Error> {
        Instance::new(data.customers, data.num_vehicles, data.capacity)
    }
}

impl Instance {
    /// Validates and creates an instance.
    ///
    /// Fails if the depot is missing or carries demand, if node ids are not
    /// contiguous from 0, or if a demand or the capacity is negative.
    pub fn new(
        customers: Vec<Customer>,
        num_vehicles: usize,
        capacity: i32,
    ) -> Result<Self, RoutingError> {
        let depot = customers
            .first()
            .ok_or_else(|| RoutingError::InvalidInstance("missing depot".into()))?;
        if !depot.is_depot() || depot.demand() != 0 {
            return Err(RoutingError::InvalidInstance(
                "node 0 must be the depot with zero demand".into(),
            ));
        }
        if capacity < 0 {
            return Err(RoutingError::InvalidInstance(format!(
                "negative vehicle capacity {capacity}"
            )));
        }
        for (idx, c) in customers.iter().enumerate() {
            if c.id() != idx {
                return Err(RoutingError::InvalidInstance(format!(
                    "node at position {idx} has id {}",
                    c.id()
                )));
            }
            if c.demand() < 0 {
                return Err(RoutingError::InvalidInstance(format!(
                    "customer {idx} has negative demand {}",
                    c.demand()
                )));
            }
        }
        Ok(Self {
            customers,
            num_vehicles,
            capacity,
        })
    }

    /// All nodes, depot first.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// The depot node.
    pub fn depot(&self) -> &Customer {
        &self.customers[0]
    }

    /// Number of customers (depot excluded).
    pub fn num_customers(&self) -> usize {
        self.customers.len() - 1
    }

    /// Number of locations (depot included).
    pub fn num_locations(&self) -> usize {
        self.customers.len()
    }

    /// Fleet size.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Capacity shared by every vehicle.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Demand of node `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this instance.
    pub fn demand(&self, id: usize) -> i32 {
        self.customers[id].demand()
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> i32 {
        self.customers.iter().map(Customer::demand).sum()
    }

    /// The fleet, vehicle ids `0..num_vehicles`.
    pub fn vehicles(&self) -> Vec<Vehicle> {
        (0..self.num_vehicles)
            .map(|id| Vehicle::new(id, self.capacity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_valid() {
        let inst = Instance::new(
            vec![
                Customer::depot(50, 50),
                Customer::new(1, 3, 4, 10),
                Customer::new(2, 6, 8, 20),
            ],
            3,
            40,
        )
        .expect("valid");
        assert_eq!(inst.num_customers(), 2);
        assert_eq!(inst.num_locations(), 3);
        assert_eq!(inst.num_vehicles(), 3);
        assert_eq!(inst.capacity(), 40);
        assert_eq!(inst.total_demand(), 30);
        assert_eq!(inst.depot().x(), 50);
        assert_eq!(inst.vehicles()[2], Vehicle::new(2, 40));
    }

    #[test]
    fn test_instance_depot_only() {
        let inst = Instance::new(vec![Customer::depot(0, 0)], 1, 10).expect("valid");
        assert_eq!(inst.num_customers(), 0);
    }

    #[test]
    fn test_instance_missing_depot() {
        assert!(matches!(
            Instance::new(vec![], 1, 10),
            Err(RoutingError::InvalidInstance(_))
        ));
        assert!(matches!(
            Instance::new(vec![Customer::new(1, 0, 0, 3)], 1, 10),
            Err(RoutingError::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_instance_non_contiguous_ids() {
        let res = Instance::new(
            vec![Customer::depot(0, 0), Customer::new(2, 1, 1, 1)],
            1,
            10,
        );
        assert!(matches!(res, Err(RoutingError::InvalidInstance(_))));
    }

    #[test]
    fn test_instance_negative_values() {
        let res = Instance::new(
            vec![Customer::depot(0, 0), Customer::new(1, 1, 1, -1)],
            1,
            10,
        );
        assert!(res.is_err());
        let res = Instance::new(vec![Customer::depot(0, 0)], 1, -5);
        assert!(res.is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let empty = r#"{"customers":[],"num_vehicles":1,"capacity":10}"#;
        assert!(serde_json::from_str::<Instance>(empty).is_err());

        let loaded_depot = r#"{"customers":[{"id":0,"x":0,"y":0,"demand":5}],"num_vehicles":1,"capacity":10}"#;
        assert!(serde_json::from_str::<Instance>(loaded_depot).is_err());

        let bad_customer = r#"{"customers":[{"id":0,"x":0,"y":0,"demand":0},{"id":7,"x":1,"y":1,"demand":-3}],"num_vehicles":1,"capacity":10}"#;
        let err = serde_json::from_str::<Instance>(bad_customer).expect_err("invalid");
        assert!(err.to_string().contains("has id 7"), "{err}");

        let negative_capacity = r#"{"customers":[{"id":0,"x":0,"y":0,"demand":0}],"num_vehicles":1,"capacity":-1}"#;
        assert!(serde_json::from_str::<Instance>(negative_capacity).is_err());
    }

    #[test]
    fn test_serde_roundtrip_valid() {
        let inst = Instance::new(
            vec![Customer::depot(5, 5), Customer::new(1, 2, 3, 4)],
            2,
            10,
        )
        .expect("valid");
        let json = serde_json::to_string(&inst).expect("serializable");
        let back: Instance = serde_json::from_str(&json).expect("valid");
        assert_eq!(back, inst);
    }
}
