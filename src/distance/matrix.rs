//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use super::TravelCost;
use crate::models::Customer;

/// How Euclidean distances derived from coordinates are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingPolicy {
    /// Round to the nearest integer (halves away from zero).
    #[default]
    Nearest,
    /// Round to two decimal places.
    Hundredths,
    /// Keep the exact Euclidean distance.
    Exact,
}

impl RoundingPolicy {
    /// Applies the policy to a raw distance.
    pub fn apply(self, distance: f64) -> f64 {
        match self {
            RoundingPolicy::Nearest => distance.round(),
            RoundingPolicy::Hundredths => (distance * 100.0).round() / 100.0,
            RoundingPolicy::Exact => distance,
        }
    }
}

/// A dense n×n distance matrix stored in row-major order.
///
/// Built either from customer coordinates (Euclidean, rounded according to a
/// [`RoundingPolicy`]) or from explicit data.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::Customer;
/// use cvrp_tabu::distance::{DistanceMatrix, TravelCost};
///
/// let customers = vec![
///     Customer::depot(0, 0),
///     Customer::new(1, 3, 4, 10),
///     Customer::new(2, 1, 1, 20),
/// ];
/// let dm = DistanceMatrix::from_customers(&customers);
/// assert_eq!(dm.cost(0, 1), 5.0);
/// // sqrt(2) rounds to 1
/// assert_eq!(dm.cost(0, 2), 1.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Euclidean distances rounded to the nearest integer.
    pub fn from_customers(customers: &[Customer]) -> Self {
        Self::from_customers_with(customers, RoundingPolicy::Nearest)
    }

    /// Euclidean distances under the given rounding policy.
    ///
    /// Only the upper triangle is computed; the lower one is mirrored.
    pub fn from_customers_with(customers: &[Customer], policy: RoundingPolicy) -> Self {
        let n = customers.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = policy.apply(customers[i].distance_to(&customers[j]));
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

impl TravelCost for DistanceMatrix {
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }

    fn num_locations(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customers() -> Vec<Customer> {
        vec![
            Customer::depot(0, 0),
            Customer::new(1, 3, 4, 10),
            Customer::new(2, 0, 8, 20),
            Customer::new(3, 2, 3, 5),
        ]
    }

    #[test]
    fn test_from_customers_rounds() {
        let dm = DistanceMatrix::from_customers(&sample_customers());
        assert_eq!(dm.size(), 4);
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(0, 2), 8.0);
        // sqrt(13) = 3.605...
        assert_eq!(dm.get(0, 3), 4.0);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_rounding_policies() {
        let c = sample_customers();
        let exact = DistanceMatrix::from_customers_with(&c, RoundingPolicy::Exact);
        assert!((exact.get(0, 3) - 13f64.sqrt()).abs() < 1e-12);
        let hundredths = DistanceMatrix::from_customers_with(&c, RoundingPolicy::Hundredths);
        assert!((hundredths.get(0, 3) - 3.61).abs() < 1e-12);
        assert_eq!(RoundingPolicy::Nearest.apply(2.5), 3.0);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_customers(&sample_customers());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.cost(1, 0), 5.0);
        assert_eq!(dm.num_locations(), 2);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }
}
