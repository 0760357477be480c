//! Seeded random instance generation.
//!
//! Customers are scattered uniformly over a square grid with uniformly
//! drawn integer demands. The defaults describe the classic 30-customer,
//! 10-vehicle benchmark with the depot in the middle of a 100×100 grid.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RoutingError;
use crate::models::{Customer, Instance};

/// Parameters of a random instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of customers, depot excluded.
    pub num_customers: usize,
    /// Fleet size.
    pub num_vehicles: usize,
    /// Capacity of every vehicle.
    pub capacity: i32,
    /// Depot coordinates.
    pub depot: (i32, i32),
    /// Customer coordinates are drawn from `[0, grid_size)`.
    pub grid_size: i32,
    /// Smallest customer demand (inclusive).
    pub min_demand: i32,
    /// Largest customer demand (inclusive).
    pub max_demand: i32,
    /// Seed for [`InstanceGenerator::generate`].
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_customers: 30,
            num_vehicles: 10,
            capacity: 50,
            depot: (50, 50),
            grid_size: 100,
            min_demand: 4,
            max_demand: 10,
            seed: 151_190,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of customers.
    pub fn with_customers(mut self, n: usize) -> Self {
        self.num_customers = n;
        self
    }

    /// Sets the fleet size.
    pub fn with_vehicles(mut self, n: usize) -> Self {
        self.num_vehicles = n;
        self
    }

    /// Sets the vehicle capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the depot coordinates.
    pub fn with_depot(mut self, x: i32, y: i32) -> Self {
        self.depot = (x, y);
        self
    }

    /// Sets the grid size.
    pub fn with_grid_size(mut self, size: i32) -> Self {
        self.grid_size = size;
        self
    }

    /// Sets the inclusive demand range.
    pub fn with_demand_range(mut self, min: i32, max: i32) -> Self {
        self.min_demand = min;
        self.max_demand = max;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Builds random instances from a [`GeneratorConfig`].
///
/// # Examples
///
/// ```
/// use cvrp_tabu::generator::{GeneratorConfig, InstanceGenerator};
///
/// let generator = InstanceGenerator::new(GeneratorConfig::default().with_customers(12));
/// let a = generator.generate().unwrap();
/// let b = generator.generate().unwrap();
/// assert_eq!(a.num_customers(), 12);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstanceGenerator {
    config: GeneratorConfig,
}

impl InstanceGenerator {
    /// Creates a generator.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates an instance with a [`ChaCha8Rng`] seeded from the
    /// configuration.
    pub fn generate(&self) -> Result<Instance, RoutingError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.generate_with(&mut rng)
    }

    /// Generates an instance drawing from `rng`.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidInstance`] for an empty grid, an empty or
    /// negative demand range, or a negative capacity.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<Instance, RoutingError> {
        let c = &self.config;
        if c.grid_size <= 0 {
            return Err(RoutingError::InvalidInstance(format!(
                "grid size must be positive, got {}",
                c.grid_size
            )));
        }
        if c.min_demand < 0 || c.max_demand < c.min_demand {
            return Err(RoutingError::InvalidInstance(format!(
                "invalid demand range [{}, {}]",
                c.min_demand, c.max_demand
            )));
        }

        let mut customers = Vec::with_capacity(c.num_customers + 1);
        customers.push(Customer::depot(c.depot.0, c.depot.1));
        for id in 1..=c.num_customers {
            let x = rng.random_range(0..c.grid_size);
            let y = rng.random_range(0..c.grid_size);
            let demand = rng.random_range(c.min_demand..=c.max_demand);
            customers.push(Customer::new(id, x, y, demand));
        }
        debug!(
            customers = c.num_customers,
            vehicles = c.num_vehicles,
            capacity = c.capacity,
            "generated instance"
        );
        Instance::new(customers, c.num_vehicles, c.capacity)
    }
}
