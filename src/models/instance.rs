//! Problem instance: customers and depots sharing one node-index space.

use super::{Customer, Depot, Location};
use crate::error::{AcoError, Result};

/// A multi-depot routing instance.
///
/// Customers occupy node ids `0..num_customers`; depots occupy the trailing
/// ids of the combined space (see
/// [`PheromoneMap::depot_row`](crate::pheromone::PheromoneMap::depot_row)).
///
/// # Examples
///
/// ```
/// use u_aco_routing::models::{Customer, Depot, Instance, TimeWindow};
///
/// let tw = TimeWindow::new(0.0, 900.0).unwrap();
/// let instance = Instance::new(
///     vec![Customer::new(1.0, 0.0, 20.0, tw), Customer::new(11.0, 11.0, 20.0, tw)],
///     vec![Depot::new(0.0, 0.0), Depot::new(10.0, 10.0)],
/// )
/// .unwrap();
/// assert_eq!(instance.num_nodes(), 4);
/// assert_eq!(instance.closer_depot(1, 0), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    customers: Vec<Customer>,
    depots: Vec<Depot>,
}

impl Instance {
    /// Creates an instance.
    ///
    /// Fails with [`AcoError::EmptyInstance`] when either list is empty.
    pub fn new(customers: Vec<Customer>, depots: Vec<Depot>) -> Result<Self> {
        if customers.is_empty() || depots.is_empty() {
            return Err(AcoError::EmptyInstance {
                customers: customers.len(),
                depots: depots.len(),
            });
        }
        Ok(Self { customers, depots })
    }

    /// All customers.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All depots.
    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    /// Number of customers.
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    /// Number of depots.
    pub fn num_depots(&self) -> usize {
        self.depots.len()
    }

    /// Size of the combined customer + depot node space.
    pub fn num_nodes(&self) -> usize {
        self.customers.len() + self.depots.len()
    }

    /// Depot a leg starting at `current` should use to serve `customer`.
    ///
    /// Another depot replaces `current` only when it is strictly closer to the
    /// customer; among several strictly closer depots the closest wins, and
    /// the lowest index wins between those at equal distance.
    ///
    /// # Panics
    ///
    /// Panics if `customer` or `current` is out of bounds.
    pub fn closer_depot(&self, customer: usize, current: usize) -> usize {
        let target = &self.customers[customer];
        let mut best = current;
        let mut best_distance = self.depots[current].distance_to(target);
        for (i, depot) in self.depots.iter().enumerate() {
            let d = depot.distance_to(target);
            if d < best_distance {
                best = i;
                best_distance = d;
            }
        }
        best
    }
}
