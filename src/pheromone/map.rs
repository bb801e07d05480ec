//! Dense pheromone trail matrix.

use crate::error::{AcoError, Result};
use crate::models::Route;

/// A dense n×n pheromone matrix stored in row-major order.
///
/// Rows are origins and columns destinations over the combined node space:
/// customers occupy `0..num_customers` and depots the trailing rows in
/// reverse order, so depot `i` owns row `size - 1 - i`. Always go through
/// [`depot_row`](Self::depot_row) to address a depot.
///
/// # Examples
///
/// ```
/// use u_aco_routing::models::{Leg, Route};
/// use u_aco_routing::pheromone::PheromoneMap;
///
/// let mut map = PheromoneMap::new(2, 1, 1.0);
/// assert_eq!(map.size(), 3);
/// assert_eq!(map.depot_row(0), 2);
///
/// let route = Route::new(vec![Leg::with_customers(0, vec![1])], 5.0);
/// map.update(&route, 1.0).unwrap();
/// assert!((map.get(2, 1) - 0.2).abs() < 1e-12);
/// assert_eq!(map.get(2, 0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMap {
    data: Vec<f64>,
    size: usize,
    num_customers: usize,
}

impl PheromoneMap {
    /// Creates a map for the given customer and depot counts with every
    /// entry set to `initial`.
    ///
    /// Negative or non-finite initial values are stored as zero.
    pub fn new(num_customers: usize, num_depots: usize, initial: f64) -> Self {
        let size = num_customers + num_depots;
        let initial = if initial.is_finite() {
            initial.max(0.0)
        } else {
            0.0
        };
        Self {
            data: vec![initial; size * size],
            size,
            num_customers,
        }
    }

    /// Number of nodes (customers + depots).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of customer nodes.
    pub fn num_customers(&self) -> usize {
        self.num_customers
    }

    /// Row owned by depot `depot`.
    ///
    /// Depots are stored from the last row backwards: depot 0 is the last
    /// row, depot 1 the one before it, and so on.
    ///
    /// # Panics
    ///
    /// Panics if `depot` is not a valid depot index.
    pub fn depot_row(&self, depot: usize) -> usize {
        assert!(
            depot < self.size - self.num_customers,
            "depot index {depot} out of range"
        );
        self.size - 1 - depot
    }

    /// Trail strength on the edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// All outgoing trail strengths of node `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        let start = from * self.size;
        &self.data[start..start + self.size]
    }

    /// Outgoing trail strengths of depot `depot`.
    pub fn depot_trails(&self, depot: usize) -> &[f64] {
        self.row(self.depot_row(depot))
    }

    /// Multiplies every entry by `1 - evaporation`.
    ///
    /// `evaporation` is clamped to `[0, 1]` so entries never turn negative.
    pub fn evaporate(&mut self, evaporation: f64) {
        let keep = 1.0 - evaporation.clamp(0.0, 1.0);
        for value in &mut self.data {
            *value *= keep;
        }
    }

    /// Deposits `evaporation / distance` on every edge the route traverses.
    ///
    /// For each leg this is the edge from the leg's depot row to its first
    /// customer, then every consecutive customer pair. Empty legs deposit
    /// nothing. Fails with [`AcoError::DegenerateRoute`] without touching the
    /// map when `distance` is not strictly positive and finite, and with
    /// [`AcoError::RouteMismatch`] when the route names a node outside the map.
    pub fn reinforce(&mut self, route: &Route, distance: f64, evaporation: f64) -> Result<()> {
        self.check_route(route)?;
        let lambda = Self::deposit(distance, evaporation)?;
        self.deposit_along(route, lambda);
        Ok(())
    }

    /// One trail update: evaporate everywhere, then reinforce along `route`
    /// scaled by the route's own distance.
    ///
    /// Fails like [`reinforce`](Self::reinforce), before evaporating.
    pub fn update(&mut self, route: &Route, evaporation: f64) -> Result<()> {
        self.check_route(route)?;
        let lambda = Self::deposit(route.distance(), evaporation)?;
        self.evaporate(evaporation);
        self.deposit_along(route, lambda);
        Ok(())
    }

    fn check_route(&self, route: &Route) -> Result<()> {
        let num_depots = self.size - self.num_customers;
        for (leg_index, leg) in route.legs().iter().enumerate() {
            if leg.depot() >= num_depots {
                return Err(AcoError::RouteMismatch {
                    leg_index,
                    node: leg.depot(),
                });
            }
            if let Some(&node) = leg.customers().iter().find(|&&c| c >= self.num_customers) {
                return Err(AcoError::RouteMismatch { leg_index, node });
            }
        }
        Ok(())
    }

    fn deposit(distance: f64, evaporation: f64) -> Result<f64> {
        if !(distance.is_finite() && distance > 0.0) {
            return Err(AcoError::DegenerateRoute { distance });
        }
        Ok(evaporation.clamp(0.0, 1.0) / distance)
    }

    fn deposit_along(&mut self, route: &Route, lambda: f64) {
        for leg in route.legs() {
            let Some((&first, rest)) = leg.customers().split_first() else {
                continue;
            };
            let depot_row = self.depot_row(leg.depot());
            self.data[depot_row * self.size + first] += lambda;

            let mut prev = first;
            for &next in rest {
                self.data[prev * self.size + next] += lambda;
                prev = next;
            }
        }
    }
}
