//! Route construction for a single ant.

use rand::Rng;
use tracing::trace;

use crate::error::{AcoError, Result};
use crate::models::{Customer, Instance, Leg, Location, Route};
use crate::pheromone::PheromoneMap;

use super::selector::{NodeSelector, Selection};

/// Where the ant currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Depot(usize),
    Customer(usize),
}

/// One construction pass over an instance.
///
/// The ant starts at a random depot and keeps extending the current leg with
/// the customer chosen by its [`NodeSelector`]. When no unvisited customer can
/// be reached in time it restarts from a random depot: an empty leg simply
/// moves to that depot, otherwise a new leg (vehicle) is opened and the clock
/// resets to zero. After too many consecutive dead ends the ant gives up.
///
/// The first customer of a leg is chosen from the leg's depot, after which
/// the leg moves to a depot strictly closer to that customer, if there is one.
pub struct Ant<'a> {
    instance: &'a Instance,
    pheromones: &'a PheromoneMap,
    selector: NodeSelector,
    speed: f64,
    soft_lock_limit: usize,
}

impl<'a> Ant<'a> {
    /// Creates an ant reading the given trails.
    pub fn new(
        instance: &'a Instance,
        pheromones: &'a PheromoneMap,
        selector: NodeSelector,
        speed: f64,
        soft_lock_limit: usize,
    ) -> Self {
        Self {
            instance,
            pheromones,
            selector,
            speed,
            soft_lock_limit,
        }
    }

    /// Builds a route visiting every customer exactly once.
    ///
    /// Fails with [`AcoError::SoftLockExceeded`] when more than
    /// `soft_lock_limit` consecutive selections find nothing reachable.
    pub fn construct<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Route> {
        let customers = self.instance.customers();
        let depots = self.instance.depots();
        let n = customers.len();

        let mut visited = vec![false; n];
        let mut num_visited = 0;
        let mut legs = vec![Leg::new(rng.random_range(0..depots.len()))];
        let mut position = Position::Depot(legs[0].depot());
        let mut time = 0.0;
        let mut distance = 0.0;
        let mut soft_locks = 0;

        while num_visited < n {
            let current = legs.len() - 1;

            let selection = match position {
                Position::Depot(d) => self.selector.select(
                    &depots[d],
                    customers,
                    self.pheromones.depot_trails(d),
                    &visited,
                    time,
                    rng,
                ),
                Position::Customer(c) => self.selector.select(
                    &customers[c],
                    customers,
                    self.pheromones.row(c),
                    &visited,
                    time,
                    rng,
                ),
            };

            let next = match selection {
                Selection::Found(next) => next,
                Selection::NotFound => {
                    soft_locks += 1;
                    if soft_locks > self.soft_lock_limit {
                        return Err(AcoError::SoftLockExceeded {
                            attempts: soft_locks,
                            unvisited: n - num_visited,
                        });
                    }

                    let depot = rng.random_range(0..depots.len());
                    if legs[current].is_empty() {
                        legs[current].set_depot(depot);
                    } else {
                        legs.push(Leg::new(depot));
                    }
                    trace!(depot, soft_locks, "no reachable customer, restarting");
                    position = Position::Depot(depot);
                    time = 0.0;
                    continue;
                }
            };

            soft_locks = 0;
            let target = &customers[next];
            let (leg_distance, arrival) = match position {
                Position::Depot(d) => {
                    let nearest = self.instance.closer_depot(next, d);
                    legs[current].set_depot(nearest);
                    let depot = &depots[nearest];
                    (
                        depot.distance_to(target),
                        time + depot.time_to(target, self.speed),
                    )
                }
                Position::Customer(c) => {
                    let origin = &customers[c];
                    (
                        origin.distance_to(target),
                        time + origin.service_time() + origin.time_to(target, self.speed),
                    )
                }
            };

            legs[current].push(next);
            visited[next] = true;
            num_visited += 1;
            time = arrive(target, arrival);
            distance += leg_distance;
            position = Position::Customer(next);
        }

        Ok(Route::new(legs, distance))
    }
}

/// Service start at `customer` for a vehicle arriving at `arrival`.
fn arrive(customer: &Customer, arrival: f64) -> f64 {
    customer.time_window().service_start(arrival)
}
