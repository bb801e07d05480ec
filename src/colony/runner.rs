//! Colony loop: iterations of sequential ants sharing one pheromone map.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::config::{AcoConfig, FailurePolicy};
use crate::error::{AcoError, Result};
use crate::models::{Instance, Route, Solution};
use crate::pheromone::PheromoneMap;

use super::ant::Ant;
use super::selector::NodeSelector;

/// Best route seen so far in a run.
#[derive(Debug, Clone)]
struct Best {
    route: Route,
    iteration: usize,
}

/// An ant colony solving one instance.
///
/// Ants run one after another; every successful ant evaporates the trails
/// and reinforces its own route (`evaporation_factor`), so the next ant sees
/// its contribution. After each iteration the best route so far is
/// reinforced again with `g_evaporation_factor`.
///
/// # Examples
///
/// ```
/// use u_aco_routing::colony::Colony;
/// use u_aco_routing::config::AcoConfig;
/// use u_aco_routing::models::{Customer, Depot, Instance, TimeWindow};
///
/// let tw = TimeWindow::new(0.0, 900.0).unwrap();
/// let instance = Instance::new(
///     vec![
///         Customer::new(1.0, 0.0, 20.0, tw),
///         Customer::new(2.0, 0.0, 20.0, tw),
///         Customer::new(11.0, 11.0, 20.0, tw),
///     ],
///     vec![Depot::new(0.0, 0.0), Depot::new(10.0, 10.0)],
/// )
/// .unwrap();
/// let config = AcoConfig::default()
///     .with_iterations(20)
///     .with_number_of_ants(5)
///     .with_seed(42);
///
/// let solution = Colony::new(&instance, config).unwrap().run().unwrap();
/// assert_eq!(solution.route().num_served(), 3);
/// assert!(solution.distance() > 0.0);
/// ```
pub struct Colony<'a> {
    instance: &'a Instance,
    config: AcoConfig,
    pheromones: PheromoneMap,
    rng: StdRng,
    best: Option<Best>,
}

impl<'a> Colony<'a> {
    /// Creates a colony with fresh trails.
    ///
    /// Fails with [`AcoError::InvalidConfig`] when the configuration is out
    /// of range.
    pub fn new(instance: &'a Instance, config: AcoConfig) -> Result<Self> {
        config.validate()?;
        let pheromones = PheromoneMap::new(
            instance.num_customers(),
            instance.num_depots(),
            config.pheromone_init,
        );
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            instance,
            config,
            pheromones,
            rng,
            best: None,
        })
    }

    /// Current trails.
    pub fn pheromones(&self) -> &PheromoneMap {
        &self.pheromones
    }

    /// Best route found so far, if any.
    pub fn best_route(&self) -> Option<&Route> {
        self.best.as_ref().map(|b| &b.route)
    }

    /// Runs the configured number of iterations and returns the best route.
    ///
    /// Fails with [`AcoError::NoFeasibleRoute`] if no ant ever completes a
    /// route, or with the ant's error under [`FailurePolicy::AbortRun`].
    pub fn run(mut self) -> Result<Solution> {
        let selector = NodeSelector::from_config(&self.config);
        let mut completed = 0;
        let mut failed = 0;
        let mut history = Vec::with_capacity(self.config.iterations);

        info!(
            customers = self.instance.num_customers(),
            depots = self.instance.num_depots(),
            iterations = self.config.iterations,
            ants = self.config.number_of_ants,
            "starting colony"
        );

        for iteration in 0..self.config.iterations {
            for ant_id in 0..self.config.number_of_ants {
                match self.run_ant(selector, iteration) {
                    Ok(()) => completed += 1,
                    Err(e) => {
                        failed += 1;
                        warn!(iteration, ant_id, error = %e, "ant failed");
                        if self.config.failure_policy == FailurePolicy::AbortRun {
                            return Err(e);
                        }
                    }
                }
            }

            if let Some(best) = &self.best {
                if let Err(e) = self
                    .pheromones
                    .update(&best.route, self.config.g_evaporation_factor)
                {
                    warn!(iteration, error = %e, "global pheromone update skipped");
                }
            }

            let best_distance = self
                .best
                .as_ref()
                .map_or(f64::INFINITY, |b| b.route.distance());
            debug!(iteration, best_distance, "iteration done");
            history.push(best_distance);
        }

        let Some(best) = self.best else {
            return Err(AcoError::NoFeasibleRoute {
                failed_ants: failed,
            });
        };

        info!(
            distance = best.route.distance(),
            vehicles = best.route.num_legs(),
            best_iteration = best.iteration,
            completed,
            failed,
            "colony finished"
        );

        Ok(Solution::new(
            best.route,
            best.iteration,
            self.config.iterations,
            completed,
            failed,
            history,
        ))
    }

    /// Builds one route, applies the local update and records it if it is the
    /// shortest so far.
    fn run_ant(&mut self, selector: NodeSelector, iteration: usize) -> Result<()> {
        let mut ant_rng = StdRng::seed_from_u64(self.rng.random());
        let route = Ant::new(
            self.instance,
            &self.pheromones,
            selector,
            self.config.speed,
            self.config.soft_lock_limit,
        )
        .construct(&mut ant_rng)?;

        debug_assert_eq!(route.num_served(), self.instance.num_customers());
        trace!(
            iteration,
            distance = route.distance(),
            vehicles = route.num_legs(),
            "ant finished"
        );

        if let Err(e) = self
            .pheromones
            .update(&route, self.config.evaporation_factor)
        {
            warn!(iteration, error = %e, "local pheromone update skipped");
        }

        let improved = self
            .best
            .as_ref()
            .is_none_or(|b| route.distance() < b.route.distance());
        if improved {
            debug!(iteration, distance = route.distance(), "new best route");
            self.best = Some(Best { route, iteration });
        }
        Ok(())
    }
}

/// Solves an instance with the given configuration.
///
/// Shorthand for `Colony::new(instance, config)?.run()`.
pub fn solve(instance: &Instance, config: &AcoConfig) -> Result<Solution> {
    Colony::new(instance, config.clone())?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Depot, TimeWindow};

    fn tw(ready: f64, due: f64) -> TimeWindow {
        TimeWindow::new(ready, due).expect("valid")
    }

    fn small_instance() -> Instance {
        Instance::new(
            vec![
                Customer::new(1.0, 0.0, 20.0, tw(0.0, 900.0)),
                Customer::new(2.0, 3.0, 20.0, tw(0.0, 900.0)),
                Customer::new(-4.0, 1.0, 20.0, tw(60.0, 300.0)),
                Customer::new(8.0, -2.0, 20.0, tw(0.0, 120.0)),
                Customer::new(5.0, 5.0, 20.0, tw(0.0, 900.0)),
            ],
            vec![Depot::new(0.0, 0.0), Depot::new(6.0, 6.0)],
        )
        .expect("valid")
    }

    #[test]
    fn test_invalid_config_rejected() {
        let instance = small_instance();
        let config = AcoConfig::default().with_speed(-1.0);
        assert!(matches!(
            Colony::new(&instance, config),
            Err(AcoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_run_statistics() {
        let instance = small_instance();
        let config = AcoConfig::default()
            .with_iterations(10)
            .with_number_of_ants(4)
            .with_seed(1);
        let sol = solve(&instance, &config).expect("feasible");
        assert_eq!(sol.iterations(), 10);
        assert_eq!(sol.ants_completed() + sol.ants_failed(), 40);
        assert_eq!(sol.history().len(), 10);
        assert!(sol.best_iteration() < 10);
        assert_eq!(sol.route().num_served(), 5);
    }

    #[test]
    fn test_history_never_increases() {
        let instance = small_instance();
        let config = AcoConfig::default()
            .with_iterations(25)
            .with_number_of_ants(5)
            .with_r0(50)
            .with_seed(99);
        let sol = solve(&instance, &config).expect("feasible");
        for pair in sol.history().windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        let last = *sol.history().last().expect("non-empty");
        assert_eq!(last, sol.distance());
    }

    #[test]
    fn test_same_seed_same_route() {
        let instance = small_instance();
        let config = AcoConfig::default()
            .with_iterations(15)
            .with_number_of_ants(6)
            .with_r0(60)
            .with_seed(2024);
        let a = solve(&instance, &config).expect("feasible");
        let b = solve(&instance, &config).expect("feasible");
        assert_eq!(a.route(), b.route());
        assert_eq!(a.distance(), b.distance());
    }

    #[test]
    fn test_depot_grouping() {
        // (11,11) opens late and closes early, while (1,0) and (2,0) close
        // before it opens, so the two groups can never share a vehicle.
        let instance = Instance::new(
            vec![
                Customer::new(1.0, 0.0, 30.0, tw(0.0, 40.0)),
                Customer::new(2.0, 0.0, 30.0, tw(0.0, 40.0)),
                Customer::new(11.0, 11.0, 30.0, tw(50.0, 60.0)),
            ],
            vec![Depot::new(0.0, 0.0), Depot::new(10.0, 10.0)],
        )
        .expect("valid");
        let config = AcoConfig::default()
            .with_r0(100)
            .with_w1(0.0)
            .with_speed(20.0)
            .with_iterations(10)
            .with_number_of_ants(5)
            .with_seed(3);

        let sol = solve(&instance, &config).expect("feasible");
        let mut legs = sol.route().node_ids();
        legs.sort_by_key(|leg| leg.len());
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0], vec![1, 2]);
        assert_eq!(legs[1][0], 0);
        let mut pair = legs[1][1..].to_vec();
        pair.sort_unstable();
        assert_eq!(pair, vec![0, 1]);
    }

    #[test]
    fn test_unreachable_customer_skip_policy() {
        let instance = Instance::new(
            vec![
                Customer::new(1.0, 0.0, 20.0, tw(0.0, 900.0)),
                Customer::new(100.0, 100.0, 20.0, tw(0.0, 1.0)),
            ],
            vec![Depot::new(0.0, 0.0)],
        )
        .expect("valid");
        let config = AcoConfig::default()
            .with_iterations(2)
            .with_number_of_ants(3)
            .with_seed(8);
        match solve(&instance, &config) {
            Err(AcoError::NoFeasibleRoute { failed_ants }) => assert_eq!(failed_ants, 6),
            other => panic!("expected no feasible route, got {other:?}"),
        }
    }

    #[test]
    fn test_unreachable_customer_abort_policy() {
        let instance = Instance::new(
            vec![Customer::new(100.0, 100.0, 20.0, tw(0.0, 1.0))],
            vec![Depot::new(0.0, 0.0)],
        )
        .expect("valid");
        let config = AcoConfig::default()
            .with_iterations(5)
            .with_failure_policy(FailurePolicy::AbortRun)
            .with_seed(8);
        assert!(matches!(
            solve(&instance, &config),
            Err(AcoError::SoftLockExceeded { .. })
        ));
    }

    #[test]
    fn test_colocated_customers_do_not_poison_trails() {
        // Zero-length route: every update is degenerate and skipped.
        let instance = Instance::new(
            vec![Customer::new(0.0, 0.0, 0.0, tw(0.0, 900.0))],
            vec![Depot::new(0.0, 0.0)],
        )
        .expect("valid");
        let config = AcoConfig::default()
            .with_iterations(3)
            .with_number_of_ants(2)
            .with_seed(4);
        let colony = Colony::new(&instance, config.clone()).expect("valid");
        assert!(colony.best_route().is_none());
        let sol = colony.run().expect("feasible");
        assert_eq!(sol.distance(), 0.0);
        assert_eq!(sol.route().node_ids(), vec![vec![0, 0]]);
    }

    #[test]
    fn test_pheromones_initialised() {
        let instance = small_instance();
        let colony = Colony::new(&instance, AcoConfig::default().with_seed(1)).expect("valid");
        assert_eq!(colony.pheromones().size(), 7);
        assert_eq!(colony.pheromones().get(0, 1), 5.0);
    }

    #[test]
    fn test_equal_length_route_does_not_replace_best() {
        // Every ant builds the same one-customer route, so the first one stays.
        let instance = Instance::new(
            vec![Customer::new(3.0, 4.0, 20.0, tw(0.0, 900.0))],
            vec![Depot::new(0.0, 0.0)],
        )
        .expect("valid");
        let config = AcoConfig::default()
            .with_iterations(6)
            .with_number_of_ants(4)
            .with_seed(11);
        let sol = solve(&instance, &config).expect("feasible");
        assert_eq!(sol.best_iteration(), 0);
        assert_eq!(sol.ants_completed(), 24);
        assert!((sol.distance() - 5.0).abs() < 1e-10);
        assert!(sol.history().iter().all(|&d| (d - 5.0).abs() < 1e-10));
    }

    #[test]
    fn test_each_ant_sees_previous_local_update() {
        let instance = small_instance();
        let config = AcoConfig::default()
            .with_evaporation_factor(0.5)
            .with_seed(17);
        let selector = NodeSelector::from_config(&config);
        let mut colony = Colony::new(&instance, config).expect("valid");

        colony.run_ant(selector, 0).expect("feasible");
        let first = colony.best_route().expect("recorded").clone();
        let lambda = 0.5 / first.distance();
        let map = colony.pheromones();
        for leg in first.legs() {
            let mut from = map.depot_row(leg.depot());
            for &c in leg.customers() {
                assert!((map.get(from, c) - (2.5 + lambda)).abs() < 1e-12);
                from = c;
            }
        }
        // a customer never follows itself, so this edge only evaporates
        assert_eq!(map.get(0, 0), 2.5);

        colony.run_ant(selector, 0).expect("feasible");
        assert_eq!(colony.pheromones().get(0, 0), 1.25);
    }
}
