//! Next-customer selection for a single ant step.
//!
//! # Algorithm
//!
//! Each feasible unvisited customer `j` reachable from the current location
//! gets the score `τ(i,j)^α · η(j)^β`, where `τ` is the trail strength and
//! `η` the time-window heuristic of [`Customer::heuristic_value`].
//!
//! With probability `r0` percent the best-scoring customer is taken
//! (exploitation). Otherwise a customer is sampled with probability
//! proportional to its score (exploration), using a cumulative distribution
//! and binary search.
//!
//! # Reference
//!
//! Dorigo, M. & Gambardella, L.M. (1997). "Ant Colony System: A Cooperative
//! Learning Approach to the Traveling Salesman Problem", *IEEE Transactions
//! on Evolutionary Computation* 1(1), 53-66.

use rand::Rng;

use crate::config::AcoConfig;
use crate::models::{Customer, Location};

/// Result of one selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The index of the chosen customer.
    Found(usize),
    /// No unvisited customer can be reached before its window closes.
    NotFound,
}

/// Scores and picks the next customer for an ant.
///
/// # Examples
///
/// ```
/// use u_aco_routing::colony::{NodeSelector, Selection};
/// use u_aco_routing::models::{Customer, Depot, TimeWindow};
/// use rand::SeedableRng;
///
/// let tw = TimeWindow::new(0.0, 900.0).unwrap();
/// let customers = vec![Customer::new(5.0, 0.0, 0.0, tw), Customer::new(1.0, 0.0, 0.0, tw)];
/// let trails = vec![1.0; 3];
/// let selector = NodeSelector::new(100, 1.0, 1.0, 20.0, 0.0);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
///
/// let pick = selector.select(&Depot::new(0.0, 0.0), &customers, &trails, &[false, false], 0.0, &mut rng);
/// assert_eq!(pick, Selection::Found(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NodeSelector {
    r0: u32,
    alpha: f64,
    beta: f64,
    speed: f64,
    w1: f64,
}

impl NodeSelector {
    /// Creates a selector.
    ///
    /// * `r0`: exploitation probability in percent
    /// * `alpha`: trail exponent
    /// * `beta`: heuristic exponent
    /// * `speed`: vehicle speed (units/minute)
    /// * `w1`: urgency weight of the heuristic
    pub fn new(r0: u32, alpha: f64, beta: f64, speed: f64, w1: f64) -> Self {
        Self {
            r0,
            alpha,
            beta,
            speed,
            w1,
        }
    }

    /// Creates a selector from a colony configuration.
    pub fn from_config(config: &AcoConfig) -> Self {
        Self::new(
            config.r0,
            config.pheromone_param,
            config.heuristic_param,
            config.speed,
            config.w1,
        )
    }

    /// Picks the next customer to visit from `from` at `time`.
    ///
    /// `trails` is the pheromone row of `from`, indexed by customer; `visited`
    /// masks customers already served by this ant.
    pub fn select<L, R>(
        &self,
        from: &L,
        customers: &[Customer],
        trails: &[f64],
        visited: &[bool],
        time: f64,
        rng: &mut R,
    ) -> Selection
    where
        L: Location + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = self.score(from, customers, trails, visited, time);

        let draw = rng.random_range(0..=100u32);
        if draw <= self.r0 {
            return exploit(&candidates);
        }
        explore(&candidates, rng)
    }

    /// Feasible unvisited customers with their weighted scores.
    fn score<L: Location + ?Sized>(
        &self,
        from: &L,
        customers: &[Customer],
        trails: &[f64],
        visited: &[bool],
        time: f64,
    ) -> Vec<(usize, f64)> {
        customers
            .iter()
            .enumerate()
            .filter(|&(j, _)| !visited[j])
            .filter_map(|(j, customer)| {
                let eta = customer.heuristic_value(time, from, self.speed, self.w1)?;
                let score = trails[j].powf(self.alpha) * eta.powf(self.beta);
                // 0 * inf on a dead trail with an overflowing heuristic
                Some((j, if score.is_nan() { 0.0 } else { score }))
            })
            .collect()
    }
}

/// Best-scoring candidate; the first one wins on ties.
fn exploit(candidates: &[(usize, f64)]) -> Selection {
    let mut best: Option<(usize, f64)> = None;
    for &(j, score) in candidates {
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((j, score));
        }
    }
    match best {
        Some((j, _)) => Selection::Found(j),
        None => Selection::NotFound,
    }
}

/// Roulette-wheel sampling proportional to the candidate scores.
fn explore<R: Rng + ?Sized>(candidates: &[(usize, f64)], rng: &mut R) -> Selection {
    let mut cumulative = Vec::with_capacity(candidates.len());
    let mut total = 0.0;
    for &(_, score) in candidates {
        total += score;
        cumulative.push(total);
    }

    if candidates.is_empty() || total <= 0.0 || total.is_nan() {
        return Selection::NotFound;
    }
    if total.is_infinite() {
        return exploit(candidates);
    }

    let target = rng.random::<f64>() * total;
    let idx = cumulative
        .partition_point(|&c| c <= target)
        .min(candidates.len() - 1);
    Selection::Found(candidates[idx].0)
}
