//! Colony parameters.

use serde::{Deserialize, Serialize};

use crate::error::{AcoError, Result};

/// What the colony does when an ant exhausts its soft-lock retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Discard the failed ant and continue with the next one.
    #[default]
    SkipAnt,
    /// Stop the whole run and return the ant's error.
    AbortRun,
}

/// Configuration for an ACO run.
///
/// Defaults are tuned for instances of a few hundred customers with windows
/// expressed in minutes over a working day.
///
/// # Examples
///
/// ```
/// use u_aco_routing::config::{AcoConfig, FailurePolicy};
///
/// let config = AcoConfig::default()
///     .with_iterations(50)
///     .with_number_of_ants(10)
///     .with_seed(7)
///     .with_failure_policy(FailurePolicy::AbortRun);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.r0, 85);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Probability (in percent, 0..=100) of picking the best-scoring customer
    /// instead of sampling.
    pub r0: u32,
    /// Initial trail strength on every edge.
    pub pheromone_init: f64,
    /// Ants per iteration.
    pub number_of_ants: usize,
    /// Exponent applied to trail strength (α).
    pub pheromone_param: f64,
    /// Exponent applied to the heuristic value (β).
    pub heuristic_param: f64,
    /// Evaporation used for the per-ant update.
    pub evaporation_factor: f64,
    /// Evaporation used for the per-iteration update with the best route.
    pub g_evaporation_factor: f64,
    /// Number of iterations.
    pub iterations: usize,
    /// Weight of window urgency versus travel time in the heuristic.
    pub w1: f64,
    /// Vehicle speed in distance units per minute.
    pub speed: f64,
    /// Consecutive failed selections an ant tolerates before giving up.
    pub soft_lock_limit: usize,
    /// Handling of ants that give up.
    pub failure_policy: FailurePolicy,
    /// Random seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            r0: 85,
            pheromone_init: 5.0,
            number_of_ants: 15,
            pheromone_param: 1.0,
            heuristic_param: 10.0,
            evaporation_factor: 0.07,
            g_evaporation_factor: 0.7,
            iterations: 700,
            w1: 0.3,
            speed: 20.0,
            soft_lock_limit: 20,
            failure_policy: FailurePolicy::SkipAnt,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the exploitation probability in percent.
    pub fn with_r0(mut self, r0: u32) -> Self {
        self.r0 = r0;
        self
    }

    /// Sets the initial trail strength.
    pub fn with_pheromone_init(mut self, value: f64) -> Self {
        self.pheromone_init = value;
        self
    }

    /// Sets the number of ants per iteration.
    pub fn with_number_of_ants(mut self, n: usize) -> Self {
        self.number_of_ants = n;
        self
    }

    /// Sets the trail exponent (α).
    pub fn with_pheromone_param(mut self, alpha: f64) -> Self {
        self.pheromone_param = alpha;
        self
    }

    /// Sets the heuristic exponent (β).
    pub fn with_heuristic_param(mut self, beta: f64) -> Self {
        self.heuristic_param = beta;
        self
    }

    /// Sets the per-ant evaporation factor.
    pub fn with_evaporation_factor(mut self, rho: f64) -> Self {
        self.evaporation_factor = rho;
        self
    }

    /// Sets the per-iteration evaporation factor.
    pub fn with_g_evaporation_factor(mut self, rho: f64) -> Self {
        self.g_evaporation_factor = rho;
        self
    }

    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the urgency weight.
    pub fn with_w1(mut self, w1: f64) -> Self {
        self.w1 = w1;
        self
    }

    /// Sets the vehicle speed.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the soft-lock retry cap.
    pub fn with_soft_lock_limit(mut self, limit: usize) -> Self {
        self.soft_lock_limit = limit;
        self
    }

    /// Sets the failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every parameter against its valid range.
    pub fn validate(&self) -> Result<()> {
        fn check(ok: bool, msg: impl FnOnce() -> String) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(AcoError::InvalidConfig(msg()))
            }
        }

        check(self.r0 <= 100, || format!("r0 must be in 0..=100, got {}", self.r0))?;
        check(
            self.pheromone_init.is_finite() && self.pheromone_init > 0.0,
            || format!("pheromone_init must be positive, got {}", self.pheromone_init),
        )?;
        check(self.number_of_ants > 0, || {
            "number_of_ants must be positive".to_string()
        })?;
        check(
            self.pheromone_param.is_finite() && self.pheromone_param >= 0.0,
            || format!("pheromone_param must be non-negative, got {}", self.pheromone_param),
        )?;
        check(
            self.heuristic_param.is_finite() && self.heuristic_param >= 0.0,
            || format!("heuristic_param must be non-negative, got {}", self.heuristic_param),
        )?;
        check(
            self.evaporation_factor > 0.0 && self.evaporation_factor <= 1.0,
            || format!("evaporation_factor must be in (0, 1], got {}", self.evaporation_factor),
        )?;
        check(
            self.g_evaporation_factor > 0.0 && self.g_evaporation_factor <= 1.0,
            || {
                format!(
                    "g_evaporation_factor must be in (0, 1], got {}",
                    self.g_evaporation_factor
                )
            },
        )?;
        check(self.iterations > 0, || "iterations must be positive".to_string())?;
        check((0.0..=1.0).contains(&self.w1), || {
            format!("w1 must be in [0, 1], got {}", self.w1)
        })?;
        check(self.speed.is_finite() && self.speed > 0.0, || {
            format!("speed must be positive, got {}", self.speed)
        })?;
        Ok(())
    }
}
