//! Solution and violation types.

use super::Route;

/// A type of defect found when checking a route against an instance.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A customer is not visited by any leg.
    MissingCustomer {
        /// Customer index.
        customer_id: usize,
    },
    /// A customer is visited more than once.
    DuplicateVisit {
        /// Customer index.
        customer_id: usize,
    },
    /// A leg references a depot or customer that does not exist.
    UnknownNode {
        /// Leg index in the route.
        leg_index: usize,
        /// The offending index.
        node_id: usize,
    },
    /// A leg has a depot but no customers.
    EmptyLeg {
        /// Leg index in the route.
        leg_index: usize,
    },
    /// Arrival after the customer's time window closes.
    TimeWindowViolated {
        /// Customer index where violation occurred.
        customer_id: usize,
        /// Actual arrival time.
        arrival: f64,
        /// Time window due date.
        due: f64,
    },
}

/// A defect in a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Outcome of a colony run: the best route plus run statistics.
#[derive(Debug, Clone)]
pub struct Solution {
    route: Route,
    best_iteration: usize,
    iterations: usize,
    ants_completed: usize,
    ants_failed: usize,
    history: Vec<f64>,
}

impl Solution {
    /// Creates a solution record.
    pub fn new(
        route: Route,
        best_iteration: usize,
        iterations: usize,
        ants_completed: usize,
        ants_failed: usize,
        history: Vec<f64>,
    ) -> Self {
        Self {
            route,
            best_iteration,
            iterations,
            ants_completed,
            ants_failed,
            history,
        }
    }

    /// Best route found.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Consumes the solution, returning the best route.
    pub fn into_route(self) -> Route {
        self.route
    }

    /// Total distance of the best route.
    pub fn distance(&self) -> f64 {
        self.route.distance()
    }

    /// Number of vehicles (legs) of the best route.
    pub fn num_vehicles(&self) -> usize {
        self.route.num_legs()
    }

    /// Iteration (0-based) in which the best route was found.
    pub fn best_iteration(&self) -> usize {
        self.best_iteration
    }

    /// Iterations executed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Ants that completed a route.
    pub fn ants_completed(&self) -> usize {
        self.ants_completed
    }

    /// Ants that exhausted their soft-lock retries.
    pub fn ants_failed(&self) -> usize {
        self.ants_failed
    }

    /// Best-so-far distance at the end of each iteration.
    ///
    /// Iterations that ended without any solution are recorded as infinity.
    pub fn history(&self) -> &[f64] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Leg;

    #[test]
    fn test_solution_accessors() {
        let route = Route::new(vec![Leg::with_customers(0, vec![0, 1])], 7.0);
        let sol = Solution::new(route, 3, 10, 40, 2, vec![9.0, 7.0]);
        assert_eq!(sol.distance(), 7.0);
        assert_eq!(sol.num_vehicles(), 1);
        assert_eq!(sol.best_iteration(), 3);
        assert_eq!(sol.ants_completed() + sol.ants_failed(), 42);
        assert_eq!(sol.history(), &[9.0, 7.0]);

        let route = sol.into_route();
        assert_eq!(route.node_ids(), vec![vec![0, 0, 1]]);
    }

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::DuplicateVisit { customer_id: 4 });
        assert_eq!(v.kind, ViolationType::DuplicateVisit { customer_id: 4 });
    }
}
