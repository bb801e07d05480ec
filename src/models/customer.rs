//! Customer and time window types, plus the heuristic score used by the ants.

use super::point::{Location, Point};

/// Lower bound on the heuristic denominator.
///
/// Keeps the score finite when a customer sits on top of its origin and the
/// urgency weight is zero.
const MIN_DENOMINATOR: f64 = 1e-9;

/// A time window constraint for service at a customer location.
///
/// The vehicle must arrive no later than `due` and may arrive as early as
/// `ready` (waiting is allowed if early).
///
/// # Examples
///
/// ```
/// use u_aco_routing::models::TimeWindow;
///
/// let tw = TimeWindow::new(100.0, 200.0).unwrap();
/// assert!(tw.ready() <= tw.due());
/// assert!(tw.contains(150.0));
/// assert!(!tw.contains(250.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    ready: f64,
    due: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if `ready > due` or either value is non-finite.
    pub fn new(ready: f64, due: f64) -> Option<Self> {
        if !ready.is_finite() || !due.is_finite() || ready > due {
            return None;
        }
        Some(Self { ready, due })
    }

    /// Earliest allowable arrival time.
    pub fn ready(&self) -> f64 {
        self.ready
    }

    /// Latest allowable arrival time.
    pub fn due(&self) -> f64 {
        self.due
    }

    /// Returns `true` if the given time falls within this window.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.ready && time <= self.due
    }

    /// Time at which service can begin when arriving at `arrival`.
    ///
    /// Early vehicles wait for the window to open.
    pub fn service_start(&self, arrival: f64) -> f64 {
        arrival.max(self.ready)
    }

    /// Returns `true` if arriving at the given time violates this window.
    pub fn is_violated(&self, arrival: f64) -> bool {
        arrival > self.due
    }
}

/// A customer to be served by exactly one vehicle.
///
/// Customers are identified by their index in the instance's customer list;
/// that index is the node id used by the pheromone map and the ants.
///
/// # Examples
///
/// ```
/// use u_aco_routing::models::{Customer, Depot, TimeWindow};
///
/// let depot = Depot::new(0.0, 0.0);
/// let c = Customer::new(0.0, 40.0, 20.0, TimeWindow::new(0.0, 900.0).unwrap());
/// // 40 units at 20 units/minute from a depot: 2 minutes of travel.
/// assert!((c.urgency(0.0, &depot, 20.0) - 898.0).abs() < 1e-10);
/// assert!(c.heuristic_value(0.0, &depot, 20.0, 0.0).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Customer {
    point: Point,
    service_time: f64,
    time_window: TimeWindow,
}

impl Customer {
    /// Creates a customer at `(x, y)` with the given service duration and window.
    pub fn new(x: f64, y: f64, service_time: f64, time_window: TimeWindow) -> Self {
        Self {
            point: Point::new(x, y),
            service_time: service_time.max(0.0),
            time_window,
        }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.point.x()
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.point.y()
    }

    /// Service window.
    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }

    /// Slack left before this customer's window closes when a vehicle leaves
    /// `from` at `time`.
    ///
    /// Negative urgency means the customer can no longer be reached in time.
    pub fn urgency<L: Location + ?Sized>(&self, time: f64, from: &L, speed: f64) -> f64 {
        self.time_window.due() - (time + from.service_time() + from.time_to(self, speed))
    }

    /// Desirability of travelling from `from` to this customer at `time`.
    ///
    /// `w1` trades window slack against travel time: `0.0` scores by travel
    /// time only (nearest neighbor), `1.0` by urgency only. Returns `None`
    /// when the window cannot be met.
    pub fn heuristic_value<L: Location + ?Sized>(
        &self,
        time: f64,
        from: &L,
        speed: f64,
        w1: f64,
    ) -> Option<f64> {
        let urgency = self.urgency(time, from, speed);
        if urgency < 0.0 {
            return None;
        }
        let travel = from.time_to(self, speed);
        let denominator = w1 * urgency + (1.0 - w1) * travel;
        Some(1.0 / denominator.max(MIN_DENOMINATOR))
    }
}

impl Location for Customer {
    fn point(&self) -> Point {
        self.point
    }

    fn service_time(&self) -> f64 {
        self.service_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Depot;

    fn wide() -> TimeWindow {
        TimeWindow::new(0.0, 900.0).expect("valid")
    }

    #[test]
    fn test_time_window_invalid() {
        assert!(TimeWindow::new(20.0, 10.0).is_none());
        assert!(TimeWindow::new(f64::NAN, 10.0).is_none());
        assert!(TimeWindow::new(10.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_time_window_service_start() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert_eq!(tw.service_start(5.0), 10.0);
        assert_eq!(tw.service_start(15.0), 15.0);
        assert!(tw.is_violated(20.1));
        assert!(!tw.is_violated(20.0));
    }

    #[test]
    fn test_negative_service_time_clamped() {
        let c = Customer::new(0.0, 0.0, -5.0, wide());
        assert_eq!(c.service_time(), 0.0);
    }

    #[test]
    fn test_urgency_includes_origin_service() {
        let from = Customer::new(0.0, 0.0, 20.0, wide());
        let to = Customer::new(20.0, 0.0, 20.0, TimeWindow::new(0.0, 100.0).expect("valid"));
        // 100 - (10 + 20 + 1)
        assert!((to.urgency(10.0, &from, 20.0) - 69.0).abs() < 1e-10);
    }

    #[test]
    fn test_heuristic_infeasible_iff_negative_urgency() {
        let depot = Depot::new(0.0, 0.0);
        let c = Customer::new(100.0, 0.0, 0.0, TimeWindow::new(0.0, 5.0).expect("valid"));
        // 5 minutes of travel at speed 20.
        assert!(c.heuristic_value(0.0, &depot, 20.0, 0.5).is_some());
        assert!(c.heuristic_value(0.1, &depot, 20.0, 0.5).is_none());
    }

    #[test]
    fn test_heuristic_pure_distance() {
        let depot = Depot::new(0.0, 0.0);
        let c = Customer::new(40.0, 0.0, 0.0, wide());
        let h = c.heuristic_value(0.0, &depot, 20.0, 0.0).expect("feasible");
        assert!((h - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_heuristic_pure_urgency() {
        let depot = Depot::new(0.0, 0.0);
        let c = Customer::new(40.0, 0.0, 0.0, TimeWindow::new(0.0, 6.0).expect("valid"));
        let h = c.heuristic_value(0.0, &depot, 20.0, 1.0).expect("feasible");
        assert!((h - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_heuristic_colocated_is_finite() {
        let depot = Depot::new(1.0, 1.0);
        let c = Customer::new(1.0, 1.0, 0.0, wide());
        let h = c.heuristic_value(0.0, &depot, 20.0, 0.0).expect("feasible");
        assert!(h.is_finite());
        assert!(h > 0.0);
    }
}
