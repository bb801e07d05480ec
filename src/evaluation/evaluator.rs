//! Route evaluator that recomputes timing and distance and checks coverage.

use crate::models::{Instance, Leg, Location, Route, Violation, ViolationType};

/// Timing of a single customer visit within a leg.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    /// Customer index being visited.
    pub customer_id: usize,
    /// Arrival time at this customer.
    pub arrival_time: f64,
    /// Time service begins (arrival, or window opening if early).
    pub service_start: f64,
    /// Departure time (service start + service duration).
    pub departure_time: f64,
}

/// Evaluates routes by recomputing visit timing and travelled distance, and
/// checking that every customer is served exactly once within its window.
///
/// Vehicles leave their depot at time zero, wait when they arrive before a
/// window opens, and do not return to the depot.
///
/// # Examples
///
/// ```
/// use u_aco_routing::models::{Customer, Depot, Instance, Leg, Route, TimeWindow};
/// use u_aco_routing::evaluation::RouteEvaluator;
///
/// let tw = TimeWindow::new(0.0, 900.0).unwrap();
/// let instance = Instance::new(
///     vec![Customer::new(3.0, 4.0, 5.0, tw), Customer::new(6.0, 8.0, 5.0, tw)],
///     vec![Depot::new(0.0, 0.0)],
/// )
/// .unwrap();
/// let evaluator = RouteEvaluator::new(&instance, 1.0);
/// let route = Route::new(vec![Leg::with_customers(0, vec![0, 1])], 10.0);
///
/// let (distance, violations) = evaluator.evaluate(&route);
/// assert!((distance - 10.0).abs() < 1e-10);
/// assert!(violations.is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    instance: &'a Instance,
    speed: f64,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given instance and vehicle speed.
    pub fn new(instance: &'a Instance, speed: f64) -> Self {
        Self { instance, speed }
    }

    /// Computes the visit schedule of one leg.
    ///
    /// Returns the visits, the travelled distance and any violations.
    /// Unknown depot or customer indices are reported and skipped.
    pub fn schedule_leg(&self, leg_index: usize, leg: &Leg) -> (Vec<Visit>, f64, Vec<Violation>) {
        let customers = self.instance.customers();
        let mut visits = Vec::with_capacity(leg.len());
        let mut violations = Vec::new();

        let Some(depot) = self.instance.depots().get(leg.depot()) else {
            violations.push(Violation::new(ViolationType::UnknownNode {
                leg_index,
                node_id: leg.depot(),
            }));
            return (visits, 0.0, violations);
        };

        if leg.is_empty() {
            violations.push(Violation::new(ViolationType::EmptyLeg { leg_index }));
        }

        let mut total_distance = 0.0;
        let mut current_time = 0.0;
        let mut prev: Option<usize> = None;

        for &cid in leg.customers() {
            let Some(customer) = customers.get(cid) else {
                violations.push(Violation::new(ViolationType::UnknownNode {
                    leg_index,
                    node_id: cid,
                }));
                continue;
            };

            let (distance, travel) = match prev {
                Some(p) => {
                    let origin = &customers[p];
                    (origin.distance_to(customer), origin.time_to(customer, self.speed))
                }
                None => (depot.distance_to(customer), depot.time_to(customer, self.speed)),
            };
            total_distance += distance;
            let arrival = current_time + travel;

            let tw = customer.time_window();
            if tw.is_violated(arrival) {
                violations.push(Violation::new(ViolationType::TimeWindowViolated {
                    customer_id: cid,
                    arrival,
                    due: tw.due(),
                }));
            }
            let service_start = tw.service_start(arrival);
            let departure = service_start + customer.service_time();

            visits.push(Visit {
                customer_id: cid,
                arrival_time: arrival,
                service_start,
                departure_time: departure,
            });

            current_time = departure;
            prev = Some(cid);
        }

        (visits, total_distance, violations)
    }

    /// Evaluates a whole route, returning `(distance, violations)`.
    ///
    /// A complete, feasible route has an empty violations list.
    pub fn evaluate(&self, route: &Route) -> (f64, Vec<Violation>) {
        let mut total_distance = 0.0;
        let mut all_violations = Vec::new();
        let mut visit_counts = vec![0usize; self.instance.num_customers()];

        for (idx, leg) in route.legs().iter().enumerate() {
            let (visits, distance, mut violations) = self.schedule_leg(idx, leg);
            for visit in &visits {
                visit_counts[visit.customer_id] += 1;
            }
            total_distance += distance;
            all_violations.append(&mut violations);
        }

        for (customer_id, &count) in visit_counts.iter().enumerate() {
            if count == 0 {
                all_violations.push(Violation::new(ViolationType::MissingCustomer {
                    customer_id,
                }));
            } else if count > 1 {
                all_violations.push(Violation::new(ViolationType::DuplicateVisit {
                    customer_id,
                }));
            }
        }

        (total_distance, all_violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Depot, TimeWindow};

    fn setup() -> Instance {
        let tw = TimeWindow::new(0.0, 900.0).expect("valid");
        Instance::new(
            vec![
                Customer::new(3.0, 4.0, 5.0, tw),
                Customer::new(6.0, 8.0, 5.0, tw),
                Customer::new(0.0, 10.0, 5.0, TimeWindow::new(20.0, 25.0).expect("valid")),
            ],
            vec![Depot::new(0.0, 0.0), Depot::new(0.0, 20.0)],
        )
        .expect("valid")
    }

    #[test]
    fn test_schedule_waits_for_window() {
        let instance = setup();
        let eval = RouteEvaluator::new(&instance, 1.0);
        let (visits, distance, violations) =
            eval.schedule_leg(0, &Leg::with_customers(1, vec![2]));
        assert!(violations.is_empty());
        assert!((distance - 10.0).abs() < 1e-10);
        assert!((visits[0].arrival_time - 10.0).abs() < 1e-10);
        assert!((visits[0].service_start - 20.0).abs() < 1e-10);
        assert!((visits[0].departure_time - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_late_arrival_reported() {
        let instance = setup();
        let eval = RouteEvaluator::new(&instance, 1.0);
        // depot 0 -> 0 (5), serve 5, -> 1 (5), serve 5, -> 2 (~6.3): arrival ~26.3
        let route = Route::new(vec![Leg::with_customers(0, vec![0, 1, 2])], 0.0);
        let (_, violations) = eval.evaluate(&route);
        assert!(violations
            .iter()
            .any(|v| matches!(v.kind, ViolationType::TimeWindowViolated { customer_id: 2, .. })));
    }

    #[test]
    fn test_missing_and_duplicate() {
        let instance = setup();
        let eval = RouteEvaluator::new(&instance, 1.0);
        let route = Route::new(
            vec![
                Leg::with_customers(0, vec![0, 1]),
                Leg::with_customers(1, vec![1]),
            ],
            0.0,
        );
        let (_, violations) = eval.evaluate(&route);
        assert!(violations.contains(&Violation::new(ViolationType::MissingCustomer {
            customer_id: 2
        })));
        assert!(violations.contains(&Violation::new(ViolationType::DuplicateVisit {
            customer_id: 1
        })));
    }

    #[test]
    fn test_unknown_nodes_and_empty_leg() {
        let instance = setup();
        let eval = RouteEvaluator::new(&instance, 1.0);
        let route = Route::new(
            vec![
                Leg::with_customers(5, vec![0]),
                Leg::with_customers(0, vec![9]),
                Leg::new(1),
            ],
            0.0,
        );
        let (_, violations) = eval.evaluate(&route);
        assert!(violations.contains(&Violation::new(ViolationType::UnknownNode {
            leg_index: 0,
            node_id: 5
        })));
        assert!(violations.contains(&Violation::new(ViolationType::UnknownNode {
            leg_index: 1,
            node_id: 9
        })));
        assert!(violations.contains(&Violation::new(ViolationType::EmptyLeg { leg_index: 2 })));
    }
}
