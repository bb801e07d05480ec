//! Leg and route types.

/// The part of a route driven by one vehicle.
///
/// A leg starts at a depot and visits its customers in order. The depot is
/// stored separately from the customer sequence because depot and customer
/// indices live in different lists.
///
/// # Examples
///
/// ```
/// use u_aco_routing::models::Leg;
///
/// let mut leg = Leg::new(1);
/// leg.push(4);
/// leg.push(2);
/// assert_eq!(leg.node_ids(), vec![1, 4, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    depot: usize,
    customers: Vec<usize>,
}

impl Leg {
    /// Creates an empty leg starting at the given depot.
    pub fn new(depot: usize) -> Self {
        Self {
            depot,
            customers: Vec::new(),
        }
    }

    /// Creates a leg with a known customer sequence.
    pub fn with_customers(depot: usize, customers: Vec<usize>) -> Self {
        Self { depot, customers }
    }

    /// Depot this leg starts from.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Moves the leg to another depot.
    pub fn set_depot(&mut self, depot: usize) {
        self.depot = depot;
    }

    /// Customers in visit order.
    pub fn customers(&self) -> &[usize] {
        &self.customers
    }

    /// Appends a customer.
    pub fn push(&mut self, customer: usize) {
        self.customers.push(customer);
    }

    /// Number of customers on this leg.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if no customer has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Depot index followed by the customer indices.
    pub fn node_ids(&self) -> Vec<usize> {
        std::iter::once(self.depot)
            .chain(self.customers.iter().copied())
            .collect()
    }
}

/// A set of legs covering the customers, with its total travelled distance.
///
/// # Examples
///
/// ```
/// use u_aco_routing::models::{Leg, Route};
///
/// let route = Route::new(
///     vec![Leg::with_customers(0, vec![0, 1]), Leg::with_customers(1, vec![2])],
///     12.5,
/// );
/// assert_eq!(route.num_legs(), 2);
/// assert_eq!(route.num_served(), 3);
/// assert_eq!(route.distance(), 12.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    legs: Vec<Leg>,
    distance: f64,
}

impl Route {
    /// Creates a route from its legs and total distance.
    pub fn new(legs: Vec<Leg>, distance: f64) -> Self {
        Self { legs, distance }
    }

    /// Legs in construction order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs (vehicles used).
    pub fn num_legs(&self) -> usize {
        self.legs.len()
    }

    /// Total number of customer visits across all legs.
    pub fn num_served(&self) -> usize {
        self.legs.iter().map(Leg::len).sum()
    }

    /// Total travelled distance.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Each leg as `[depot, customer, ...]`.
    pub fn node_ids(&self) -> Vec<Vec<usize>> {
        self.legs.iter().map(Leg::node_ids).collect()
    }
}
