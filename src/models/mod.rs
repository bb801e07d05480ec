//! Domain model types for multi-depot routing with time windows.
//!
//! Provides the core abstractions: planar locations, customers with service
//! times and time windows, depots, the instance tying them to one node-index
//! space, routes split into per-vehicle legs, and the run solution.

mod customer;
mod depot;
mod instance;
mod point;
mod route;
mod solution;

pub use customer::{Customer, TimeWindow};
pub use depot::Depot;
pub use instance::Instance;
pub use point::{Location, Point};
pub use route::{Leg, Route};
pub use solution::{Solution, Violation, ViolationType};
