//! # u-aco-routing
//!
//! Multi-depot vehicle routing with time windows, solved with Ant Colony
//! Optimization.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Customer, Depot, Instance, Route, Solution)
//! - [`pheromone`] — Pheromone trail matrix with evaporation and reinforcement
//! - [`colony`] — Node selection, ant route construction, and the colony loop
//! - [`evaluation`] — Route timing, coverage and time window checks
//! - [`config`] — Colony parameters
//! - [`io`] — CSV loading of instances and writing of routes
//! - [`error`] — Crate error type
//!
//! ## Example
//!
//! ```
//! use u_aco_routing::{solve, AcoConfig};
//! use u_aco_routing::models::{Customer, Depot, Instance, TimeWindow};
//!
//! let tw = TimeWindow::new(0.0, 900.0).unwrap();
//! let instance = Instance::new(
//!     vec![Customer::new(1.0, 0.0, 20.0, tw), Customer::new(2.0, 0.0, 20.0, tw)],
//!     vec![Depot::new(0.0, 0.0)],
//! )
//! .unwrap();
//!
//! let solution = solve(&instance, &AcoConfig::default().with_iterations(10).with_seed(1)).unwrap();
//! assert_eq!(solution.route().num_served(), 2);
//! ```

pub mod colony;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod pheromone;

pub use colony::solve;
pub use config::{AcoConfig, FailurePolicy};
pub use error::{AcoError, Result};
