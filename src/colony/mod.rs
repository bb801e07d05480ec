//! Ant Colony Optimization for multi-depot routing with time windows.
//!
//! - [`NodeSelector`] — pseudo-random proportional choice of the next customer
//! - [`Ant`] — builds one complete route, splitting it into vehicle legs
//! - [`Colony`] — runs iterations of ants over a shared [`PheromoneMap`](crate::pheromone::PheromoneMap)
//! - [`solve`] — one-call entry point
//!
//! # Reference
//!
//! Gambardella, L.M., Taillard, É. & Agazzi, G. (1999). "MACS-VRPTW: A
//! Multiple Ant Colony System for Vehicle Routing Problems with Time
//! Windows", in *New Ideas in Optimization*, McGraw-Hill, 63-76.

mod ant;
mod runner;
mod selector;

pub use ant::Ant;
pub use runner::{solve, Colony};
pub use selector::{NodeSelector, Selection};
