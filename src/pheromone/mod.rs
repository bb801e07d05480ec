//! Pheromone trails shared by all ants of a colony.
//!
//! Provides a dense trail matrix over customers and depots with evaporation
//! and route-based reinforcement.

mod map;

pub use map::PheromoneMap;
