//! Route evaluation: visit timing, distance, coverage and window checks.

mod evaluator;

pub use evaluator::{RouteEvaluator, Visit};
