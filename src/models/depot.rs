//! Depot type.

use super::point::{Location, Point};

/// A depot vehicles start from.
///
/// Depots have no service time and no window. They are identified by their
/// index in the instance's depot list.
///
/// # Examples
///
/// ```
/// use u_aco_routing::models::{Depot, Location};
///
/// let d = Depot::new(10.0, 10.0);
/// assert_eq!(d.service_time(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Depot {
    point: Point,
}

impl Depot {
    /// Creates a depot at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point: Point::new(x, y),
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
}

impl Location for Depot {
    fn point(&self) -> Point {
        self.point
    }
}
