//! Planar points and the [`Location`] abstraction shared by customers and depots.

/// A point in the plane.
///
/// # Examples
///
/// ```
/// use u_aco_routing::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Something a vehicle can depart from.
///
/// Both customers and depots are locations. A depot has no service time, so
/// leaving it costs only the travel time.
pub trait Location {
    /// Position of this location.
    fn point(&self) -> Point;

    /// Minutes spent at this location before the vehicle may leave.
    fn service_time(&self) -> f64 {
        0.0
    }

    /// Euclidean distance to another location.
    fn distance_to<L: Location + ?Sized>(&self, other: &L) -> f64 {
        self.point().distance_to(&other.point())
    }

    /// Travel time to another location at the given speed (units/minute).
    fn time_to<L: Location + ?Sized>(&self, other: &L, speed: f64) -> f64 {
        self.distance_to(other) / speed
    }
}

impl Location for Point {
    fn point(&self) -> Point {
        *self
    }
}
