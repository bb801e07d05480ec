//! Error type shared by the colony, the pheromone map, and the I/O adapters.

use std::fmt::Display;

/// Errors produced while configuring, running, or feeding the solver.
#[derive(Debug)]
pub enum AcoError {
    /// A configuration parameter is outside its valid range.
    InvalidConfig(String),
    /// The instance has no customers or no depots.
    EmptyInstance {
        /// Number of customers supplied.
        customers: usize,
        /// Number of depots supplied.
        depots: usize,
    },
    /// An ant ran out of depot restarts without reaching every customer.
    SoftLockExceeded {
        /// Consecutive failed selections when the ant gave up.
        attempts: usize,
        /// Customers still unvisited.
        unvisited: usize,
    },
    /// A pheromone update was requested for a route whose length cannot
    /// scale the deposit (zero, negative, or non-finite).
    DegenerateRoute {
        /// The offending route length.
        distance: f64,
    },
    /// A route names a depot or customer the pheromone map does not have.
    RouteMismatch {
        /// Leg holding the offending node.
        leg_index: usize,
        /// The offending depot or customer index.
        node: usize,
    },
    /// No ant completed a route during the whole run.
    NoFeasibleRoute {
        /// Ants that failed.
        failed_ants: usize,
    },
    /// An I/O error occurred while reading or writing a file.
    Io(std::io::Error),
    /// The CSV reader or writer failed.
    Csv(csv::Error),
    /// A configuration file could not be parsed.
    Parse(String),
}

impl Display for AcoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::EmptyInstance { customers, depots } => write!(
                f,
                "Instance needs at least one customer and one depot (got {customers} customers, {depots} depots)"
            ),
            Self::SoftLockExceeded {
                attempts,
                unvisited,
            } => write!(
                f,
                "Not possible to reach a customer: gave up after {attempts} attempts with {unvisited} customers unvisited"
            ),
            Self::DegenerateRoute { distance } => {
                write!(f, "Cannot deposit pheromone for a route of length {distance}")
            }
            Self::RouteMismatch { leg_index, node } => {
                write!(f, "Leg {leg_index} refers to unknown node {node}")
            }
            Self::NoFeasibleRoute { failed_ants } => {
                write!(f, "No ant completed a route ({failed_ants} ants failed)")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(e) => write!(f, "CSV error: {e}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for AcoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AcoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for AcoError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AcoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_soft_lock() {
        let e = AcoError::SoftLockExceeded {
            attempts: 21,
            unvisited: 3,
        };
        let msg = e.to_string();
        assert!(msg.contains("21"));
        assert!(msg.contains("3 customers"));
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: AcoError = io.into();
        assert!(matches!(e, AcoError::Io(_)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
