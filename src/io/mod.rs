//! CSV adapters for instances and routes.
//!
//! - [`read_customers`] / [`read_depots`] — load `;`-delimited coordinate files
//! - [`write_routes`] — store a route as one leg per line

mod reader;
mod writer;

pub use reader::{read_customers, read_customers_file, read_depots, read_depots_file};
pub use writer::{write_routes, write_routes_file};
