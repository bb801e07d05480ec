//! CSV output of a route: one leg per line, depot index first.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;
use crate::models::Route;

/// Writes each leg of `route` as a `;`-separated line of node indices.
///
/// # Examples
///
/// ```
/// use u_aco_routing::io::write_routes;
/// use u_aco_routing::models::{Leg, Route};
///
/// let route = Route::new(vec![Leg::with_customers(1, vec![2, 0]), Leg::with_customers(0, vec![1])], 9.0);
/// let mut out = Vec::new();
/// write_routes(&mut out, &route).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1;2;0\n0;1\n");
/// ```
pub fn write_routes<W: Write>(output: W, route: &Route) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(b';')
        .flexible(true)
        .from_writer(output);
    for leg in route.legs() {
        writer.write_record(leg.node_ids().iter().map(|id| id.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the route to a file, replacing it if it exists.
pub fn write_routes_file<P: AsRef<Path>>(path: P, route: &Route) -> Result<()> {
    write_routes(File::create(path)?, route)
}
