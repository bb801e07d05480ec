//! CSV loading of customers and depots.
//!
//! Both files are headerless and `;`-delimited. Customer rows are
//! `x;y;window_start;window_end`; depot rows start with `x;y` and any further
//! columns are ignored. Rows that cannot be parsed are skipped with a warning.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{Customer, Depot, TimeWindow};

#[derive(Debug, Deserialize)]
struct CustomerRecord {
    x: f64,
    y: f64,
    window_start: f64,
    window_end: f64,
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b';')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Reads customers from `input`, giving each the same `service_time`.
///
/// # Examples
///
/// ```
/// use u_aco_routing::io::read_customers;
///
/// let data = "1;0;0;900\n2;0;60;120\nnot;a;row\n";
/// let customers = read_customers(data.as_bytes(), 20.0).unwrap();
/// assert_eq!(customers.len(), 2);
/// assert_eq!(customers[1].time_window().ready(), 60.0);
/// ```
pub fn read_customers<R: Read>(input: R, service_time: f64) -> Result<Vec<Customer>> {
    let mut customers = Vec::new();
    for (line, record) in reader(input).records().enumerate() {
        let record = record?;
        let parsed: CustomerRecord = match record.deserialize(None) {
            Ok(r) => r,
            Err(e) => {
                warn!(line = line + 1, error = %e, "skipping customer row");
                continue;
            }
        };
        let Some(tw) = TimeWindow::new(parsed.window_start, parsed.window_end) else {
            warn!(line = line + 1, "skipping customer row with invalid time window");
            continue;
        };
        customers.push(Customer::new(parsed.x, parsed.y, service_time, tw));
    }
    debug!(count = customers.len(), "customers loaded");
    Ok(customers)
}

/// Reads depots from `input`.
///
/// # Examples
///
/// ```
/// use u_aco_routing::io::read_depots;
///
/// let depots = read_depots("0;0;0;900\n10;10\n".as_bytes()).unwrap();
/// assert_eq!(depots.len(), 2);
/// assert_eq!(depots[1].x(), 10.0);
/// ```
pub fn read_depots<R: Read>(input: R) -> Result<Vec<Depot>> {
    let mut depots = Vec::new();
    for (line, record) in reader(input).records().enumerate() {
        let record = record?;
        match parse_point(&record) {
            Some((x, y)) => depots.push(Depot::new(x, y)),
            None => warn!(line = line + 1, "skipping depot row"),
        }
    }
    debug!(count = depots.len(), "depots loaded");
    Ok(depots)
}

/// Reads customers from a file.
pub fn read_customers_file<P: AsRef<Path>>(path: P, service_time: f64) -> Result<Vec<Customer>> {
    read_customers(File::open(path)?, service_time)
}

/// Reads depots from a file.
pub fn read_depots_file<P: AsRef<Path>>(path: P) -> Result<Vec<Depot>> {
    read_depots(File::open(path)?)
}

fn parse_point(record: &StringRecord) -> Option<(f64, f64)> {
    let x = record.get(0)?.parse().ok()?;
    let y = record.get(1)?.parse().ok()?;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customers_parsed() {
        let data = "1.5;2;0;900\n3;4;100;200\n";
        let customers = read_customers(data.as_bytes(), 20.0).expect("valid csv");
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].x(), 1.5);
        assert_eq!(customers[1].time_window().due(), 200.0);
    }

    #[test]
    fn test_bad_customer_rows_skipped() {
        let data = "1;2;0\nx;2;0;10\n1;2;50;10\n5;5;0;10\n";
        let customers = read_customers(data.as_bytes(), 0.0).expect("valid csv");
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].x(), 5.0);
    }

    #[test]
    fn test_depots_ignore_extra_columns() {
        let depots = read_depots(" 1 ; 2 ;0;900\nbad\n3;4\n".as_bytes()).expect("valid csv");
        assert_eq!(depots.len(), 2);
        assert_eq!(depots[0].y(), 2.0);
        assert_eq!(depots[1].x(), 3.0);
    }

    #[test]
    fn test_missing_file() {
        let err = read_depots_file("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, crate::error::AcoError::Io(_)));
    }
}
