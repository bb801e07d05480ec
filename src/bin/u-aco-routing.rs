//! Command-line front end.
//!
//! ```text
//! u-aco-routing [customers.csv] [depots.csv] [config.json] [routes.csv]
//! ```
//!
//! Customers get a 20 minute service time. Set `RUST_LOG=debug` to follow the
//! colony iteration by iteration.

use std::env;
use std::error::Error;
use std::fs;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use u_aco_routing::models::Instance;
use u_aco_routing::{io, solve, AcoConfig, AcoError};

const SERVICE_TIME: f64 = 20.0;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();
}

fn load_config(path: Option<&str>) -> Result<AcoConfig, AcoError> {
    let Some(path) = path else {
        return Ok(AcoConfig::default());
    };
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| AcoError::Parse(format!("{path}: {e}")))
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let customers_path = args.first().map_or("customers.csv", String::as_str);
    let depots_path = args.get(1).map_or("depots.csv", String::as_str);
    let config_path = args.get(2).map(String::as_str).filter(|p| !p.is_empty());
    let output_path = args.get(3).map_or("routes.csv", String::as_str);

    let config = load_config(config_path)?;
    let customers = io::read_customers_file(customers_path, SERVICE_TIME)?;
    let depots = io::read_depots_file(depots_path)?;
    let instance = Instance::new(customers, depots)?;

    let solution = solve(&instance, &config)?;
    info!(
        best_iteration = solution.best_iteration(),
        ants_failed = solution.ants_failed(),
        "search done"
    );

    let route = solution.into_route();
    io::write_routes_file(output_path, &route)?;
    info!(path = output_path, "routes saved");

    println!(
        "finished. Length: {:.2} vehicle counter: {}",
        route.distance(),
        route.num_legs()
    );
    Ok(())
}
