//! Command-line interface for the courier route engine.
//!
//! `courier optimise request.json` orders a rider's pending drop-offs and
//! prints the route with its summary as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod optimise;

pub use error::CliError;

use optimise::OptimiseArgs;

const ARG_REQUEST: &str = "request";
const ARG_OUTPUT: &str = "output";
const ARG_AVERAGE_SPEED: &str = "average-speed-kmh";
const ARG_EARTH_RADIUS: &str = "earth-radius-km";
const ARG_COORDINATE_POLICY: &str = "coordinate-policy";
const ENV_REQUEST: &str = "COURIER_CMDS_OPTIMISE_REQUEST_PATH";

/// Run the courier CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments, configuration, the request file or
/// the optimiser fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimise(args) => optimise::run_optimise(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Order a rider's pending deliveries into a visiting sequence",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order delivery stops nearest-first and report ETAs.
    Optimise(OptimiseArgs),
}

#[cfg(test)]
mod tests;
