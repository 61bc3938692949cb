//! Command-line interface for planning trips with Tripwise.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

const ARG_PLAN_REQUEST: &str = "request";
const ARG_PLAN_CATALOGUE: &str = "catalogue";
const ARG_PLAN_MODE: &str = "mode";
const ARG_PLAN_SEED: &str = "seed";
const ARG_PLAN_SAME_DAY_TRAVEL_HOURS: &str = "same-day-travel-hours";
const ENV_PLAN_REQUEST: &str = "TRIPWISE_CMDS_PLAN_REQUEST_PATH";

/// Run the Tripwise CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tripwise",
    about = "Plan multi-destination trips: feasibility, transport and itinerary",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a trip described by a JSON request.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
