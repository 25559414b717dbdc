//! Command-line interface for the errand router.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod route;

pub use error::CliError;

use route::RouteArgs;

pub(crate) const ARG_ROUTE_REQUEST: &str = "request";
pub(crate) const ARG_ROUTE_PROVIDER: &str = "provider";
pub(crate) const ARG_ROUTE_OSRM_BASE_URL: &str = "osrm-base-url";
pub(crate) const ARG_ROUTE_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ENV_ROUTE_REQUEST: &str = "ERRAND_CMDS_ROUTE_REQUEST_PATH";

/// Run the errand CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments fail to parse, configuration cannot be
/// resolved, the request cannot be loaded, or routing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => route::run_route(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "errand",
    about = "Plan multi-stop errand routes ordered by urgency",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Optimise a route for the stops in a JSON request file.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
