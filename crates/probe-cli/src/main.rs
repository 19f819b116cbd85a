//! Probe CLI - dependency checks for monitoring scripts.
//!
//! Parses arguments, initializes logging and dispatches to a command.

use clap::Parser;
use miette::Result;
use probe_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let result = match args.command {
        cli::Command::Deps(deps_args) => commands::deps_execute(deps_args).await,
        cli::Command::Packages(packages_args) => commands::packages_execute(packages_args),
    };

    result.map_err(error::cli_error_to_miette)
}
