use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available probe subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the local files a check needs and verify its packages
    ///
    /// Walks every relative import reachable from ENTRY. Missing files, parse
    /// errors and unsupported packages are all reported together.
    Deps(DepsArgs),

    /// List the packages available in the runtime
    ///
    /// Includes built-in modules, the runtime's third-party packages and any
    /// extras from configuration.
    Packages(PackagesArgs),
}

/// Arguments for the deps command
#[derive(Args, Debug)]
pub struct DepsArgs {
    /// Check script to start from (.js or .ts)
    ///
    /// Relative paths are resolved against the current directory.
    #[arg(value_name = "ENTRY")]
    pub entry: PathBuf,

    /// Print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of probe.toml discovery
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the packages command
#[derive(Args, Debug)]
pub struct PackagesArgs {
    /// Print the allow-list as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of probe.toml discovery
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
