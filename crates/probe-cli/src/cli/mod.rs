//! Command-line interface definition for probe.
//!
//! # Command Structure
//!
//! - `probe deps <ENTRY>` - resolve a check's local files and verify its packages
//! - `probe packages` - print the packages the runtime provides

mod commands;

use clap::Parser;

pub use commands::{Command, DepsArgs, PackagesArgs};

/// Probe - dependency checks for monitoring scripts
#[derive(Parser, Debug)]
#[command(
    name = "probe",
    version,
    about = "Resolve and verify the dependencies of monitoring check scripts",
    long_about = "Probe walks a check script's local imports and makes sure every package\n\
                  it uses is available in the remote runtime before the check is uploaded."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
