//! Logging infrastructure for the probe CLI.
//!
//! Logs go to stderr so stdout stays clean for dependency lists and JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use probe_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("Resolving dependencies");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "probe_cli=debug,probe_graph=debug,probe_config=debug";
const QUIET_FILTER: &str = "probe_cli=error,probe_graph=error,probe_config=error";
const DEFAULT_FILTER: &str = "probe_cli=info,probe_graph=warn,probe_config=warn";

/// Initialize the tracing subscriber with the specified options.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for probe crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for the CLI, WARN for the libraries
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
