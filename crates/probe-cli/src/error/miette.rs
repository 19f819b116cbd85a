//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use probe_graph::{GraphErrors, ResolveError};

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Resolve(ResolveError::Graph(errors)) => graph_errors_to_miette(&errors),
        CliError::Resolve(ResolveError::UnsupportedExtension { path }) => miette::miette!(
            help = "Checks must be .js or .ts files",
            "Unsupported file extension: {}",
            path.display()
        ),
        CliError::Config(e) => miette::miette!(
            help = "Check probe.toml syntax and field types, or PROBE_* environment variables",
            "Configuration error: {}",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert collected graph problems to a miette Report
pub fn graph_errors_to_miette(errors: &GraphErrors) -> Report {
    let mut hints = Vec::new();
    if !errors.missing_files.is_empty() {
        hints.push("Check relative import paths; directories and index files are not resolved");
    }
    if !errors.unsupported_packages.is_empty() {
        hints.push("Run `probe packages` to list what the runtime provides");
    }

    let summary = format!(
        "Dependency check failed with {} problem(s)\n\n{}",
        errors.problem_count(),
        errors
    );

    if hints.is_empty() {
        miette::miette!("{}", summary)
    } else {
        miette::miette!(help = hints.join("\n"), "{}", summary)
    }
}
