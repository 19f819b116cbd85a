//! Error handling for the probe CLI.
//!
//! Library errors convert into [`CliError`] via `#[from]`; `main` turns the
//! final error into a miette report with [`cli_error_to_miette`].

mod miette;

use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] probe_config::ConfigError),

    /// The entrypoint was rejected or the dependency graph has problems
    #[error(transparent)]
    Resolve(#[from] probe_graph::ResolveError),

    /// The current directory could not be determined
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use probe_graph::{GraphErrors, ResolveError};
    use std::path::PathBuf;

    #[test]
    fn test_resolve_error_is_transparent() {
        let err: CliError = ResolveError::RelativeEntrypoint {
            path: PathBuf::from("checks/a.js"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Entrypoint must be an absolute path: 'checks/a.js'"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CliError = probe_config::ConfigError::NotFound(PathBuf::from("probe.toml")).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("probe.toml"));
    }

    #[test]
    fn test_graph_errors_conversion() {
        let mut errors = GraphErrors::default();
        errors.missing_files.push(PathBuf::from("/p/missing.js"));
        let err: CliError = ResolveError::from(errors).into();
        assert!(err.to_string().contains("/p/missing.js"));
    }
}
