//! Helpers shared by commands.

use std::path::{Path, PathBuf};

use probe_config::{ConfigDiscovery, ProbeConfig};

use crate::error::{CliError, Result};

pub(crate) fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(CliError::CurrentDir)
}

/// Load configuration from an explicit file, or discover it under `cwd`.
pub(crate) fn load_config(cwd: &Path, explicit: Option<&Path>) -> Result<ProbeConfig> {
    let discovery = ConfigDiscovery::new(cwd);
    let config = match explicit {
        Some(path) => discovery.load_from(path)?,
        None => discovery.load()?,
    };
    tracing::debug!(
        max_parallel_reads = config.resolver.max_parallel_reads,
        extra_packages = config.allow_list.extra_packages.len(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Anchor a command-line path at `cwd`; the resolver only accepts absolute paths.
pub(crate) fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
