//! File-based config discovery for CLI use
//!
//! Layers defaults, a config file and `PROBE_` environment variables into a
//! single [`ProbeConfig`].

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};

use crate::config::ProbeConfig;
use crate::error::{ConfigError, Result};

/// Conventional config file name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "probe.toml";

/// Prefix for environment overrides; nested keys are separated by `__`,
/// e.g. `PROBE_RESOLVER__MAX_PARALLEL_READS=4`.
pub const ENV_PREFIX: &str = "PROBE_";

const PACKAGE_JSON: &str = "package.json";
const PACKAGE_JSON_KEY: &str = "probe";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use probe_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. `probe.toml`
    /// 2. `package.json` with a `probe` field
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE_NAME);
        if toml_path.is_file() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        if pkg_path.is_file() && Figment::from(Json::file(&pkg_path)).contains(PACKAGE_JSON_KEY) {
            return Some(pkg_path);
        }

        None
    }

    /// Load the discovered config, falling back to defaults when no file exists.
    ///
    /// Environment overrides apply either way.
    pub fn load(&self) -> Result<ProbeConfig> {
        let figment = match self.find() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                with_file(defaults(), &path)?
            }
            None => {
                tracing::debug!(root = %self.root.display(), "No config file found, using defaults");
                defaults()
            }
        };

        extract(figment)
    }

    /// Load config from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist, unlike
    /// [`load`](Self::load) which treats a missing file as "use defaults".
    pub fn load_from(&self, path: &Path) -> Result<ProbeConfig> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        if !path.is_file() {
            return Err(ConfigError::NotFound(path));
        }

        tracing::debug!(path = %path.display(), "Loading explicit config file");
        extract(with_file(defaults(), &path)?)
    }
}

fn defaults() -> Figment {
    Figment::new().merge(Serialized::defaults(ProbeConfig::default()))
}

fn with_file(figment: Figment, path: &Path) -> Result<Figment> {
    if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
        return Ok(figment.merge(Figment::from(Json::file(path)).focus(PACKAGE_JSON_KEY)));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(figment.merge(Toml::file(path))),
        Some("json") => Ok(figment.merge(Json::file(path))),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn extract(figment: Figment) -> Result<ProbeConfig> {
    let config: ProbeConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()?;
    config.validate()?;
    Ok(config)
}
