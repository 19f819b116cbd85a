//! # probe-config
//!
//! Configuration for the probe dependency resolver.
//!
//! Values are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. `probe.toml` (or the `probe` field of `package.json`, or an explicit file)
//! 3. `PROBE_*` environment variables, nested with `__`
//!
//! ```no_run
//! use probe_config::ConfigDiscovery;
//!
//! let config = ConfigDiscovery::new(".").load()?;
//! let resolver = config.resolver();
//! # Ok::<(), probe_config::ConfigError>(())
//! ```

mod config;
mod discovery;
mod error;

pub use config::{AllowListSettings, ProbeConfig, ResolverSettings};
pub use discovery::{CONFIG_FILE_NAME, ConfigDiscovery, ENV_PREFIX};
pub use error::{ConfigError, Result};
