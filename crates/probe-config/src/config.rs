//! Configuration structure for the resolver.

use serde::{Deserialize, Serialize};

use probe_graph::{
    AllowList, DEFAULT_MAX_PARALLEL_READS, DependencyResolver, ResolverOptions,
    allow_list::package_name, specifier::is_local,
};

use crate::error::{ConfigError, Result};

/// Top-level probe configuration.
///
/// ```toml
/// [resolver]
/// max_parallel_reads = 4
///
/// [allow_list]
/// extra_packages = ["@acme/test-utils"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub resolver: ResolverSettings,

    #[serde(default)]
    pub allow_list: AllowListSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Files read and parsed concurrently per BFS layer.
    #[serde(default = "default_max_parallel_reads")]
    pub max_parallel_reads: usize,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            max_parallel_reads: default_max_parallel_reads(),
        }
    }
}

fn default_max_parallel_reads() -> usize {
    DEFAULT_MAX_PARALLEL_READS
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowListSettings {
    /// Packages provisioned on top of the runtime snapshot, for private runtimes.
    #[serde(default)]
    pub extra_packages: Vec<String>,
}

impl ProbeConfig {
    /// Reject values the resolver cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.resolver.max_parallel_reads == 0 {
            return Err(ConfigError::InvalidValue {
                field: "resolver.max_parallel_reads".to_string(),
                hint: "must be at least 1".to_string(),
            });
        }

        for name in &self.allow_list.extra_packages {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "allow_list.extra_packages".to_string(),
                    hint: "package names cannot be empty".to_string(),
                });
            }
            if is_local(name) {
                return Err(ConfigError::InvalidValue {
                    field: "allow_list.extra_packages".to_string(),
                    hint: format!("'{name}' is a file path, not a package name"),
                });
            }
            // Lookups use the normalized name, so `lodash/fp` could never match.
            let normalized = package_name(name);
            if normalized != name {
                return Err(ConfigError::InvalidValue {
                    field: "allow_list.extra_packages".to_string(),
                    hint: format!("'{name}' is not a package name; use '{normalized}'"),
                });
            }
        }

        Ok(())
    }

    /// The runtime snapshot plus any configured extras.
    pub fn allow_list(&self) -> AllowList {
        AllowList::runtime_default().with_packages(self.allow_list.extra_packages.iter().cloned())
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            max_parallel_reads: self.resolver.max_parallel_reads,
        }
    }

    /// A resolver built from this configuration.
    pub fn resolver(&self) -> DependencyResolver {
        DependencyResolver::new(self.allow_list()).with_options(self.resolver_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_parallelism() {
        let mut config = ProbeConfig::default();
        config.resolver.max_parallel_reads = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("resolver.max_parallel_reads"));
    }

    #[test]
    fn test_validate_rejects_paths_as_packages() {
        let mut config = ProbeConfig::default();
        config.allow_list.extra_packages = vec!["./local".to_string()];
        assert!(config.validate().is_err());

        config.allow_list.extra_packages = vec!["  ".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_subpaths_and_prefixes() {
        for (entry, expected) in [
            ("lodash/fp", "'lodash'"),
            ("node:fs", "'fs'"),
            ("@acme/pkg/sub", "'@acme/pkg'"),
        ] {
            let mut config = ProbeConfig::default();
            config.allow_list.extra_packages = vec![entry.to_string()];
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains(expected), "{entry}: {err}");
        }

        let mut config = ProbeConfig::default();
        config.allow_list.extra_packages = vec!["@acme/pkg".to_string(), "left-pad".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolver_uses_settings() {
        let mut config = ProbeConfig::default();
        config.resolver.max_parallel_reads = 3;
        config.allow_list.extra_packages = vec!["left-pad".to_string()];

        let resolver = config.resolver();
        assert_eq!(resolver.options().max_parallel_reads, 3);
        assert!(resolver.allow_list().contains("left-pad"));
        assert!(resolver.allow_list().contains("axios"));
    }
}
