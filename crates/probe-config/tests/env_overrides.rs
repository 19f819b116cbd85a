//! Environment variable layering.
//!
//! Every test runs inside a figment `Jail` so environment changes stay
//! isolated from the rest of the process.

use figment::Jail;
use probe_config::{CONFIG_FILE_NAME, ConfigDiscovery};

#[test]
fn env_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("PROBE_RESOLVER__MAX_PARALLEL_READS", "4");

        let config = ConfigDiscovery::new(jail.directory())
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.resolver.max_parallel_reads, 4);
        Ok(())
    });
}

#[test]
fn env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            CONFIG_FILE_NAME,
            r#"
[resolver]
max_parallel_reads = 2

[allow_list]
extra_packages = ["left-pad"]
"#,
        )?;
        jail.set_env("PROBE_RESOLVER__MAX_PARALLEL_READS", "6");

        let config = ConfigDiscovery::new(jail.directory())
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.resolver.max_parallel_reads, 6);
        assert_eq!(config.allow_list.extra_packages, vec!["left-pad"]);
        Ok(())
    });
}

#[test]
fn env_array_of_packages() {
    Jail::expect_with(|jail| {
        jail.set_env("PROBE_ALLOW_LIST__EXTRA_PACKAGES", "[left-pad, is-even]");

        let config = ConfigDiscovery::new(jail.directory())
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.allow_list.extra_packages, vec!["left-pad", "is-even"]);
        assert!(config.allow_list().contains("is-even"));
        Ok(())
    });
}

#[test]
fn env_values_are_validated() {
    Jail::expect_with(|jail| {
        jail.set_env("PROBE_RESOLVER__MAX_PARALLEL_READS", "0");

        let result = ConfigDiscovery::new(jail.directory()).load();
        assert!(result.is_err());
        Ok(())
    });
}
