//! End-to-end tests for the `probe` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn probe(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("probe").unwrap();
    cmd.current_dir(dir).arg("--no-color");
    cmd
}

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn deps_lists_local_files() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "checks/login.js",
        "const axios = require('axios');\nconst h = require('../lib/helper');\n",
    );
    write(temp.path(), "lib/helper.js", "module.exports = require('./util.js');\n");
    write(temp.path(), "lib/util.js", "module.exports = 1;\n");

    probe(temp.path())
        .args(["deps", "checks/login.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("helper.js"))
        .stdout(predicate::str::contains("util.js"))
        .stdout(predicate::str::contains("login.js").not());
}

#[test]
fn quiet_suppresses_status_lines() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "entry.js", "require('./helper');\n");
    write(temp.path(), "helper.js", "module.exports = 1;\n");

    probe(temp.path())
        .args(["--quiet", "deps", "entry.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("helper.js"))
        .stderr(predicate::str::is_empty());

    probe(temp.path())
        .args(["packages", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("axios"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn deps_json_success() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.ts", "import { b } from './b';\nimport { test } from '@playwright/test';\n");
    write(temp.path(), "b.ts", "export const b = 1;\n");

    let output = probe(temp.path())
        .args(["deps", "a.ts", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["dialect"], "typed-superset");
    let files = value["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].as_str().unwrap().ends_with("b.ts"));
}

#[test]
fn deps_reports_every_problem() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "entry.js",
        "require('./missing');\nrequire('./broken');\nrequire('left-pad');\n",
    );
    write(temp.path(), "broken.js", "const = ;\n");

    probe(temp.path())
        .args(["deps", "entry.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.js"))
        .stderr(predicate::str::contains("broken.js"))
        .stderr(predicate::str::contains("left-pad"));
}

#[test]
fn deps_json_failure_keeps_lists_on_stdout() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "entry.js", "require('./gone');\nrequire('is-even');\n");

    let output = probe(temp.path())
        .args(["deps", "entry.js", "--json"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "failed");
    assert!(value["missingFiles"][0].as_str().unwrap().ends_with("gone.js"));
    assert_eq!(value["unsupportedPackages"][0]["names"][0], "is-even");
}

#[test]
fn deps_follows_import_equals_in_typescript() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "entry.ts", "import helper = require('./helper');\nhelper();\n");
    write(temp.path(), "helper.ts", "export = () => 1;\n");

    probe(temp.path())
        .args(["deps", "entry.ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("helper.ts"));
}

#[test]
fn deps_rejects_unknown_extension() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "check.mjs", "export {};\n");

    probe(temp.path())
        .args(["deps", "check.mjs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file extension"));
}

#[test]
fn config_extra_packages_are_allowed() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "entry.js", "require('left-pad');\n");
    write(temp.path(), "probe.toml", "[allow_list]\nextra_packages = [\"left-pad\"]\n");

    probe(temp.path()).args(["deps", "entry.js"]).assert().success();
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "entry.js", "module.exports = 1;\n");

    probe(temp.path())
        .args(["deps", "entry.js", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "entry.js", "module.exports = 1;\n");
    write(temp.path(), "probe.toml", "[resolver]\nmax_parallel_reads = 0\n");

    probe(temp.path())
        .args(["deps", "entry.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_parallel_reads"));
}

#[test]
fn packages_lists_runtime_snapshot() {
    let temp = TempDir::new().unwrap();

    probe(temp.path())
        .arg("packages")
        .assert()
        .success()
        .stdout(predicate::str::contains("axios"))
        .stdout(predicate::str::contains("@playwright/test"));
}

#[test]
fn config_package_subpath_is_rejected() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "probe.toml", "[allow_list]\nextra_packages = [\"lodash/fp\"]\n");

    probe(temp.path())
        .arg("packages")
        .assert()
        .failure()
        .stderr(predicate::str::contains("use 'lodash'"));
}

#[test]
fn packages_json_includes_extras() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "probe.toml", "[allow_list]\nextra_packages = [\"left-pad\"]\n");

    let output = probe(temp.path())
        .args(["packages", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["runtime"], "2024.09");
    let packages: Vec<&str> = value["packages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(packages.contains(&"left-pad"));
    let mut sorted = packages.clone();
    sorted.sort_unstable();
    assert_eq!(packages, sorted);
}
