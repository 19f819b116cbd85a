//! Packages available in the remote execution environment.
//!
//! The remote runtime ships a curated set of built-in modules and npm
//! packages. Any bare specifier a script references must map onto one of
//! them, otherwise the check would fail remotely after upload.

use std::fmt;

use rustc_hash::FxHashSet;

/// Identifier of the runtime snapshot the built-in list describes.
pub const RUNTIME_VERSION: &str = "2024.09";

/// Node built-in modules exposed by the runtime.
pub const BUILTIN_MODULES: &[&str] = &[
    "assert",
    "buffer",
    "crypto",
    "dns",
    "events",
    "fs",
    "http",
    "https",
    "net",
    "os",
    "path",
    "querystring",
    "readline",
    "stream",
    "string_decoder",
    "timers",
    "tls",
    "url",
    "util",
    "zlib",
];

/// Third-party packages preinstalled in the runtime.
pub const RUNTIME_PACKAGES: &[&str] = &[
    "@aws-sdk/client-s3",
    "@axe-core/playwright",
    "@faker-js/faker",
    "@opentelemetry/api",
    "@playwright/test",
    "ajv",
    "aws4",
    "axios",
    "btoa",
    "chai",
    "chai-string",
    "crypto-js",
    "date-fns",
    "date-fns-tz",
    "dotenv",
    "ethers",
    "expect",
    "form-data",
    "jsonwebtoken",
    "lodash",
    "mocha",
    "moment",
    "otpauth",
    "playwright",
    "uuid",
    "ws",
    "xml2js",
];

/// Immutable set of package names a script may reference.
///
/// Built once and handed to the resolver by value; nothing mutates it while
/// a resolution call is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    runtime: String,
    names: FxHashSet<String>,
}

impl AllowList {
    /// An allow-list holding exactly `names`.
    pub fn new<I, S>(runtime: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            runtime: runtime.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The snapshot for [`RUNTIME_VERSION`]: built-ins plus preinstalled packages.
    pub fn runtime_default() -> Self {
        Self::new(
            RUNTIME_VERSION,
            BUILTIN_MODULES.iter().chain(RUNTIME_PACKAGES).copied(),
        )
    }

    /// Add packages provisioned on top of the snapshot.
    pub fn with_packages<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether a normalized package name is allowed.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Whether a raw bare specifier (`lodash/fp`, `node:fs`) is allowed.
    pub fn permits(&self, specifier: &str) -> bool {
        self.contains(package_name(specifier))
    }

    /// Runtime identifier this list belongs to.
    pub fn runtime(&self) -> &str {
        &self.runtime
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in lexical order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::runtime_default()
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "runtime {} ({} packages)", self.runtime, self.names.len())
    }
}

/// Reduce a bare specifier to the package name it refers to.
///
/// ```
/// use probe_graph::allow_list::package_name;
///
/// assert_eq!(package_name("@playwright/test/reporter"), "@playwright/test");
/// assert_eq!(package_name("lodash/fp"), "lodash");
/// assert_eq!(package_name("node:crypto"), "crypto");
/// ```
pub fn package_name(specifier: &str) -> &str {
    let specifier = specifier.strip_prefix("node:").unwrap_or(specifier);
    if specifier.is_empty() {
        return specifier;
    }

    // Scoped packages keep two segments (@org/package)
    if specifier.starts_with('@') {
        if let Some(first_slash) = specifier.find('/') {
            if let Some(second_slash) = specifier[first_slash + 1..].find('/') {
                return &specifier[..first_slash + 1 + second_slash];
            }
        }
        return specifier;
    }

    match specifier.find('/') {
        Some(slash_idx) => &specifier[..slash_idx],
        None => specifier,
    }
}
