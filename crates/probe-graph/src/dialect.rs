//! Source dialects understood by the resolver.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The two script dialects a resolution call can run in.
///
/// A call is dialect-homogeneous: the entrypoint's extension picks the
/// dialect and every file discovered afterwards is parsed the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Plain JavaScript loading modules through `require(...)`.
    Dynamic,
    /// TypeScript using `import` / `export ... from` declarations.
    TypedSuperset,
}

impl Dialect {
    /// Infer the dialect from a path's extension.
    ///
    /// Only `.js` and `.ts` are recognized. Anything else, including no
    /// extension at all, returns `None`.
    ///
    /// ```
    /// use probe_graph::Dialect;
    /// use std::path::Path;
    ///
    /// assert_eq!(Dialect::from_path(Path::new("/checks/home.ts")), Some(Dialect::TypedSuperset));
    /// assert_eq!(Dialect::from_path(Path::new("/checks/home.mjs")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "js" => Some(Dialect::Dynamic),
            "ts" => Some(Dialect::TypedSuperset),
            _ => None,
        }
    }

    /// Extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Dialect::Dynamic => "js",
            Dialect::TypedSuperset => "ts",
        }
    }

    /// Extension with the leading dot, as appended to extensionless imports.
    pub fn suffix(self) -> &'static str {
        match self {
            Dialect::Dynamic => ".js",
            Dialect::TypedSuperset => ".ts",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Dynamic => f.write_str("javascript"),
            Dialect::TypedSuperset => f.write_str("typescript"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Dialect::from_path(Path::new("/a/b.js")), Some(Dialect::Dynamic));
        assert_eq!(Dialect::from_path(Path::new("/a/b.spec.ts")), Some(Dialect::TypedSuperset));
        assert_eq!(Dialect::from_path(Path::new("/a/b.tsx")), None);
        assert_eq!(Dialect::from_path(Path::new("/a/b.cjs")), None);
        assert_eq!(Dialect::from_path(Path::new("/a/Makefile")), None);
        assert_eq!(Dialect::from_path(Path::new("/a/b.JS")), None);
    }

    #[test]
    fn test_suffix_matches_extension() {
        for dialect in [Dialect::Dynamic, Dialect::TypedSuperset] {
            assert_eq!(dialect.suffix(), format!(".{}", dialect.extension()));
        }
    }
}
