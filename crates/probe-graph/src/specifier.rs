//! Classification and resolution of raw import specifiers.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::allow_list::package_name;
use crate::dialect::Dialect;

/// A specifier tagged with what it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference<'a> {
    /// A path on disk, relative to the importing file or absolute.
    Local(&'a str),
    /// A package name, already reduced with [`package_name`].
    Package(&'a str),
}

/// Classify a raw specifier.
///
/// Specifiers starting with `/`, `./` or `../` are local paths; everything
/// else names a package.
///
/// ```
/// use probe_graph::specifier::{classify, Reference};
///
/// assert_eq!(classify("./util"), Reference::Local("./util"));
/// assert_eq!(classify("lodash/fp"), Reference::Package("lodash"));
/// ```
pub fn classify(specifier: &str) -> Reference<'_> {
    if is_local(specifier) {
        Reference::Local(specifier)
    } else {
        Reference::Package(package_name(specifier))
    }
}

/// Whether a specifier is a local path.
pub fn is_local(specifier: &str) -> bool {
    specifier.starts_with('/') || specifier.starts_with("./") || specifier.starts_with("../")
}

/// Resolve a local specifier against the directory of the file importing it.
///
/// The joined path is normalized lexically (`.` and `..` collapsed, the file
/// need not exist) and the dialect's extension is appended unless the path
/// already ends in it. Absolute specifiers replace the importer's directory.
pub fn resolve_local(specifier: &str, importer: &Path, dialect: Dialect) -> PathBuf {
    let base = importer.parent().unwrap_or_else(|| Path::new("/"));
    let candidate = base.join(specifier).clean();
    with_dialect_suffix(candidate, dialect)
}

fn with_dialect_suffix(path: PathBuf, dialect: Dialect) -> PathBuf {
    let suffix = dialect.suffix();
    if path.as_os_str().as_encoded_bytes().ends_with(suffix.as_bytes()) {
        return path;
    }

    let mut raw = path.into_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("/abs/file"), Reference::Local("/abs/file"));
        assert_eq!(classify("./sibling"), Reference::Local("./sibling"));
        assert_eq!(classify("../parent"), Reference::Local("../parent"));
        assert_eq!(classify("axios"), Reference::Package("axios"));
        assert_eq!(classify("@playwright/test"), Reference::Package("@playwright/test"));
        assert_eq!(classify("node:path"), Reference::Package("path"));
        // Not a relative path without the slash
        assert_eq!(classify(".hidden"), Reference::Package(".hidden"));
        assert_eq!(classify(".."), Reference::Package(".."));
    }

    #[test]
    fn test_resolve_relative_to_importer() {
        let importer = Path::new("/project/checks/api/home.js");
        assert_eq!(
            resolve_local("./helpers", importer, Dialect::Dynamic),
            PathBuf::from("/project/checks/api/helpers.js")
        );
        assert_eq!(
            resolve_local("../shared/auth", importer, Dialect::Dynamic),
            PathBuf::from("/project/checks/shared/auth.js")
        );
        assert_eq!(
            resolve_local("./a/../b/./c", importer, Dialect::Dynamic),
            PathBuf::from("/project/checks/api/b/c.js")
        );
    }

    #[test]
    fn test_existing_extension_kept() {
        let importer = Path::new("/project/home.ts");
        assert_eq!(
            resolve_local("./util.ts", importer, Dialect::TypedSuperset),
            PathBuf::from("/project/util.ts")
        );
        // Only the dialect's own extension counts
        assert_eq!(
            resolve_local("./util.js", importer, Dialect::TypedSuperset),
            PathBuf::from("/project/util.js.ts")
        );
        assert_eq!(
            resolve_local("./data.json", Path::new("/project/home.js"), Dialect::Dynamic),
            PathBuf::from("/project/data.json.js")
        );
    }

    #[test]
    fn test_absolute_specifier() {
        let importer = Path::new("/project/checks/home.js");
        assert_eq!(
            resolve_local("/lib/common", importer, Dialect::Dynamic),
            PathBuf::from("/lib/common.js")
        );
    }
}
