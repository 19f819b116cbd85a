//! Results of a resolution call.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::dialect::Dialect;

/// Successful resolution: every local file the entrypoint needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependencies {
    entrypoint: PathBuf,
    dialect: Dialect,
    files: Vec<PathBuf>,
}

impl Dependencies {
    pub fn new(entrypoint: PathBuf, dialect: Dialect, mut files: Vec<PathBuf>) -> Self {
        files.sort();
        Self {
            entrypoint,
            dialect,
            files,
        }
    }

    /// The entrypoint the call started from. Not part of [`files`](Self::files).
    pub fn entrypoint(&self) -> &Path {
        &self.entrypoint
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Absolute dependency paths, sorted.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.binary_search_by(|file| file.as_path().cmp(path)).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.files.iter()
    }

    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }
}

impl<'a> IntoIterator for &'a Dependencies {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// A file that exists but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    pub file: PathBuf,
    /// Parser message with `(line:column)` position.
    pub message: String,
}

/// Package names a single file references that the runtime does not provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsupportedPackages {
    pub file: PathBuf,
    /// Normalized package names in first-seen order, without duplicates.
    pub names: Vec<String>,
}

/// Everything wrong with a dependency graph, collected in one pass.
///
/// The three lists are independent. Files reachable only through a missing
/// or unparsable file were never visited, so these are a lower bound on the
/// problems in the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphErrors {
    pub missing_files: Vec<PathBuf>,
    pub parse_errors: Vec<ParseFailure>,
    pub unsupported_packages: Vec<UnsupportedPackages>,
}

impl GraphErrors {
    pub fn is_empty(&self) -> bool {
        self.missing_files.is_empty()
            && self.parse_errors.is_empty()
            && self.unsupported_packages.is_empty()
    }

    /// Number of individual problems across all three lists.
    pub fn problem_count(&self) -> usize {
        self.missing_files.len()
            + self.parse_errors.len()
            + self
                .unsupported_packages
                .iter()
                .map(|entry| entry.names.len())
                .sum::<usize>()
    }
}

impl fmt::Display for GraphErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Unable to resolve the dependencies of this check:")?;

        if !self.missing_files.is_empty() {
            writeln!(f, "  Missing files:")?;
            for file in &self.missing_files {
                writeln!(f, "    {}", file.display())?;
            }
        }

        if !self.parse_errors.is_empty() {
            writeln!(f, "  Parse errors:")?;
            for failure in &self.parse_errors {
                writeln!(f, "    {}: {}", failure.file.display(), failure.message)?;
            }
        }

        if !self.unsupported_packages.is_empty() {
            writeln!(f, "  Unsupported packages:")?;
            for entry in &self.unsupported_packages {
                writeln!(f, "    {}: {}", entry.file.display(), entry.names.join(", "))?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for GraphErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependencies_sorted_and_searchable() {
        let deps = Dependencies::new(
            PathBuf::from("/p/entry.js"),
            Dialect::Dynamic,
            vec![PathBuf::from("/p/b.js"), PathBuf::from("/p/a.js")],
        );
        assert_eq!(deps.files(), &[PathBuf::from("/p/a.js"), PathBuf::from("/p/b.js")]);
        assert!(deps.contains(Path::new("/p/b.js")));
        assert!(!deps.contains(Path::new("/p/entry.js")));
    }

    #[test]
    fn test_graph_errors_display_lists_everything() {
        let errors = GraphErrors {
            missing_files: vec![PathBuf::from("/p/gone.js")],
            parse_errors: vec![ParseFailure {
                file: PathBuf::from("/p/broken.js"),
                message: "Unexpected token (4:70)".to_string(),
            }],
            unsupported_packages: vec![UnsupportedPackages {
                file: PathBuf::from("/p/entry.js"),
                names: vec!["left-pad".to_string(), "right-pad".to_string()],
            }],
        };

        let rendered = errors.to_string();
        assert!(rendered.contains("Missing files:\n    /p/gone.js"));
        assert!(rendered.contains("/p/broken.js: Unexpected token (4:70)"));
        assert!(rendered.contains("/p/entry.js: left-pad, right-pad"));
        assert_eq!(errors.problem_count(), 4);
        assert!(!errors.is_empty());
        assert!(GraphErrors::default().is_empty());
    }

    #[test]
    fn test_graph_errors_serialize_camel_case() {
        let value = serde_json::to_value(GraphErrors::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "missingFiles": [],
                "parseErrors": [],
                "unsupportedPackages": [],
            })
        );
    }
}
